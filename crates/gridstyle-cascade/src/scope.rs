//! Ordered, name-keyed scopes and `inherits` resolution.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::fill::{self, Inherit, Keyed};

/// Errors raised by scope registration and lookup.
///
/// [`ScopeError::NotFound`] is a lookup failure, deliberately distinct from
/// the validation errors model setters raise: callers decide whether an
/// unresolved name is fatal or means "use the model as-is".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("no model named {0:?} in scope")]
    NotFound(String),
    #[error("a model named {0:?} already exists in scope")]
    Duplicate(String),
    #[error("models registered in a scope need a non-empty name")]
    EmptyName,
}

/// Models that link to a named reference model by key.
///
/// The link is weak: it is resolved on demand against a [`Scope`] and may
/// fail without mutating anything.
pub trait Inherits {
    /// Key of the reference model, if one is declared.
    ///
    /// Implementations return `None` for a blank declaration.
    fn inherits(&self) -> Option<&str>;
}

/// An ordered collection of models addressed by their [`Keyed`] name.
///
/// Insertion order is preserved and meaningful: it is the declaration order
/// used by [`Scope::resolve_inheritance`]. Lookup is a linear first-match
/// scan; scopes are small and resolution has no side effects, so no index is
/// kept.
#[derive(Clone, Debug, PartialEq)]
pub struct Scope<T> {
    entries: Vec<T>,
}

impl<T> Scope<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T: Keyed> Scope<T> {
    /// Register a model under its own key.
    ///
    /// Fails on an empty key or a key already present, so lookups stay
    /// unambiguous for anything registered through this path.
    pub fn insert(&mut self, entry: T) -> Result<(), ScopeError> {
        let key = entry.key();
        if key.trim().is_empty() {
            return Err(ScopeError::EmptyName);
        }
        if self.contains(key) {
            return Err(ScopeError::Duplicate(key.to_owned()));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.key() == name)
    }

    /// First entry registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.key() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.key() == name)
    }

    /// Like [`Scope::get`], but absence is an error the caller can surface.
    pub fn resolve(&self, name: &str) -> Result<&T, ScopeError> {
        self.get(name)
            .ok_or_else(|| ScopeError::NotFound(name.to_owned()))
    }
}

impl<T: Keyed + Inherits + Inherit + Clone> Scope<T> {
    /// Resolve every entry's `inherits` link and merge the reference in.
    ///
    /// Entries are walked in declaration order, so a base declared before its
    /// dependents is already resolved by the time they consume it. The lookup
    /// error for a dangling link surfaces before the dependent entry is
    /// mutated. An entry inheriting itself degenerates to the idempotent
    /// self-merge.
    pub fn resolve_inheritance(&mut self) -> Result<(), ScopeError> {
        for index in 0..self.entries.len() {
            let Some(base_name) = self.entries[index].inherits().map(str::to_owned) else {
                continue;
            };
            let base = self.resolve(&base_name)?.clone();
            self.entries[index].inherit_from(&base);
        }
        Ok(())
    }
}

impl<T: Keyed + Inherit + Clone> Inherit for Scope<T> {
    /// Keyed merge over the registered entries: same-keyed entries fill their
    /// gaps from the reference, unmatched reference entries are adopted.
    fn inherit_from(&mut self, reference: &Self) {
        fill::keyed(&mut self.entries, &reference.entries);
    }
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Scope<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Serialize> Serialize for Scope<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + Keyed> Deserialize<'de> for Scope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<T>::deserialize(deserializer)?;
        let mut scope = Scope::new();
        for entry in entries {
            scope.insert(entry).map_err(D::Error::custom)?;
        }
        Ok(scope)
    }
}
