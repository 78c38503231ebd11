//! Fill-the-gaps merge rules.
//!
//! "Default" is decided by value equality: a property explicitly assigned a
//! value equal to its documented default is indistinguishable from one never
//! touched, and both take the reference's value during a merge.

/// Types whose properties carry documented defaults.
pub trait Defaulted {
    /// True when every scalar property equals its documented default and
    /// every nested node is itself default.
    ///
    /// Always recomputed from current property state, never cached.
    fn is_default(&self) -> bool;
}

/// The defaulted merge: fill still-default properties from a reference.
///
/// Implementations mutate `self` in place and treat `reference` as read-only.
/// Identity fields (names) and link fields (`inherits` keys) are not merged.
/// The merge itself never fails; absence of a reference counterpart means
/// there is nothing to inherit. Preconditions (such as a chart requiring a
/// name before resolving its template) are enforced by the entry points that
/// pair a model with its reference, not by the walk.
pub trait Inherit {
    fn inherit_from(&mut self, reference: &Self);
}

/// Collection elements addressed by a stable string key during a merge.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Overwrite `target` with `reference` iff `target` still equals `default`.
pub fn value<T: PartialEq + Clone>(target: &mut T, reference: &T, default: &T) {
    if target == default {
        target.clone_from(reference);
    }
}

/// Overwrite `target` with `reference` iff `target` is unset.
pub fn option<T: Clone>(target: &mut Option<T>, reference: &Option<T>) {
    if target.is_none() {
        target.clone_from(reference);
    }
}

/// String rule: an empty string is the default, whatever the declared value.
pub fn text(target: &mut String, reference: &str) {
    if target.is_empty() {
        reference.clone_into(target);
    }
}

/// Recurse into an optional nested node.
///
/// A missing reference child terminates the recursion; a missing target child
/// adopts a clone of the reference child (it was still default).
pub fn node<T: Inherit + Clone>(target: &mut Option<T>, reference: &Option<T>) {
    match (target.as_mut(), reference) {
        (Some(target), Some(reference)) => target.inherit_from(reference),
        (None, Some(reference)) => *target = Some(reference.clone()),
        (_, None) => {}
    }
}

/// Merge a keyed collection.
///
/// An empty target adopts clones of every reference element in reference
/// order. Otherwise each target element merges with the first same-keyed
/// reference element (first occurrence wins on duplicate keys), and clones of
/// reference elements whose key has no counterpart are appended afterwards:
/// the target's own elements stay first, in their original order.
pub fn keyed<T: Keyed + Inherit + Clone>(target: &mut Vec<T>, reference: &[T]) {
    if target.is_empty() {
        target.extend(reference.iter().cloned());
        return;
    }

    for entry in target.iter_mut() {
        if let Some(source) = reference.iter().find(|r| r.key() == entry.key()) {
            entry.inherit_from(source);
        }
    }

    for source in reference {
        if !target.iter().any(|entry| entry.key() == source.key()) {
            target.push(source.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Default)]
    struct Section {
        name: String,
        width: u32,
        label: String,
    }

    impl Keyed for Section {
        fn key(&self) -> &str {
            &self.name
        }
    }

    impl Inherit for Section {
        fn inherit_from(&mut self, reference: &Self) {
            value(&mut self.width, &reference.width, &0);
            text(&mut self.label, &reference.label);
        }
    }

    fn section(name: &str, width: u32, label: &str) -> Section {
        Section {
            name: name.into(),
            width,
            label: label.into(),
        }
    }

    #[test]
    fn value_fill_respects_customization() {
        let mut width = 0u32;
        value(&mut width, &40, &0);
        assert_eq!(width, 40);

        let mut width = 25u32;
        value(&mut width, &40, &0);
        assert_eq!(width, 25);
    }

    #[test]
    fn text_fill_treats_empty_as_default() {
        let mut label = String::new();
        text(&mut label, "Total");
        assert_eq!(label, "Total");

        text(&mut label, "Other");
        assert_eq!(label, "Total");
    }

    #[test]
    fn node_adopts_missing_target_child() {
        let mut target: Option<Section> = None;
        let reference = Some(section("a", 10, "A"));
        node(&mut target, &reference);
        assert_eq!(target, reference);

        // Missing reference child leaves the target alone.
        let snapshot = target.clone();
        node(&mut target, &None);
        assert_eq!(target, snapshot);
    }

    #[test]
    fn keyed_merge_preserves_target_order_then_adopts() {
        let mut target = vec![section("a", 25, "")];
        let reference = vec![section("a", 40, "Alpha"), section("b", 60, "Beta")];

        keyed(&mut target, &reference);

        assert_eq!(target.len(), 2);
        // "a" keeps its customization and fills the rest.
        assert_eq!(target[0], section("a", 25, "Alpha"));
        // "b" is adopted verbatim, after the target's own elements.
        assert_eq!(target[1], section("b", 60, "Beta"));
    }

    #[test]
    fn keyed_merge_into_empty_target_clones_everything() {
        let mut target: Vec<Section> = Vec::new();
        let reference = vec![section("a", 1, "x"), section("b", 2, "y")];
        keyed(&mut target, &reference);
        assert_eq!(target, reference);
    }

    #[test]
    fn keyed_merge_duplicate_reference_key_first_occurrence_wins() {
        let mut target = vec![section("a", 0, "")];
        let reference = vec![section("a", 1, "first"), section("a", 2, "second")];
        keyed(&mut target, &reference);
        assert_eq!(target.len(), 1);
        assert_eq!(target[0], section("a", 1, "first"));
    }
}
