use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{Inherit, Inherits, Keyed, Scope};

use crate::Style;

/// Maximum length of a style name in characters.
pub const STYLE_NAME_MAX_LEN: usize = 255;

/// Validation errors for style names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleNameError {
    #[error("style name cannot be empty")]
    Empty,
    #[error("style name is too long ({len} > {max})", max = STYLE_NAME_MAX_LEN)]
    TooLong { len: usize },
    #[error("style name contains control character at index {index}")]
    ControlCharacter { index: usize },
}

/// Validate a style name.
///
/// Style names are user-visible labels ("Heading 1", "Warning.Red"), so the
/// rules are looser than defined-name rules: non-empty after trimming, at
/// most [`STYLE_NAME_MAX_LEN`] characters, no control characters.
pub fn validate_style_name(name: &str) -> Result<(), StyleNameError> {
    if name.trim().is_empty() {
        return Err(StyleNameError::Empty);
    }
    let len = name.chars().count();
    if len > STYLE_NAME_MAX_LEN {
        return Err(StyleNameError::TooLong { len });
    }
    for (index, ch) in name.chars().enumerate() {
        if ch.is_control() {
            return Err(StyleNameError::ControlCharacter { index });
        }
    }
    Ok(())
}

/// A named, registrable cell style.
///
/// The name is the style's identity within a [`StyleSheet`]; `inherits` is a
/// weak link to another named style, resolved when the sheet's inheritance
/// pass runs rather than at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStyle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    #[serde(default, skip_serializing_if = "Style::is_default")]
    pub style: Style,
}

impl NamedStyle {
    /// Create a named style, validating the name.
    pub fn new(name: impl Into<String>, style: Style) -> Result<Self, StyleNameError> {
        let name = name.into();
        validate_style_name(&name)?;
        Ok(Self {
            name,
            inherits: None,
            style,
        })
    }

    /// Declare the named reference style this one fills its gaps from.
    pub fn with_inherits(mut self, base: impl Into<String>) -> Result<Self, StyleNameError> {
        let base = base.into();
        validate_style_name(&base)?;
        self.inherits = Some(base);
        Ok(self)
    }
}

impl Keyed for NamedStyle {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Inherits for NamedStyle {
    fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl Inherit for NamedStyle {
    /// Only the style body participates in the merge; `name` is identity and
    /// `inherits` is a link, neither is inherited.
    fn inherit_from(&mut self, reference: &Self) {
        self.style.inherit_from(&reference.style);
    }
}

/// The document's ordered collection of named styles.
///
/// `resolve_inheritance` walks entries in declaration order; see
/// [`Scope::resolve_inheritance`].
pub type StyleSheet = Scope<NamedStyle>;
