//! `gridstyle-cascade` is the merge core underneath the gridstyle model types.
//!
//! Model nodes are plain mutable value types whose scalar properties carry
//! documented defaults. Three operations are defined over them:
//!
//! - **inheritance** ([`Inherit`], [`fill`]): a one-directional merge that
//!   overwrites every property still at its default with the corresponding
//!   value from a read-only reference model, recursing into nested nodes and
//!   keyed collections. A property the caller has customized always wins.
//! - **patching** ([`ApplyPatch`], [`patch`]): a sparse partial update driven
//!   by a shadow struct of all-`Option` fields. A present field overwrites
//!   unconditionally; an absent field leaves the target untouched.
//! - **named resolution** ([`Scope`]): an ordered, name-keyed collection in
//!   which `inherits = "<name>"` links are resolved before a model is
//!   considered final.
//!
//! All walks are synchronous, single-pass, and terminate unconditionally:
//! ownership between nodes is strictly hierarchical, never cyclic. The crate
//! performs no I/O and holds no global state; whatever scope a resolution
//! needs is passed in explicitly.

pub mod fill;
pub mod patch;
mod scope;

pub use fill::{Defaulted, Inherit, Keyed};
pub use patch::ApplyPatch;
pub use scope::{Inherits, Scope, ScopeError};
