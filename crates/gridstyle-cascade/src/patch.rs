//! Sparse partial updates.
//!
//! A patch mirrors its model with every field made `Option`. Unlike the
//! defaulted merge in [`crate::fill`], a present patch field overwrites the
//! target unconditionally, even when the target already holds a customized
//! value; an absent field leaves the target untouched. Values that flow
//! through constrained setters surface the same validation error a direct
//! assignment would, and the pass stops at the first error (in-place
//! mutation, no rollback).

/// Models that accept a sparse patch.
pub trait ApplyPatch {
    /// The all-`Option` shadow of this model.
    type Patch;
    /// Validation error raised when a patched value violates a setter
    /// constraint.
    type Error;

    fn apply_patch(&mut self, patch: &Self::Patch) -> Result<(), Self::Error>;
}

/// Overwrite `target` when the patch field is present.
pub fn set<T: Clone>(target: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        target.clone_from(value);
    }
}

/// Overwrite an optional target field when the patch field is present.
///
/// Patches cannot clear a field back to unset; that would require a
/// doubly-optional encoding nothing in the model layer needs.
pub fn set_option<T: Clone>(target: &mut Option<T>, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = Some(value.clone());
    }
}

/// Recurse into an optional nested node.
///
/// A present nested patch always recurses, even when all of its own fields
/// are absent; a default child is materialized if the target had none.
pub fn node<T>(target: &mut Option<T>, patch: &Option<T::Patch>) -> Result<(), T::Error>
where
    T: ApplyPatch + Default,
{
    if let Some(patch) = patch {
        target.get_or_insert_with(T::default).apply_patch(patch)?;
    }
    Ok(())
}
