//! Service layer for the personal assistant
//!
//! The service layer provides the operations on top of the storage layer,
//! handling input normalization, validation and audit logging.

pub mod contact;
pub mod note;
pub mod selection;

pub use contact::{ContactInput, ContactPatch, ContactService};
pub use note::{NotePatch, NoteService};

/// A patch value that should replace the current one, if any
///
/// `None`, empty and whitespace-only input all mean "keep".
pub(crate) fn provided(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
