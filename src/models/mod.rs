//! Core data models for the personal assistant
//!
//! Contacts, notes, the shared [`Record`] abstraction and field validators.

pub mod contact;
pub mod note;
pub mod record;
pub mod validation;

pub use contact::Contact;
pub use note::Note;
pub use record::{normalize_key, Record, RecordSelector};
pub use validation::{parse_birthday, validate_email, validate_phone, ValidationError};
