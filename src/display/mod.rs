//! Display formatting for terminal output
//!
//! Formats contacts, notes and birthday results as plain-text tables and
//! lists, shared by the command line and the interactive shell.

pub mod contact;
pub mod note;

pub use contact::{format_birthday_list, format_contact_details, format_contact_list};
pub use note::format_note_list;
