//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod contact;
pub mod export;
pub mod history;
pub mod note;

pub use backup::{handle_backup_command, BackupCommands};
pub use contact::{handle_birthdays_command, handle_contact_command, ContactCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use note::{handle_note_command, NoteCommands};
