//! Note CLI commands

use clap::Subcommand;

use crate::display::format_note_list;
use crate::error::AssistantResult;
use crate::models::RecordSelector;
use crate::services::{NotePatch, NoteService};
use crate::storage::Storage;

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a new note
    Add {
        /// Note text
        text: String,
        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Edit a note; omitted fields keep their value
    Edit {
        /// Note text or list position (#N)
        note: String,
        /// New text
        #[arg(long)]
        text: Option<String>,
        /// New comma-separated tags, replacing the current ones
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete every note with this text, or the one at #N
    Delete {
        /// Note text or list position (#N)
        note: String,
    },

    /// Search notes by substring of text or tags
    Search {
        /// Text to look for
        query: String,
        /// Match tags only
        #[arg(long)]
        tag: bool,
    },

    /// List all notes
    List,
}

/// Handle a note command
pub fn handle_note_command(storage: &Storage, cmd: NoteCommands) -> AssistantResult<()> {
    let service = NoteService::new(storage);

    match cmd {
        NoteCommands::Add { text, tags } => {
            let note = service.add(&text, &tags)?;
            println!("Added note: {}", note.text);
        }

        NoteCommands::Edit { note, text, tags } => {
            let updated = service.edit(
                &RecordSelector::from(note.as_str()),
                &NotePatch { text, tags },
            )?;
            println!("Updated note: {}", updated.text);
        }

        NoteCommands::Delete { note } => {
            let removed = service.delete(&RecordSelector::from(note.as_str()))?;
            println!("Deleted {} note(s).", removed.len());
        }

        NoteCommands::Search { query, tag } => {
            let found = if tag {
                service.search_by_tag(&query)?
            } else {
                service.search(&query)?
            };
            println!("{}", format_note_list(&found).trim_end());
        }

        NoteCommands::List => {
            let notes = service.list()?;
            println!("{}", format_note_list(&notes).trim_end());
        }
    }

    Ok(())
}
