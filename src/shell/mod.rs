//! Interactive shell
//!
//! A numbered menu loop over any line-oriented input and output. Each menu
//! entry prompts for its fields and calls the contact or note service.
//! Operation errors are printed and the loop continues; end of input exits.

pub mod menu;

use std::io::{BufRead, Write};

use log::debug;

use crate::config::Settings;
use crate::display::{format_birthday_list, format_contact_list, format_note_list};
use crate::error::{AssistantError, AssistantResult};
use crate::models::RecordSelector;
use crate::services::{
    ContactInput, ContactPatch, ContactService, NotePatch, NoteService,
};
use crate::storage::Storage;

pub use menu::{MenuChoice, MENU};

/// Whether the loop keeps going after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Read a line or leave the current operation at end of input
macro_rules! ask {
    ($shell:expr, $($arg:tt)*) => {
        match $shell.prompt(&format!($($arg)*))? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

/// The interactive menu shell
pub struct Shell<'a, R: BufRead, W: Write> {
    contacts: ContactService<'a>,
    notes: NoteService<'a>,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            contacts: ContactService::new(storage, settings),
            notes: NoteService::new(storage),
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until `exit` or end of input
    pub fn run(&mut self) -> AssistantResult<()> {
        writeln!(self.output, "Personal assistant. Type 0 for help.")?;
        write!(self.output, "{}", MENU)?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Unknown command: {}", line)?;
                write!(self.output, "{}", MENU)?;
                continue;
            };
            debug!("shell choice {:?}", choice);

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AssistantResult<Flow> {
        match choice {
            MenuChoice::Help => {
                write!(self.output, "{}", MENU)?;
                writeln!(
                    self.output,
                    "Records can be named by key or by list position (#1, #2, ...).\n\
                     Type \\#12 for a record whose key is literally #12."
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::AddContact => self.add_contact(),
            MenuChoice::EditContact => self.edit_contact(),
            MenuChoice::DeleteContact => self.delete_contact(),
            MenuChoice::SearchContacts => self.search_contacts(),
            MenuChoice::UpcomingBirthdays => self.upcoming_birthdays(),
            MenuChoice::AddNote => self.add_note(),
            MenuChoice::EditNote => self.edit_note(),
            MenuChoice::DeleteNote => self.delete_note(),
            MenuChoice::SearchNotes => self.search_notes(),
            MenuChoice::ListContacts => {
                let contacts = self.contacts.list()?;
                self.show(&format_contact_list(&contacts))
            }
            MenuChoice::ListNotes => {
                let notes = self.notes.list()?;
                self.show(&format_note_list(&notes))
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> AssistantResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, text: &str) -> AssistantResult<Flow> {
        writeln!(self.output, "{}", text.trim_end())?;
        Ok(Flow::Continue)
    }

    fn add_contact(&mut self) -> AssistantResult<Flow> {
        let input = ContactInput {
            name: ask!(self, "Name: "),
            address: ask!(self, "Address: "),
            phone: ask!(self, "Phone: "),
            email: ask!(self, "Email: "),
            birthday: ask!(self, "Birthday (YYYY-MM-DD, blank if unknown): "),
        };

        let contact = self.contacts.add(input)?;
        self.show(&format!("Contact added: {}", contact.name))
    }

    fn edit_contact(&mut self) -> AssistantResult<Flow> {
        let selector = RecordSelector::from(ask!(self, "Contact to edit (name or #N): ").as_str());
        let current = self.contacts.get(&selector)?;

        let patch = ContactPatch {
            name: Some(ask!(self, "{}", with_default("Name", &current.name))),
            address: Some(ask!(self, "{}", with_default("Address", &current.address))),
            phone: Some(ask!(self, "{}", with_default("Phone", &current.phone))),
            email: Some(ask!(self, "{}", with_default("Email", &current.email))),
            birthday: Some(ask!(
                self,
                "{}",
                with_default("Birthday", &current.birthday_display())
            )),
        };

        let contact = self.contacts.edit(&selector, &patch)?;
        self.show(&format!("Contact updated: {}", contact.name))
    }

    fn delete_contact(&mut self) -> AssistantResult<Flow> {
        let selector = RecordSelector::from(ask!(self, "Contact to delete (name or #N): ").as_str());
        let removed = self.contacts.delete(&selector)?;
        self.show(&format!("Deleted {} contact(s).", removed.len()))
    }

    fn search_contacts(&mut self) -> AssistantResult<Flow> {
        let query = ask!(self, "Search contacts: ");
        let found = self.contacts.search(&query)?;
        self.show(&format_contact_list(&found))
    }

    fn upcoming_birthdays(&mut self) -> AssistantResult<Flow> {
        let default_days = self.settings.birthday_window_days;
        let answer = ask!(self, "Days ahead [{}]: ", default_days);
        let days = if answer.is_empty() {
            default_days
        } else {
            answer.parse::<u32>().map_err(|_| {
                AssistantError::Validation(format!(
                    "Days must be a non-negative whole number, got '{}'",
                    answer
                ))
            })?
        };

        let upcoming = self.contacts.upcoming_birthdays(Some(days))?;
        let text = format_birthday_list(&upcoming, days, &self.settings.date_format);
        self.show(&text)
    }

    fn add_note(&mut self) -> AssistantResult<Flow> {
        let text = ask!(self, "Text: ");
        let tags = ask!(self, "Tags (comma-separated): ");

        let note = self.notes.add(&text, &tags)?;
        self.show(&format!("Note added: {}", note.text))
    }

    fn edit_note(&mut self) -> AssistantResult<Flow> {
        let selector = RecordSelector::from(ask!(self, "Note to edit (text or #N): ").as_str());
        let current = self.notes.get(&selector)?;

        let patch = NotePatch {
            text: Some(ask!(self, "{}", with_default("Text", &current.text))),
            tags: Some(ask!(self, "{}", with_default("Tags", &current.tags_display()))),
        };

        let note = self.notes.edit(&selector, &patch)?;
        self.show(&format!("Note updated: {}", note.text))
    }

    fn delete_note(&mut self) -> AssistantResult<Flow> {
        let selector = RecordSelector::from(ask!(self, "Note to delete (text or #N): ").as_str());
        let removed = self.notes.delete(&selector)?;
        self.show(&format!("Deleted {} note(s).", removed.len()))
    }

    /// `tag:<name>` searches tags only
    fn search_notes(&mut self) -> AssistantResult<Flow> {
        let query = ask!(self, "Search notes (tag:<name> for tags only): ");
        let found = match query.strip_prefix("tag:") {
            Some(tag) => self.notes.search_by_tag(tag)?,
            None => self.notes.search(&query)?,
        };
        self.show(&format_note_list(&found))
    }
}

/// `Label [current]: `, or `Label: ` when there is no current value
fn with_default(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AssistantPaths;
    use crate::config::StorageLayout;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, StorageLayout::Split).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn run_session(storage: &Storage, settings: &Settings, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(storage, settings, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_search_contact() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(
            &storage,
            &settings,
            "1\nAnn\n1 Main St\n+12025550123\na@b.com\n1990-05-01\n4\nan\n10\n",
        );

        assert!(output.contains("Contact added: Ann"));
        assert!(output.contains("1  Ann"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(storage.contacts.count().unwrap(), 1);
    }

    #[test]
    fn test_validation_error_keeps_loop_running() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(
            &storage,
            &settings,
            "1\nAnn\n\n12\na@b.com\n\n6\nBuy milk\nshopping\nquit\n",
        );

        assert!(output.contains("Error: Validation error: Invalid phone number '12'"));
        assert!(output.contains("Note added: Buy milk"));
        assert_eq!(storage.contacts.count().unwrap(), 0);
        assert_eq!(storage.notes.count().unwrap(), 1);
    }

    #[test]
    fn test_edit_prompts_show_current_values() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(
            &storage,
            &settings,
            "1\nAnn\n\n+12025550123\na@b.com\n\n2\nann\n\n2 Side St\n\nann@new.org\n\n",
        );

        assert!(output.contains("Phone [+12025550123]: "));
        assert!(output.contains("Address: "));
        assert!(output.contains("Contact updated: Ann"));

        let ann = &storage.contacts.get_all().unwrap()[0];
        assert_eq!(ann.address, "2 Side St");
        assert_eq!(ann.phone, "+12025550123");
        assert_eq!(ann.email, "ann@new.org");
    }

    #[test]
    fn test_unknown_command_and_eof() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(&storage, &settings, "hello\n");

        assert!(output.contains("Unknown command: hello"));
        assert_eq!(output.matches("1. Add contact").count(), 2);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_eof_mid_operation_exits_without_change() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(&storage, &settings, "1\nAnn\n");

        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(storage.contacts.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_note_by_index_and_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(
            &storage,
            &settings,
            "6\nBuy milk\n\n6\nCall mom\nfamily\n8\n#1\n8\n#5\n9\ntag:fam\n12\n10\n",
        );

        assert!(output.contains("Deleted 1 note(s)."));
        assert!(output.contains("Error: Note #5 does not exist (have 1)"));
        assert!(output.contains("1. Call mom\n   [family]"));
        assert_eq!(storage.notes.get_all().unwrap()[0].text, "Call mom");
    }

    #[test]
    fn test_birthday_days_must_be_number() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let output = run_session(&storage, &settings, "5\nsoon\n5\n\n10\n");

        assert!(output.contains("Days must be a non-negative whole number"));
        assert!(output.contains("Days ahead [7]: "));
        assert!(output.contains("No birthdays in the next 7 day(s)."));
    }
}
