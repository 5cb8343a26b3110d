//! Menu choices for the interactive shell

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Help,
    AddContact,
    EditContact,
    DeleteContact,
    SearchContacts,
    UpcomingBirthdays,
    AddNote,
    EditNote,
    DeleteNote,
    SearchNotes,
    Exit,
    ListContacts,
    ListNotes,
}

impl MenuChoice {
    /// Parse one line of input
    ///
    /// Numbers select menu entries; `exit`, `quit`, `q`, `help` and `?` are
    /// accepted in any case.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_lowercase().as_str() {
            "0" | "help" | "?" => Self::Help,
            "1" => Self::AddContact,
            "2" => Self::EditContact,
            "3" => Self::DeleteContact,
            "4" => Self::SearchContacts,
            "5" => Self::UpcomingBirthdays,
            "6" => Self::AddNote,
            "7" => Self::EditNote,
            "8" => Self::DeleteNote,
            "9" => Self::SearchNotes,
            "10" | "exit" | "quit" | "q" => Self::Exit,
            "11" => Self::ListContacts,
            "12" => Self::ListNotes,
            _ => return None,
        };
        Some(choice)
    }
}

/// The main menu text
pub const MENU: &str = "\
 1. Add contact         6. Add note
 2. Edit contact        7. Edit note
 3. Delete contact      8. Delete note
 4. Search contacts     9. Search notes
 5. Upcoming birthdays 11. List contacts
                       12. List notes
 0. Help               10. Exit
";
