//! Contact CLI commands
//!
//! Implements CLI commands for contact management and the birthday query.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_birthday_list, format_contact_details, format_contact_list};
use crate::error::AssistantResult;
use crate::models::RecordSelector;
use crate::query::SearchScope;
use crate::services::{ContactInput, ContactPatch, ContactService};
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone number (optional '+', 9-15 digits)
        #[arg(short, long)]
        phone: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Postal address
        #[arg(short, long, default_value = "")]
        address: String,
        /// Birthday (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        birthday: String,
    },

    /// Edit a contact; omitted fields keep their value
    Edit {
        /// Contact name or list position (#N)
        contact: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// New email address
        #[arg(short, long)]
        email: Option<String>,
        /// New postal address
        #[arg(short, long)]
        address: Option<String>,
        /// New birthday (YYYY-MM-DD)
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Delete every contact with this name, or the one at #N
    Delete {
        /// Contact name or list position (#N)
        contact: String,
    },

    /// Search contacts by substring
    Search {
        /// Text to look for
        query: String,
        /// Match names only
        #[arg(long)]
        name_only: bool,
        /// Match name, address, phone and email
        #[arg(long, conflicts_with = "name_only")]
        all_fields: bool,
    },

    /// List all contacts
    List,

    /// Show contact details
    Show {
        /// Contact name or list position (#N)
        contact: String,
    },
}

/// Handle a contact command
pub fn handle_contact_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ContactCommands,
) -> AssistantResult<()> {
    let service = ContactService::new(storage, settings);

    match cmd {
        ContactCommands::Add {
            name,
            phone,
            email,
            address,
            birthday,
        } => {
            let contact = service.add(ContactInput {
                name,
                address,
                phone,
                email,
                birthday,
            })?;
            println!("Added contact: {}", contact.name);
        }

        ContactCommands::Edit {
            contact,
            name,
            phone,
            email,
            address,
            birthday,
        } => {
            let patch = ContactPatch {
                name,
                address,
                phone,
                email,
                birthday,
            };
            let updated = service.edit(&RecordSelector::from(contact.as_str()), &patch)?;
            println!("Updated contact: {}", updated.name);
            print!("{}", format_contact_details(&updated));
        }

        ContactCommands::Delete { contact } => {
            let removed = service.delete(&RecordSelector::from(contact.as_str()))?;
            println!("Deleted {} contact(s).", removed.len());
        }

        ContactCommands::Search {
            query,
            name_only,
            all_fields,
        } => {
            let found = if name_only {
                service.search_in(&query, SearchScope::Name)?
            } else if all_fields {
                service.search_in(&query, SearchScope::AllFields)?
            } else {
                service.search(&query)?
            };
            println!("{}", format_contact_list(&found).trim_end());
        }

        ContactCommands::List => {
            let contacts = service.list()?;
            println!("{}", format_contact_list(&contacts).trim_end());
        }

        ContactCommands::Show { contact } => {
            let contact = service.get(&RecordSelector::from(contact.as_str()))?;
            print!("{}", format_contact_details(&contact));
        }
    }

    Ok(())
}

/// Handle the birthday query
pub fn handle_birthdays_command(
    storage: &Storage,
    settings: &Settings,
    days: Option<u32>,
) -> AssistantResult<()> {
    let service = ContactService::new(storage, settings);
    let days = days.unwrap_or(settings.birthday_window_days);

    let upcoming = service.upcoming_birthdays(Some(days))?;
    println!(
        "{}",
        format_birthday_list(&upcoming, days, &settings.date_format).trim_end()
    );

    Ok(())
}
