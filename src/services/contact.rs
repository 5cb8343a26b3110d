//! Contact service
//!
//! Add, edit, delete, search and the birthday query for contacts. Every
//! mutation validates first and runs inside a repository transaction, so a
//! rejected change never reaches the file.

use chrono::{Local, NaiveDate};
use log::info;

use super::{provided, selection};
use crate::config::Settings;
use crate::error::AssistantResult;
use crate::models::{parse_birthday, Contact, Record, RecordSelector};
use crate::query::{self, BirthdayWindow, SearchScope, UpcomingBirthday};
use crate::storage::Storage;

/// Raw field values for a new contact
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// `YYYY-MM-DD`, or blank for none
    pub birthday: String,
}

impl ContactInput {
    fn into_contact(self) -> AssistantResult<Contact> {
        let birthday = parse_birthday(&self.birthday)?;
        Ok(Contact::new(self.name.trim())
            .with_address(self.address.trim())
            .with_phone(self.phone.trim())
            .with_email(self.email.trim())
            .with_birthday(birthday))
    }
}

/// Replacement values for an edit; `None` or blank keeps the old value
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
}

impl ContactPatch {
    fn apply(&self, contact: &Contact) -> AssistantResult<Contact> {
        let mut updated = contact.clone();
        if let Some(name) = provided(&self.name) {
            updated.name = name.to_string();
        }
        if let Some(address) = provided(&self.address) {
            updated.address = address.to_string();
        }
        if let Some(phone) = provided(&self.phone) {
            updated.phone = phone.to_string();
        }
        if let Some(email) = provided(&self.email) {
            updated.email = email.to_string();
        }
        if let Some(birthday) = provided(&self.birthday) {
            updated.birthday = parse_birthday(birthday)?;
        }
        Ok(updated)
    }
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate and append a new contact
    pub fn add(&self, input: ContactInput) -> AssistantResult<Contact> {
        let contact = input.into_contact()?;
        contact.validate()?;

        self.storage.contacts.transaction(|contacts| {
            contacts.push(contact.clone());
            Ok(())
        })?;

        self.storage.log_create(&contact)?;
        info!("added contact {}", contact.name);

        Ok(contact)
    }

    /// Get the contact a selector names
    pub fn get(&self, selector: &RecordSelector) -> AssistantResult<Contact> {
        let mut contacts = self.storage.contacts.get_all()?;
        let pos = selection::position(&contacts, selector)?;
        Ok(contacts.swap_remove(pos))
    }

    /// Apply a patch to the first contact the selector names
    pub fn edit(&self, selector: &RecordSelector, patch: &ContactPatch) -> AssistantResult<Contact> {
        let (before, after) = self.storage.contacts.transaction(|contacts| {
            let pos = selection::position(contacts.as_slice(), selector)?;
            let before = contacts[pos].clone();
            let after = patch.apply(&before)?;
            after.validate()?;
            contacts[pos] = after.clone();
            Ok((before, after))
        })?;

        self.storage.log_update(&before, &after)?;
        info!("updated contact {}", after.name);

        Ok(after)
    }

    /// Delete every contact the selector names
    pub fn delete(&self, selector: &RecordSelector) -> AssistantResult<Vec<Contact>> {
        let removed = self
            .storage
            .contacts
            .transaction(|contacts| selection::remove(contacts, selector))?;

        self.storage.log_delete(&removed)?;
        info!("deleted {} contact(s) matching {}", removed.len(), selector);

        Ok(removed)
    }

    /// List all contacts in collection order
    pub fn list(&self) -> AssistantResult<Vec<Contact>> {
        self.storage.contacts.get_all()
    }

    /// Search with the configured scope
    pub fn search(&self, query: &str) -> AssistantResult<Vec<Contact>> {
        self.search_in(query, self.settings.contact_search_scope)
    }

    /// Search with an explicit scope
    pub fn search_in(&self, query: &str, scope: SearchScope) -> AssistantResult<Vec<Contact>> {
        let contacts = self.storage.contacts.get_all()?;
        query::search_contacts(&contacts, query, scope)
    }

    /// Upcoming birthdays from today, `days` defaulting to the configured window
    pub fn upcoming_birthdays(&self, days: Option<u32>) -> AssistantResult<Vec<UpcomingBirthday>> {
        self.upcoming_birthdays_on(days, Local::now().date_naive())
    }

    /// Upcoming birthdays as seen from `today`
    pub fn upcoming_birthdays_on(
        &self,
        days: Option<u32>,
        today: NaiveDate,
    ) -> AssistantResult<Vec<UpcomingBirthday>> {
        let window = BirthdayWindow::new(days.unwrap_or(self.settings.birthday_window_days))
            .with_bound(self.settings.window_bound)
            .with_leap_day_policy(self.settings.leap_day_policy);

        let contacts = self.storage.contacts.get_all()?;
        Ok(query::upcoming_birthdays(&contacts, window, today))
    }
}
