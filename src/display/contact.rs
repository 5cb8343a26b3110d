//! Contact display formatting
//!
//! Formats contacts for terminal output in table and detail views, plus the
//! upcoming-birthday list.

use crate::models::Contact;
use crate::query::UpcomingBirthday;

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Format a list of contacts as a numbered table
///
/// The row numbers are the `#N` selectors accepted by edit and delete.
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let num_width = contacts.len().to_string().len().max(1);
    let name_width = column_width(contacts.iter().map(|c| c.name.as_str()), "Name");
    let phone_width = column_width(contacts.iter().map(|c| c.phone.as_str()), "Phone");
    let email_width = column_width(contacts.iter().map(|c| c.email.as_str()), "Email");

    let mut output = String::new();
    output.push_str(&format!(
        "{:>num_width$}  {:<name_width$}  {:<phone_width$}  {:<email_width$}  {:<10}  {}\n",
        "#",
        "Name",
        "Phone",
        "Email",
        "Birthday",
        "Address",
    ));

    output.push_str(&format!(
        "{:->num_width$}  {:-<name_width$}  {:-<phone_width$}  {:-<email_width$}  {:-<10}  {:-<7}\n",
        "", "", "", "", "", "",
    ));

    for (i, contact) in contacts.iter().enumerate() {
        output.push_str(&format!(
            "{:>num_width$}  {:<name_width$}  {:<phone_width$}  {:<email_width$}  {:<10}  {}\n",
            i + 1,
            contact.name,
            contact.phone,
            contact.email,
            contact.birthday_display(),
            contact.address,
        ));
    }

    output
}

/// Format a single contact's details
pub fn format_contact_details(contact: &Contact) -> String {
    let mut output = String::new();

    output.push_str(&format!("Contact: {}\n", contact.name));
    output.push_str(&format!("  Address:  {}\n", contact.address));
    output.push_str(&format!("  Phone:    {}\n", contact.phone));
    output.push_str(&format!("  Email:    {}\n", contact.email));
    match contact.birthday {
        Some(_) => output.push_str(&format!("  Birthday: {}\n", contact.birthday_display())),
        None => output.push_str("  Birthday: (unknown)\n"),
    }

    output
}

/// Format the upcoming-birthday list
pub fn format_birthday_list(upcoming: &[UpcomingBirthday], days: u32, date_format: &str) -> String {
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} day(s).", days);
    }

    let name_width = column_width(upcoming.iter().map(|u| u.contact.name.as_str()), "");

    let mut output = format!("Birthdays in the next {} day(s):\n", days);
    for entry in upcoming {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        let turning = entry
            .turning
            .map(|age| format!(" (turns {})", age))
            .unwrap_or_default();

        output.push_str(&format!(
            "  {:<name_width$}  {}  {}{}\n",
            entry.contact.name,
            entry.date.format(date_format),
            when,
            turning,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ann() -> Contact {
        Contact::new("Ann")
            .with_address("1 Main St")
            .with_phone("+12025550123")
            .with_email("a@b.com")
            .with_birthday(NaiveDate::from_ymd_opt(1990, 5, 1))
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_contact_list(&[]), "No contacts found.");
    }

    #[test]
    fn test_list_has_numbered_rows() {
        let output = format_contact_list(&[ann(), Contact::new("Bob")]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Name"));
        assert!(lines[2].starts_with("1  Ann"));
        assert!(lines[2].contains("1990-05-01"));
        assert!(lines[3].starts_with("2  Bob"));
    }

    #[test]
    fn test_details() {
        let output = format_contact_details(&ann());
        assert!(output.starts_with("Contact: Ann\n"));
        assert!(output.contains("Birthday: 1990-05-01"));

        let output = format_contact_details(&Contact::new("Bob"));
        assert!(output.contains("Birthday: (unknown)"));
    }

    #[test]
    fn test_birthday_list() {
        let upcoming = vec![UpcomingBirthday {
            contact: ann(),
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            days_until: 1,
            turning: Some(36),
        }];

        let output = format_birthday_list(&upcoming, 7, "%d.%m.%Y");
        assert!(output.contains("Ann  01.05.2026  tomorrow (turns 36)"));
        assert_eq!(
            format_birthday_list(&[], 7, "%Y-%m-%d"),
            "No birthdays in the next 7 day(s)."
        );
    }
}
