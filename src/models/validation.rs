//! Field validators
//!
//! Coarse format checks for email addresses, phone numbers and birthdays.
//! They only accept or reject; callers turn a rejection into a
//! [`ValidationError`].

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Storage and input format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("valid phone regex"));

/// Check an email address against `local@domain.tld`
///
/// No TLD-length or character-class checks beyond "no `@`, no whitespace".
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number: optional leading `+`, then 9 to 15 digits
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Parse a birthday in `YYYY-MM-DD` form
///
/// Blank input means "no birthday" and yields `Ok(None)`.
pub fn parse_birthday(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))
}

/// Validation errors for contacts and notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyText,
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::EmptyText => write!(f, "Note text cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}' (expected optional '+' and 9-15 digits)",
                phone
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address '{}'", email),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday '{}' (expected YYYY-MM-DD)", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
