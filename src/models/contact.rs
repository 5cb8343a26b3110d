//! Contact model
//!
//! A person with address, phone, email and an optional birthday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::Record;
use super::validation::{validate_email, validate_phone, ValidationError};
use crate::audit::EntityType;

/// A contact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, also the natural key
    pub name: String,

    /// Free-form postal address
    #[serde(default)]
    pub address: String,

    /// Phone number (optional '+', 9-15 digits)
    #[serde(default)]
    pub phone: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Birthday, stored as `YYYY-MM-DD` (empty when unknown)
    #[serde(default, with = "birthday_serde")]
    pub birthday: Option<NaiveDate>,
}

impl Contact {
    /// Create a contact with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            birthday: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Birthday formatted for display, or an empty string
    pub fn birthday_display(&self) -> String {
        self.birthday
            .map(|d| d.format(super::validation::BIRTHDAY_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl Record for Contact {
    const ENTITY_TYPE: EntityType = EntityType::Contact;

    fn key(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !validate_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone(self.phone.clone()));
        }
        if !validate_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// `Option<NaiveDate>` as a `YYYY-MM-DD` string, with `""`/`null` for none
mod birthday_serde {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::models::validation::BIRTHDAY_FORMAT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(BIRTHDAY_FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid birthday '{}': {}", s, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Contact {
        Contact::new("Ann")
            .with_phone("+12025550123")
            .with_email("a@b.com")
            .with_birthday(NaiveDate::from_ymd_opt(1990, 5, 1))
    }

    #[test]
    fn test_validation() {
        assert!(ann().validate().is_ok());

        let mut contact = ann();
        contact.name = "  ".into();
        assert_eq!(contact.validate(), Err(ValidationError::EmptyName));

        let contact = ann().with_phone("12ab");
        assert_eq!(
            contact.validate(),
            Err(ValidationError::InvalidPhone("12ab".into()))
        );

        let contact = ann().with_email("nope");
        assert!(matches!(
            contact.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_key_matching() {
        let contact = ann();
        assert!(contact.matches_key("ann"));
        assert!(contact.matches_key(" ANN "));
        assert!(!contact.matches_key("an"));
    }

    #[test]
    fn test_serialization_format() {
        let json = serde_json::to_value(ann()).unwrap();
        assert_eq!(json["birthday"], "1990-05-01");
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["address"], "");

        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, ann());
    }

    #[test]
    fn test_missing_or_empty_birthday() {
        let empty: Contact =
            serde_json::from_str(r#"{"name":"A","phone":"","email":"","address":"","birthday":""}"#)
                .unwrap();
        assert_eq!(empty.birthday, None);

        let missing: Contact = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(missing.birthday, None);
        assert_eq!(missing.phone, "");

        let null: Contact = serde_json::from_str(r#"{"name":"A","birthday":null}"#).unwrap();
        assert_eq!(null.birthday, None);
    }

    #[test]
    fn test_bad_stored_birthday_is_error() {
        let result: Result<Contact, _> =
            serde_json::from_str(r#"{"name":"A","birthday":"someday"}"#);
        assert!(result.is_err());
    }
}
