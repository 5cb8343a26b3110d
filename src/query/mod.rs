//! Query engine
//!
//! Read-only queries over the in-memory collections: substring search and
//! the upcoming-birthday window.

pub mod birthdays;
pub mod search;

pub use birthdays::{
    birthday_in_year, next_birthday, upcoming_birthdays, BirthdayWindow, LeapDayPolicy,
    UpcomingBirthday, WindowBound,
};
pub use search::{
    normalize_query, search_contacts, search_notes, search_notes_by_tag, SearchScope,
};
