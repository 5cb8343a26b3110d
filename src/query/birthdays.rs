//! Upcoming-birthday window query
//!
//! A contact is "upcoming" when its next birthday falls within `days` days
//! of today. The next birthday is the nearest non-negative occurrence in
//! this year or the next, so a late-December query sees early-January
//! birthdays.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// Whether the last day of the window counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBound {
    /// `0 <= delta <= days`
    #[default]
    Inclusive,
    /// `0 <= delta < days`
    Exclusive,
}

/// Where a Feb 29 birthday falls in a non-leap year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    #[default]
    March1,
    February28,
}

/// Parameters of a window query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub bound: WindowBound,
    pub leap_day: LeapDayPolicy,
}

impl BirthdayWindow {
    /// An inclusive window of `days` days with leap days on Mar 1
    pub fn new(days: u32) -> Self {
        Self {
            days,
            bound: WindowBound::default(),
            leap_day: LeapDayPolicy::default(),
        }
    }

    pub fn with_bound(mut self, bound: WindowBound) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_leap_day_policy(mut self, leap_day: LeapDayPolicy) -> Self {
        self.leap_day = leap_day;
        self
    }

    /// Check whether a non-negative day offset lies inside the window
    pub fn contains(&self, days_until: i64) -> bool {
        let days = i64::from(self.days);
        match self.bound {
            WindowBound::Inclusive => (0..=days).contains(&days_until),
            WindowBound::Exclusive => (0..days).contains(&days_until),
        }
    }
}

/// A contact whose birthday falls inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    /// Date of the next occurrence
    pub date: NaiveDate,
    /// Days from today until `date`
    pub days_until: i64,
    /// Age reached on `date`, if the birth year is not after it
    pub turning: Option<u32>,
}

/// The birthday's occurrence in `year`
///
/// Only Feb 29 can be missing from a year; it resolves per `policy`.
pub fn birthday_in_year(birthday: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if (birthday.month(), birthday.day()) != (2, 29) {
            return None;
        }
        match policy {
            LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
        }
    })
}

/// The next occurrence on or after `today`, with its day offset
pub fn next_birthday(
    birthday: NaiveDate,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<(NaiveDate, i64)> {
    [today.year(), today.year() + 1]
        .into_iter()
        .filter_map(|year| birthday_in_year(birthday, year, policy))
        .map(|date| (date, (date - today).num_days()))
        .filter(|(_, delta)| *delta >= 0)
        .min_by_key(|(_, delta)| *delta)
}

/// Contacts with a birthday inside `window`, nearest first
///
/// Contacts without a birthday are skipped. Ties keep collection order.
pub fn upcoming_birthdays(
    contacts: &[Contact],
    window: BirthdayWindow,
    today: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = contacts
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday?;
            let (date, days_until) = next_birthday(birthday, today, window.leap_day)?;
            if !window.contains(days_until) {
                return None;
            }
            Some(UpcomingBirthday {
                turning: u32::try_from(date.year() - birthday.year()).ok(),
                contact: contact.clone(),
                date,
                days_until,
            })
        })
        .collect();

    upcoming.sort_by_key(|u| u.days_until);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn born(name: &str, birthday: NaiveDate) -> Contact {
        Contact::new(name).with_birthday(Some(birthday))
    }

    fn names(found: &[UpcomingBirthday]) -> Vec<&str> {
        found.iter().map(|u| u.contact.name.as_str()).collect()
    }

    #[test]
    fn test_inclusive_upper_bound() {
        let today = date(2026, 10, 15);
        let at_edge = today + Duration::days(7);
        let past_edge = today + Duration::days(8);
        let contacts = vec![
            born("Edge", date(1990, at_edge.month(), at_edge.day())),
            born("Past", date(1990, past_edge.month(), past_edge.day())),
        ];

        let found = upcoming_birthdays(&contacts, BirthdayWindow::new(7), today);
        assert_eq!(names(&found), vec!["Edge"]);
        assert_eq!(found[0].days_until, 7);
    }

    #[test]
    fn test_exclusive_upper_bound() {
        let today = date(2026, 10, 15);
        let contacts = vec![born("Edge", date(1990, 10, 22)), born("Near", date(1990, 10, 21))];

        let window = BirthdayWindow::new(7).with_bound(WindowBound::Exclusive);
        let found = upcoming_birthdays(&contacts, window, today);
        assert_eq!(names(&found), vec!["Near"]);
    }

    #[test]
    fn test_birthday_today_is_included_and_past_is_not() {
        let today = date(2026, 5, 1);
        let contacts = vec![
            born("Today", date(1990, 5, 1)),
            born("Yesterday", date(1990, 4, 30)),
        ];

        let found = upcoming_birthdays(&contacts, BirthdayWindow::new(0), today);
        assert_eq!(names(&found), vec!["Today"]);
        assert_eq!(found[0].turning, Some(36));
    }

    #[test]
    fn test_new_year_wraparound() {
        let today = date(2026, 12, 30);
        let contacts = vec![born("January", date(1985, 1, 2))];

        let found = upcoming_birthdays(&contacts, BirthdayWindow::new(5), today);
        assert_eq!(names(&found), vec!["January"]);
        assert_eq!(found[0].date, date(2027, 1, 2));
        assert_eq!(found[0].days_until, 3);
        assert_eq!(found[0].turning, Some(42));
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let leapling = born("Leap", date(2000, 2, 29));
        let today = date(2027, 2, 20);

        let found = upcoming_birthdays(&[leapling.clone()], BirthdayWindow::new(10), today);
        assert_eq!(found[0].date, date(2027, 3, 1));
        assert_eq!(found[0].days_until, 9);

        let window = BirthdayWindow::new(10).with_leap_day_policy(LeapDayPolicy::February28);
        let found = upcoming_birthdays(&[leapling], window, today);
        assert_eq!(found[0].date, date(2027, 2, 28));
        assert_eq!(found[0].days_until, 8);
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        assert_eq!(
            birthday_in_year(date(2000, 2, 29), 2028, LeapDayPolicy::March1),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_sorted_nearest_first_and_skips_unknown() {
        let today = date(2026, 10, 15);
        let contacts = vec![
            born("Later", date(1990, 10, 20)),
            Contact::new("Unknown"),
            born("Sooner", date(1990, 10, 16)),
            born("AlsoLater", date(1991, 10, 20)),
        ];

        let found = upcoming_birthdays(&contacts, BirthdayWindow::new(30), today);
        assert_eq!(names(&found), vec!["Sooner", "Later", "AlsoLater"]);
    }

    #[test]
    fn test_next_birthday_picks_smallest_offset() {
        let today = date(2026, 3, 10);
        let (next, delta) = next_birthday(date(1990, 3, 9), today, LeapDayPolicy::March1).unwrap();
        assert_eq!(next, date(2027, 3, 9));
        assert_eq!(delta, 364);
    }
}
