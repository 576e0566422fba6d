//! Traffic date handling.
//!
//! Dates arrive as ISO 8601 calendar strings ("YYYY-MM-DD"). Only that exact
//! shape is accepted; the weekday is derived from the parsed date.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Error returned when parsing an invalid traffic date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {input:?}: {reason}; expected YYYY-MM-DD (e.g. 2021-04-02)")]
pub struct InvalidDate {
    input: String,
    reason: &'static str,
}

impl InvalidDate {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// The calendar day on which a vehicle intends to circulate.
///
/// # Examples
///
/// ```
/// use pico_placa::domain::TrafficDate;
/// use chrono::Weekday;
///
/// let date = TrafficDate::parse("2024-03-18").unwrap();
/// assert_eq!(date.weekday(), Weekday::Mon);
/// assert_eq!(date.to_string(), "2024-03-18");
///
/// assert!(TrafficDate::parse("2024-02-30").is_err());
/// assert!(TrafficDate::parse("2024-3-18").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrafficDate(NaiveDate);

impl TrafficDate {
    /// Wrap an already-valid date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a date from "YYYY-MM-DD" format.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        // Must be exactly 10 characters: YYYY-MM-DD
        if s.len() != 10 {
            return Err(InvalidDate::new(s, "expected 10 characters"));
        }

        let bytes = s.as_bytes();

        if bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(InvalidDate::new(s, "expected hyphens at positions 4 and 7"));
        }

        let year =
            parse_digits(&bytes[0..4]).ok_or_else(|| InvalidDate::new(s, "invalid year digits"))?;
        let month =
            parse_digits(&bytes[5..7]).ok_or_else(|| InvalidDate::new(s, "invalid month digits"))?;
        let day =
            parse_digits(&bytes[8..10]).ok_or_else(|| InvalidDate::new(s, "invalid day digits"))?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or_else(|| InvalidDate::new(s, "no such calendar day"))?;

        Ok(Self(date))
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for TrafficDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Debug for TrafficDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrafficDate({})", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Display for TrafficDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parse a run of ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let d = (b as char).to_digit(10)?;
        Some(acc * 10 + d)
    })
}
