//! Time-of-day handling.
//!
//! Times are given as 24-hour "HH:MM" strings with no seconds component.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}; expected HH:MM (e.g. 08:31, 14:22, 00:01)")]
pub struct InvalidClockTime {
    input: String,
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A validated 24-hour time of day.
///
/// # Examples
///
/// ```
/// use pico_placa::domain::ClockTime;
///
/// // Valid times
/// assert!(ClockTime::parse("00:00").is_ok());
/// assert!(ClockTime::parse("23:59").is_ok());
///
/// // Invalid formats
/// assert!(ClockTime::parse("1430").is_err());
/// assert!(ClockTime::parse("8:30").is_err());
/// assert!(ClockTime::parse("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a time from hour and minute components.
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    pub fn parse(s: &str) -> Result<Self, InvalidClockTime> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(InvalidClockTime::new(s, "expected 5 characters"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(InvalidClockTime::new(s, "expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidClockTime::new(s, "invalid hour digits"))?;
        if hour > 23 {
            return Err(InvalidClockTime::new(s, "hour must be 00-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidClockTime::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(InvalidClockTime::new(s, "minute must be 00-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| InvalidClockTime::new(s, "invalid time"))
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
