//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::domain::Query;
use crate::restriction::{Reason, Verdict};

/// Request to check a vehicle.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Plate, e.g. "PBX-1234"
    pub plate: String,

    /// Date in YYYY-MM-DD format
    pub date: String,

    /// Time in HH:MM format
    pub time: String,

    /// Ask the remote provider instead of the local calendar
    #[serde(default)]
    pub online: bool,
}

/// Result of a check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub plate: String,
    pub date: String,
    pub time: String,

    /// Three-letter English weekday, e.g. "Mon"
    pub weekday: String,

    pub allowed: bool,
    pub reason: Reason,

    /// Holiday name, when the date is a holiday
    pub holiday: Option<String>,

    /// The verdict as a sentence
    pub message: String,
}

impl CheckResponse {
    /// Create from a query and its verdict.
    pub fn from_verdict(query: &Query, verdict: &Verdict) -> Self {
        Self {
            plate: query.plate.to_string(),
            date: query.date.to_string(),
            time: query.time.to_string(),
            weekday: verdict.weekday.to_string(),
            allowed: verdict.is_allowed(),
            reason: verdict.reason,
            holiday: verdict.holiday.clone(),
            message: verdict.sentence(query),
        }
    }
}

/// Query parameters for the holiday listing.
#[derive(Debug, Deserialize)]
pub struct HolidaysRequest {
    /// Province code, or "none" for the national calendar (defaults to EC-P)
    pub province: Option<String>,
}

/// A single holiday.
#[derive(Debug, Serialize)]
pub struct HolidayEntry {
    /// Date in YYYY-MM-DD format
    pub date: String,
    pub name: String,
}

/// A year's holidays in date order.
#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    pub year: i32,
    pub province: Option<String>,
    pub holidays: Vec<HolidayEntry>,
}

impl HolidaysResponse {
    /// Create from a computed calendar.
    pub fn from_calendar(calendar: &HolidayCalendar) -> Self {
        Self {
            year: calendar.year(),
            province: calendar.province().map(|p| p.code().to_string()),
            holidays: calendar
                .iter()
                .map(|(date, name)| HolidayEntry {
                    date: date.format("%Y-%m-%d").to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
