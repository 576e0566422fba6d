//! Holiday status of a single date.

use std::fmt;

/// Whether a date is a public holiday, as reported by a holiday source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolidayStatus {
    /// The date is a holiday with the given name.
    Holiday { name: String },
    /// The date is an ordinary day.
    NotHoliday,
}

impl HolidayStatus {
    /// A holiday with the given name.
    pub fn holiday(name: impl Into<String>) -> Self {
        HolidayStatus::Holiday { name: name.into() }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, HolidayStatus::Holiday { .. })
    }

    /// Name of the holiday, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            HolidayStatus::Holiday { name } => Some(name),
            HolidayStatus::NotHoliday => None,
        }
    }
}

impl fmt::Display for HolidayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayStatus::Holiday { name } => write!(f, "holiday ({name})"),
            HolidayStatus::NotHoliday => f.write_str("not a holiday"),
        }
    }
}
