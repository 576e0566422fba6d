//! Province (ISO 3166-2:EC subdivision) codes.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unsupported province code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported province {input:?}: expected one of {supported}")]
pub struct InvalidProvince {
    input: String,
    supported: &'static str,
}

/// Selection meaning "no province".
const NO_PROVINCE: &str = "none";

/// A province with its own holidays on top of the national calendar.
///
/// Only Pichincha is populated today. New provinces are added as variants
/// here and given their entries in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Province {
    /// Pichincha (Quito), `EC-P`.
    Pichincha,
}

impl Province {
    /// All supported provinces.
    pub const ALL: [Province; 1] = [Province::Pichincha];

    /// Parse an ISO 3166-2 code such as `EC-P`.
    pub fn parse(code: &str) -> Result<Self, InvalidProvince> {
        match code {
            "EC-P" => Ok(Province::Pichincha),
            _ => Err(InvalidProvince {
                input: code.to_string(),
                supported: "EC-P",
            }),
        }
    }

    /// Parse a province selection: a code, or `none` for the national
    /// calendar only.
    ///
    /// ```
    /// use pico_placa::domain::Province;
    ///
    /// assert_eq!(Province::parse_selection("EC-P").unwrap(), Some(Province::Pichincha));
    /// assert_eq!(Province::parse_selection("none").unwrap(), None);
    /// assert!(Province::parse_selection("EC-G").is_err());
    /// ```
    pub fn parse_selection(s: &str) -> Result<Option<Self>, InvalidProvince> {
        if s.eq_ignore_ascii_case(NO_PROVINCE) {
            return Ok(None);
        }
        Province::parse(s).map(Some)
    }

    /// Returns the ISO 3166-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Province::Pichincha => "EC-P",
        }
    }
}

impl FromStr for Province {
    type Err = InvalidProvince;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::parse(s)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
