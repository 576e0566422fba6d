//! Vehicle license plate type.

use std::fmt;

/// Error returned when parsing an invalid license plate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid plate {input:?}: expected XX-YYYY or XXX-YYYY, where X is an uppercase letter and Y is a digit"
)]
pub struct InvalidPlate {
    input: String,
}

/// A validated Ecuadorian license plate.
///
/// Plates consist of a two or three letter prefix, a hyphen and four digits
/// (e.g. "PBX-1234", "AB-1234"). The second letter of the prefix identifies
/// the vehicle category, and the final digit drives the weekday restriction.
///
/// # Examples
///
/// ```
/// use pico_placa::domain::Plate;
///
/// let plate = Plate::parse("PBX-1234").unwrap();
/// assert_eq!(plate.prefix(), "PBX");
/// assert_eq!(plate.second_letter(), 'B');
/// assert_eq!(plate.last_digit(), 4);
///
/// assert!(Plate::parse("pbx-1234").is_err());
/// assert!(Plate::parse("PBXA-1234").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Plate(String);

impl Plate {
    /// Parse a plate from a string.
    ///
    /// Accepts exactly `^[A-Z]{2,3}-[0-9]{4}$`. Nothing is trimmed or
    /// upper-cased.
    pub fn parse(s: &str) -> Result<Self, InvalidPlate> {
        let err = || InvalidPlate {
            input: s.to_string(),
        };

        let (prefix, digits) = s.split_once('-').ok_or_else(err)?;

        if !(2..=3).contains(&prefix.len()) || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(err());
        }

        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        Ok(Plate(s.to_string()))
    }

    /// Returns the plate as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the letter prefix (before the hyphen).
    pub fn prefix(&self) -> &str {
        // Validated at construction: the hyphen is at index 2 or 3.
        let end = self.0.find('-').unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Returns the second letter of the prefix.
    pub fn second_letter(&self) -> char {
        self.0.as_bytes()[1] as char
    }

    /// Returns the final digit of the plate (0-9).
    pub fn last_digit(&self) -> u8 {
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }
}

impl fmt::Debug for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plate({})", self.0)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_plates() {
        assert!(Plate::parse("PBX-1234").is_ok());
        assert!(Plate::parse("AB-0000").is_ok());
        assert!(Plate::parse("XYZ-9999").is_ok());
    }

    #[test]
    fn reject_wrong_prefix_length() {
        assert!(Plate::parse("A-1234").is_err());
        assert!(Plate::parse("ABCD-1234").is_err());
        assert!(Plate::parse("-1234").is_err());
    }

    #[test]
    fn reject_wrong_digit_count() {
        assert!(Plate::parse("ABC-123").is_err());
        assert!(Plate::parse("ABC-12345").is_err());
        assert!(Plate::parse("ABC-").is_err());
    }

    #[test]
    fn reject_missing_hyphen() {
        assert!(Plate::parse("ABC1234").is_err());
        assert!(Plate::parse("ABC 1234").is_err());
    }

    #[test]
    fn reject_lowercase_and_whitespace() {
        assert!(Plate::parse("abc-1234").is_err());
        assert!(Plate::parse("ABC-1234 ").is_err());
        assert!(Plate::parse(" ABC-1234").is_err());
    }

    #[test]
    fn reject_digits_in_prefix() {
        assert!(Plate::parse("A1C-1234").is_err());
        assert!(Plate::parse("ABC-12A4").is_err());
    }

    #[test]
    fn accessors() {
        let plate = Plate::parse("XAZ-5678").unwrap();
        assert_eq!(plate.prefix(), "XAZ");
        assert_eq!(plate.second_letter(), 'A');
        assert_eq!(plate.last_digit(), 8);

        let plate = Plate::parse("AB-1230").unwrap();
        assert_eq!(plate.prefix(), "AB");
        assert_eq!(plate.second_letter(), 'B');
        assert_eq!(plate.last_digit(), 0);
    }

    #[test]
    fn error_names_expected_format() {
        let err = Plate::parse("nope").unwrap_err();
        assert!(err.to_string().contains("XX-YYYY or XXX-YYYY"));
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn display_and_debug() {
        let plate = Plate::parse("PBX-1234").unwrap();
        assert_eq!(format!("{}", plate), "PBX-1234");
        assert_eq!(format!("{:?}", plate), "Plate(PBX-1234)");
    }
}
