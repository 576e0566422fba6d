//! Calendar error types.

/// Years for which holiday computation is defined.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1583..=9999;

/// Errors from holiday calendar generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year falls outside the Gregorian range the Easter algorithm covers
    #[error("unsupported year {year}: holidays are computed for 1583-9999")]
    UnsupportedYear { year: i32 },
}

/// Reject years outside [`SUPPORTED_YEARS`].
pub(crate) fn check_year(year: i32) -> Result<(), CalendarError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear { year })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds() {
        assert!(check_year(1583).is_ok());
        assert!(check_year(9999).is_ok());
        assert_eq!(
            check_year(1582),
            Err(CalendarError::UnsupportedYear { year: 1582 })
        );
        assert!(check_year(10_000).is_err());
        assert!(check_year(0).is_err());
    }

    #[test]
    fn error_display() {
        let err = CalendarError::UnsupportedYear { year: 1200 };
        assert_eq!(
            err.to_string(),
            "unsupported year 1200: holidays are computed for 1583-9999"
        );
    }
}
