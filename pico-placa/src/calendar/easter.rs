//! Easter Sunday computation.

use chrono::NaiveDate;

use super::error::{CalendarError, check_year};

/// Returns the date of (Western) Easter Sunday for a Gregorian year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher).
///
/// # Examples
///
/// ```
/// use pico_placa::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2024).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
/// );
/// assert!(easter_sunday(1500).is_err());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(CalendarError::UnsupportedYear { year })
}
