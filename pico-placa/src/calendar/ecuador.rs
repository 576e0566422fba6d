//! Ecuadorian public holiday calendar.
//!
//! A year's holidays are a pure function of the year and, optionally, the
//! province whose local holidays are added on top of the national ones.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::domain::Province;

use super::easter::easter_sunday;
use super::error::{CalendarError, check_year};
use super::shift::{all_souls_and_cuenca, shift_observance};

pub const NEW_YEAR: &str = "New Year's Day";
pub const CHRISTMAS: &str = "Christmas Day";
pub const GOOD_FRIDAY: &str = "Good Friday";
pub const EASTER_SUNDAY: &str = "Easter Sunday";
pub const CARNIVAL_MONDAY: &str = "Carnival Monday";
pub const CARNIVAL_TUESDAY: &str = "Carnival Tuesday";
pub const LABOUR_DAY: &str = "Labour Day";
pub const BATTLE_OF_PICHINCHA: &str = "Battle of Pichincha";
pub const FIRST_CRY_OF_INDEPENDENCE: &str = "First Cry of Independence";
pub const INDEPENDENCE_OF_GUAYAQUIL: &str = "Independence of Guayaquil";
pub const ALL_SOULS_DAY: &str = "All Souls' Day";
pub const INDEPENDENCE_OF_CUENCA: &str = "Independence of Cuenca";
pub const FOUNDATION_OF_QUITO: &str = "Foundation of Quito";

/// Days between Carnival Monday and Easter Sunday.
const CARNIVAL_MONDAY_OFFSET: i64 = 48;

/// A civic holiday subject to [`shift_observance`]: (month, day, name).
type ShiftedHoliday = (u32, u32, &'static str);

/// National holidays observed under the Friday/Monday shift rule.
const NATIONAL_SHIFTED: [ShiftedHoliday; 4] = [
    (5, 1, LABOUR_DAY),
    (5, 24, BATTLE_OF_PICHINCHA),
    (8, 10, FIRST_CRY_OF_INDEPENDENCE),
    (10, 9, INDEPENDENCE_OF_GUAYAQUIL),
];

/// Provincial holidays observed under the same rule.
fn provincial_shifted(province: Province) -> &'static [ShiftedHoliday] {
    match province {
        Province::Pichincha => &[(12, 6, FOUNDATION_OF_QUITO)],
    }
}

/// The holidays observed in one year.
///
/// Entries are keyed by observed date. When two rules land on the same
/// date the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    year: i32,
    province: Option<Province>,
    holidays: BTreeMap<NaiveDate, &'static str>,
}

impl HolidayCalendar {
    fn new(year: i32, province: Option<Province>) -> Self {
        Self {
            year,
            province,
            holidays: BTreeMap::new(),
        }
    }

    fn insert(&mut self, date: NaiveDate, name: &'static str) {
        self.holidays.insert(date, name);
    }

    /// The year this calendar covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The province whose local holidays are included, if any.
    pub fn province(&self) -> Option<Province> {
        self.province
    }

    /// Name of the holiday observed on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&'static str> {
        self.holidays.get(&date).copied()
    }

    /// Whether `date` is an observed holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Number of distinct observed holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over (date, name) in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &'static str)> + '_ {
        self.holidays.iter().map(|(d, n)| (*d, *n))
    }

    /// Dates on which the named holiday is observed.
    pub fn dates_of(&self, name: &str) -> Vec<NaiveDate> {
        self.iter()
            .filter(|(_, n)| *n == name)
            .map(|(d, _)| d)
            .collect()
    }
}

/// Compute the holidays observed in `year`.
///
/// National holidays are always included; `province` adds that province's
/// local holidays.
///
/// # Examples
///
/// ```
/// use pico_placa::calendar::holidays_for_year;
/// use pico_placa::domain::Province;
/// use chrono::NaiveDate;
///
/// let cal = holidays_for_year(2024, Some(Province::Pichincha)).unwrap();
/// let good_friday = NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
/// assert_eq!(cal.get(good_friday), Some("Good Friday"));
///
/// let quito = NaiveDate::from_ymd_opt(2024, 12, 6).unwrap();
/// assert!(cal.contains(quito));
/// assert!(!holidays_for_year(2024, None).unwrap().contains(quito));
/// ```
pub fn holidays_for_year(
    year: i32,
    province: Option<Province>,
) -> Result<HolidayCalendar, CalendarError> {
    check_year(year)?;
    let ymd = |m: u32, d: u32| {
        NaiveDate::from_ymd_opt(year, m, d).ok_or(CalendarError::UnsupportedYear { year })
    };

    let mut cal = HolidayCalendar::new(year, province);

    cal.insert(ymd(1, 1)?, NEW_YEAR);
    cal.insert(ymd(12, 25)?, CHRISTMAS);

    let easter = easter_sunday(year)?;
    cal.insert(easter - Duration::days(2), GOOD_FRIDAY);
    cal.insert(easter, EASTER_SUNDAY);
    cal.insert(easter - Duration::days(CARNIVAL_MONDAY_OFFSET), CARNIVAL_MONDAY);
    cal.insert(
        easter - Duration::days(CARNIVAL_MONDAY_OFFSET - 1),
        CARNIVAL_TUESDAY,
    );

    for (month, day, name) in NATIONAL_SHIFTED {
        cal.insert(shift_observance(ymd(month, day)?), name);
    }

    let november = all_souls_and_cuenca(year).ok_or(CalendarError::UnsupportedYear { year })?;
    cal.insert(november.all_souls, ALL_SOULS_DAY);
    cal.insert(november.cuenca, INDEPENDENCE_OF_CUENCA);

    if let Some(province) = province {
        for &(month, day, name) in provincial_shifted(province) {
            cal.insert(shift_observance(ymd(month, day)?), name);
        }
    }

    Ok(cal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_calendar_2024_pichincha() {
        let cal = holidays_for_year(2024, Some(Province::Pichincha)).unwrap();
        let expected = [
            (date(2024, 1, 1), NEW_YEAR),
            (date(2024, 2, 12), CARNIVAL_MONDAY),
            (date(2024, 2, 13), CARNIVAL_TUESDAY),
            (date(2024, 3, 29), GOOD_FRIDAY),
            (date(2024, 3, 31), EASTER_SUNDAY),
            // May 1 Wednesday -> Friday May 3
            (date(2024, 5, 3), LABOUR_DAY),
            // May 24 Friday stays
            (date(2024, 5, 24), BATTLE_OF_PICHINCHA),
            // Aug 10 Saturday -> Friday Aug 9
            (date(2024, 8, 9), FIRST_CRY_OF_INDEPENDENCE),
            // Oct 9 Wednesday -> Friday Oct 11
            (date(2024, 10, 11), INDEPENDENCE_OF_GUAYAQUIL),
            (date(2024, 11, 1), ALL_SOULS_DAY),
            (date(2024, 11, 4), INDEPENDENCE_OF_CUENCA),
            // Dec 6 Friday stays
            (date(2024, 12, 6), FOUNDATION_OF_QUITO),
            (date(2024, 12, 25), CHRISTMAS),
        ];

        let actual: Vec<_> = cal.iter().collect();
        assert_eq!(actual, expected);
        assert_eq!(cal.year(), 2024);
        assert_eq!(cal.province(), Some(Province::Pichincha));
    }

    #[test]
    fn national_calendar_omits_quito() {
        let cal = holidays_for_year(2024, None).unwrap();
        assert_eq!(cal.len(), 12);
        assert!(cal.dates_of(FOUNDATION_OF_QUITO).is_empty());
        assert_eq!(cal.province(), None);
    }

    #[test]
    fn shifted_holidays_2016() {
        let cal = holidays_for_year(2016, Some(Province::Pichincha)).unwrap();
        // May 1 Sunday -> Monday
        assert_eq!(cal.dates_of(LABOUR_DAY), vec![date(2016, 5, 2)]);
        // May 24 Tuesday -> Monday
        assert_eq!(cal.dates_of(BATTLE_OF_PICHINCHA), vec![date(2016, 5, 23)]);
        // Aug 10 Wednesday -> Friday
        assert_eq!(
            cal.dates_of(FIRST_CRY_OF_INDEPENDENCE),
            vec![date(2016, 8, 12)]
        );
        // Oct 9 Sunday -> Monday
        assert_eq!(
            cal.dates_of(INDEPENDENCE_OF_GUAYAQUIL),
            vec![date(2016, 10, 10)]
        );
        // Dec 6 Tuesday -> Monday
        assert_eq!(cal.dates_of(FOUNDATION_OF_QUITO), vec![date(2016, 12, 5)]);
    }

    #[test]
    fn shifted_holidays_2025() {
        let cal = holidays_for_year(2025, Some(Province::Pichincha)).unwrap();
        // Thursday -> Friday
        assert_eq!(cal.dates_of(LABOUR_DAY), vec![date(2025, 5, 2)]);
        // Saturday -> Friday
        assert_eq!(cal.dates_of(BATTLE_OF_PICHINCHA), vec![date(2025, 5, 23)]);
        // Sunday -> Monday
        assert_eq!(
            cal.dates_of(FIRST_CRY_OF_INDEPENDENCE),
            vec![date(2025, 8, 11)]
        );
        // Thursday -> Friday
        assert_eq!(
            cal.dates_of(INDEPENDENCE_OF_GUAYAQUIL),
            vec![date(2025, 10, 10)]
        );
        // Saturday -> Friday
        assert_eq!(cal.dates_of(FOUNDATION_OF_QUITO), vec![date(2025, 12, 5)]);
    }

    #[test]
    fn nominal_dates_up_to_2015() {
        // 2015: May 24 Sunday, Dec 6 Sunday; 2014: May 24 Saturday
        let cal = holidays_for_year(2015, Some(Province::Pichincha)).unwrap();
        assert_eq!(cal.dates_of(BATTLE_OF_PICHINCHA), vec![date(2015, 5, 24)]);
        assert_eq!(cal.dates_of(FOUNDATION_OF_QUITO), vec![date(2015, 12, 6)]);

        let cal = holidays_for_year(2014, Some(Province::Pichincha)).unwrap();
        assert_eq!(cal.dates_of(BATTLE_OF_PICHINCHA), vec![date(2014, 5, 24)]);
        assert_eq!(cal.dates_of(LABOUR_DAY), vec![date(2014, 5, 1)]);
    }

    #[test]
    fn carnival_precedes_easter() {
        let cal = holidays_for_year(2025, None).unwrap();
        // Easter 2025-04-20
        assert_eq!(cal.dates_of(CARNIVAL_MONDAY), vec![date(2025, 3, 3)]);
        assert_eq!(cal.dates_of(CARNIVAL_TUESDAY), vec![date(2025, 3, 4)]);
        assert_eq!(cal.dates_of(CARNIVAL_MONDAY)[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn november_pair_in_calendar() {
        let cal = holidays_for_year(2022, None).unwrap();
        assert_eq!(cal.get(date(2022, 11, 3)), Some(INDEPENDENCE_OF_CUENCA));
        assert_eq!(cal.get(date(2022, 11, 4)), Some(ALL_SOULS_DAY));
        assert!(!cal.contains(date(2022, 11, 2)));
    }

    #[test]
    fn unsupported_year_rejected() {
        assert_eq!(
            holidays_for_year(1500, None),
            Err(CalendarError::UnsupportedYear { year: 1500 })
        );
        assert!(holidays_for_year(10_000, None).is_err());
    }

    #[test]
    fn ordinary_day_is_not_a_holiday() {
        let cal = holidays_for_year(2024, Some(Province::Pichincha)).unwrap();
        assert!(!cal.contains(date(2024, 3, 18)));
        assert_eq!(cal.get(date(2024, 3, 18)), None);
    }
}
