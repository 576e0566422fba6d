//! Statutory observance shifting.
//!
//! Since the 2016 reform of the public service law (LOSEP), several civic
//! holidays are observed on a nearby Friday or Monday instead of their
//! nominal date, so that rest days join a weekend. All Souls' Day and the
//! Independence of Cuenca fall on consecutive days and follow their own
//! fixed table.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The last year in which shiftable holidays stayed on their nominal dates.
pub const LAST_UNSHIFTED_YEAR: i32 = 2015;

/// Returns the day a shiftable holiday is observed on.
///
/// | Nominal weekday | Observed |
/// |---|---|
/// | Saturday, Tuesday | one day earlier |
/// | Sunday | one day later |
/// | Wednesday, Thursday | Friday of the same week |
/// | Monday, Friday | unchanged |
///
/// Years up to and including [`LAST_UNSHIFTED_YEAR`] are never shifted.
///
/// # Examples
///
/// ```
/// use pico_placa::calendar::shift_observance;
/// use chrono::NaiveDate;
///
/// // Labour Day 2025 fell on a Thursday; it was observed on Friday.
/// let nominal = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert_eq!(shift_observance(nominal), NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
/// ```
pub fn shift_observance(nominal: NaiveDate) -> NaiveDate {
    if nominal.year() <= LAST_UNSHIFTED_YEAR {
        return nominal;
    }

    let offset = match nominal.weekday() {
        Weekday::Sat | Weekday::Tue => -1,
        Weekday::Sun => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Mon | Weekday::Fri => 0,
    };

    nominal + Duration::days(offset)
}

/// Which row of the All Souls' Day / Independence of Cuenca table applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NovemberRule {
    /// Nov 2 on Saturday and Nov 3 on Sunday: bridge both sides of the weekend
    WeekendBridge,
    /// Nov 3 on Wednesday: Cuenca moves back to Monday Nov 1
    CuencaOnWednesday,
    /// Nov 3 on Thursday: All Souls' moves forward to Friday Nov 4
    CuencaOnThursday,
    /// Nov 3 on Saturday: Cuenca moves back to Thursday Nov 1
    CuencaOnSaturday,
    /// Nov 3 on Monday: All Souls' moves forward to Tuesday Nov 4
    CuencaOnMonday,
    /// Any other layout: both on their nominal dates
    Nominal,
}

/// Observed dates of the November pair for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NovemberPair {
    pub rule: NovemberRule,
    /// Observed date of All Souls' Day (nominally Nov 2)
    pub all_souls: NaiveDate,
    /// Observed date of the Independence of Cuenca (nominally Nov 3)
    pub cuenca: NaiveDate,
}

/// Resolve the observed dates of All Souls' Day and Independence of Cuenca.
///
/// This is a fixed lookup, not a formula; the first matching row wins.
/// There is no row for Nov 3 on a Tuesday or Friday, so those years keep
/// the nominal dates. The table applies in every year, unlike
/// [`shift_observance`].
///
/// Returns `None` only when the year has no November in range for `chrono`.
pub fn all_souls_and_cuenca(year: i32) -> Option<NovemberPair> {
    let nov2 = NaiveDate::from_ymd_opt(year, 11, 2)?;
    let nov3 = NaiveDate::from_ymd_opt(year, 11, 3)?;

    let (rule, all_souls, cuenca) = match (nov2.weekday(), nov3.weekday()) {
        (Weekday::Sat, Weekday::Sun) => (
            NovemberRule::WeekendBridge,
            nov2 - Duration::days(1),
            nov3 + Duration::days(1),
        ),
        (_, Weekday::Wed) => (NovemberRule::CuencaOnWednesday, nov2, nov3 - Duration::days(2)),
        (_, Weekday::Thu) => (NovemberRule::CuencaOnThursday, nov2 + Duration::days(2), nov3),
        (_, Weekday::Sat) => (NovemberRule::CuencaOnSaturday, nov2, nov3 - Duration::days(2)),
        (_, Weekday::Mon) => (NovemberRule::CuencaOnMonday, nov2 + Duration::days(2), nov3),
        _ => (NovemberRule::Nominal, nov2, nov3),
    };

    Some(NovemberPair {
        rule,
        all_souls,
        cuenca,
    })
}
