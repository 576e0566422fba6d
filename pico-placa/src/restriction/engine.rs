//! The circulation decision.
//!
//! The holiday oracle is consulted first; the remaining rules are pure
//! functions of the query and the restriction table, tried in order.

use std::fmt;

use chrono::Weekday;
use serde::Serialize;
use tracing::debug;

use crate::domain::{HolidayStatus, Query};

use super::oracle::HolidayOracle;
use super::table::RestrictionTable;

/// Why a vehicle may or may not circulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The date is a public holiday.
    Holiday,
    /// The plate belongs to an exempt category.
    ExemptPlate,
    /// The time is outside both peak windows.
    OffPeak,
    /// The final digit is not restricted on this weekday.
    DigitNotRestricted,
    /// The final digit is restricted on this weekday, during a peak window.
    RestrictedDigit,
}

impl Reason {
    pub fn is_allowed(self) -> bool {
        !matches!(self, Reason::RestrictedDigit)
    }

    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Reason::Holiday => "holiday",
            Reason::ExemptPlate => "exempt_plate",
            Reason::OffPeak => "off_peak",
            Reason::DigitNotRestricted => "digit_not_restricted",
            Reason::RestrictedDigit => "restricted_digit",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::Holiday => "the date is a public holiday",
            Reason::ExemptPlate => "the plate belongs to an exempt category",
            Reason::OffPeak => "the time is outside the peak windows",
            Reason::DigitNotRestricted => "the final digit is not restricted on this day",
            Reason::RestrictedDigit => "the final digit is restricted during peak hours on this day",
        };
        f.write_str(text)
    }
}

/// Outcome of evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub reason: Reason,
    pub weekday: Weekday,
    /// Holiday name, set when the holiday rule decided the verdict.
    pub holiday: Option<String>,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        self.reason.is_allowed()
    }

    /// The verdict as a sentence about the queried vehicle.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use pico_placa::domain::Query;
    /// use pico_placa::restriction::{Reason, Verdict};
    ///
    /// let query = Query::parse("XYZ-1231", "2024-03-18", "08:00").unwrap();
    /// let verdict = Verdict { reason: Reason::RestrictedDigit, weekday: Weekday::Mon, holiday: None };
    /// assert_eq!(
    ///     verdict.sentence(&query),
    ///     "The vehicle with plate XYZ-1231 CANNOT be on the road on 2024-03-18 at 08:00."
    /// );
    /// ```
    pub fn sentence(&self, query: &Query) -> String {
        let can = if self.is_allowed() { "CAN" } else { "CANNOT" };
        format!(
            "The vehicle with plate {} {can} be on the road on {} at {}.",
            query.plate, query.date, query.time
        )
    }

    /// Human-readable explanation of the reason.
    pub fn explanation(&self) -> String {
        match (&self.reason, &self.holiday) {
            (Reason::Holiday, Some(name)) => format!("{} ({name})", self.reason),
            (reason, _) => reason.to_string(),
        }
    }
}

/// Everything the plate rules look at.
struct Facts<'a> {
    table: &'a RestrictionTable,
    query: &'a Query,
    weekday: Weekday,
}

type Rule = fn(&Facts<'_>) -> Option<Reason>;

fn exempt_plate(facts: &Facts<'_>) -> Option<Reason> {
    facts
        .table
        .is_exempt_plate(&facts.query.plate)
        .then_some(Reason::ExemptPlate)
}

fn off_peak(facts: &Facts<'_>) -> Option<Reason> {
    (!facts.table.is_peak(facts.query.time)).then_some(Reason::OffPeak)
}

fn digit_not_restricted(facts: &Facts<'_>) -> Option<Reason> {
    let digit = facts.query.plate.last_digit();
    (!facts.table.is_restricted_digit(facts.weekday, digit)).then_some(Reason::DigitNotRestricted)
}

/// Plate rules, first match wins. No match means the vehicle is restricted.
const RULES: [Rule; 3] = [exempt_plate, off_peak, digit_not_restricted];

/// Decide a query given the date's holiday status.
pub fn decide(table: &RestrictionTable, query: &Query, status: &HolidayStatus) -> Verdict {
    let weekday = query.date.weekday();

    if let HolidayStatus::Holiday { name } = status {
        return Verdict {
            reason: Reason::Holiday,
            weekday,
            holiday: Some(name.clone()),
        };
    }

    let facts = Facts {
        table,
        query,
        weekday,
    };
    let reason = RULES
        .iter()
        .find_map(|rule| rule(&facts))
        .unwrap_or(Reason::RestrictedDigit);

    Verdict {
        reason,
        weekday,
        holiday: None,
    }
}

/// Evaluates circulation queries against a holiday oracle.
#[derive(Clone)]
pub struct RestrictionEngine<O> {
    oracle: O,
    table: RestrictionTable,
}

impl<O: HolidayOracle> RestrictionEngine<O> {
    /// An engine using the Quito restriction table.
    pub fn new(oracle: O) -> Self {
        Self::with_table(oracle, RestrictionTable::quito())
    }

    pub fn with_table(oracle: O, table: RestrictionTable) -> Self {
        Self { oracle, table }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn table(&self) -> &RestrictionTable {
        &self.table
    }

    /// Evaluate a query.
    ///
    /// Oracle failures are returned unchanged.
    pub async fn evaluate(&self, query: &Query) -> Result<Verdict, O::Error> {
        let status = self.oracle.holiday_status(query.date.date()).await?;
        let verdict = decide(&self.table, query, &status);

        debug!(
            plate = %query.plate,
            date = %query.date,
            time = %query.time,
            holiday = %status,
            reason = verdict.reason.code(),
            "evaluated circulation query"
        );

        Ok(verdict)
    }

    /// Whether the queried vehicle may circulate.
    pub async fn is_allowed(&self, query: &Query) -> Result<bool, O::Error> {
        Ok(self.evaluate(query).await?.is_allowed())
    }
}
