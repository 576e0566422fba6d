//! A single circulation query.

use super::{ClockTime, InputError, Plate, TrafficDate};

/// A validated (plate, date, time) triple.
///
/// # Examples
///
/// ```
/// use pico_placa::domain::Query;
///
/// let query = Query::parse("PBX-1231", "2024-03-18", "08:00").unwrap();
/// assert_eq!(query.plate.last_digit(), 1);
///
/// assert!(Query::parse("PBX-1231", "2024-03-18", "8:00").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub plate: Plate,
    pub date: TrafficDate,
    pub time: ClockTime,
}

impl Query {
    /// Create a query from already-validated parts.
    pub fn new(plate: Plate, date: TrafficDate, time: ClockTime) -> Self {
        Self { plate, date, time }
    }

    /// Validate raw strings, in plate, date, time order.
    ///
    /// The first failing field is reported.
    pub fn parse(plate: &str, date: &str, time: &str) -> Result<Self, InputError> {
        Ok(Self {
            plate: Plate::parse(plate)?,
            date: TrafficDate::parse(date)?,
            time: ClockTime::parse(time)?,
        })
    }
}
