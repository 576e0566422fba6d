//! The Pico y Placa restriction.
//!
//! [`RestrictionEngine`] combines a [`HolidayOracle`] with the static
//! [`RestrictionTable`] to decide whether a vehicle may circulate.

mod engine;
mod oracle;
mod table;

pub use engine::{Reason, RestrictionEngine, Verdict, decide};
pub use oracle::{HolidayOracle, HolidaySource, LocalCalendar, OracleError};
pub use table::{EXEMPT_SECOND_LETTERS, PeakWindow, RestrictionTable};
