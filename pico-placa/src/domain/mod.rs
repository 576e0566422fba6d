//! Domain types for the circulation checker.
//!
//! This module contains the validated input types. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod clock;
mod date;
mod error;
mod holiday;
mod plate;
mod province;
mod query;

pub use clock::{ClockTime, InvalidClockTime};
pub use date::{InvalidDate, TrafficDate};
pub use error::InputError;
pub use holiday::HolidayStatus;
pub use plate::{InvalidPlate, Plate};
pub use province::{InvalidProvince, Province};
pub use query::Query;
