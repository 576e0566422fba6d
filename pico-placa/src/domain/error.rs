//! Domain error types.
//!
//! These errors represent validation failures on caller-supplied input.
//! They are distinct from calendar and API/IO errors.

use super::{InvalidClockTime, InvalidDate, InvalidPlate, InvalidProvince};

/// Malformed input rejected before any restriction logic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Plate(#[from] InvalidPlate),

    #[error(transparent)]
    Date(#[from] InvalidDate),

    #[error(transparent)]
    Time(#[from] InvalidClockTime),

    #[error(transparent)]
    Province(#[from] InvalidProvince),
}
