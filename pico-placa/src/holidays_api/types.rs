//! Holiday provider response DTOs.
//!
//! The provider answers a single-day lookup with a JSON array: empty when
//! the day is not a holiday, otherwise one object per holiday. Only the
//! name is used; the other keys (local name, type, location, ...) are
//! ignored.

use serde::Deserialize;

/// One holiday entry in a provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderHoliday {
    /// English name of the holiday (e.g. "Good Friday").
    pub name: String,
}
