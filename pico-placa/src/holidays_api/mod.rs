//! Remote holiday provider client.
//!
//! This module provides an HTTP client for a public-holidays API, used as an
//! alternative to the locally computed calendar.
//!
//! Key characteristics of the provider:
//! - One request answers one date; an empty JSON array means "no holiday"
//! - The API key is passed as a query parameter; a bad key yields 401
//! - Maundy Thursday is reported as a holiday for Ecuador, which it is not,
//!   so that entry is discarded

mod client;
mod error;
mod mock;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HolidayApiClient, HolidayApiConfig, MAUNDY_THURSDAY,
    interpret_response,
};
pub use error::HolidayApiError;
pub use mock::MockHolidayApi;
pub use types::ProviderHoliday;
