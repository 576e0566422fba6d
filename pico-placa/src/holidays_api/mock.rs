//! Mock holiday provider for testing without API access.
//!
//! Serves canned provider responses keyed by date and runs them through the
//! same interpretation as live responses, so provider quirks (the Maundy
//! Thursday label, 401s) can be exercised offline.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use reqwest::StatusCode;
use tokio::sync::RwLock;

use crate::domain::HolidayStatus;

use super::client::interpret_response;
use super::error::HolidayApiError;

/// A canned provider response.
#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

/// Mock holiday provider that serves canned responses.
///
/// Dates without a canned response answer `[]` (not a holiday).
#[derive(Clone, Default)]
pub struct MockHolidayApi {
    responses: Arc<RwLock<HashMap<NaiveDate, CannedResponse>>>,
    /// Status returned for every date, overriding canned bodies.
    forced_status: Option<StatusCode>,
    calls: Arc<AtomicUsize>,
}

impl MockHolidayApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that rejects every request as the provider does for a bad key.
    pub fn unauthorized() -> Self {
        Self {
            forced_status: Some(StatusCode::UNAUTHORIZED),
            ..Self::default()
        }
    }

    /// Serve a provider holiday entry named `name` for `date`.
    pub async fn with_holiday(self, date: NaiveDate, name: &str) -> Self {
        let body = serde_json::json!([{ "name": name, "type": "National" }]).to_string();
        self.with_response(date, StatusCode::OK, body).await
    }

    /// Serve a raw response for `date`.
    pub async fn with_response(
        self,
        date: NaiveDate,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        self.responses.write().await.insert(
            date,
            CannedResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Mimics [`HolidayApiClient::lookup`](super::HolidayApiClient::lookup).
    pub async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus, HolidayApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.forced_status {
            return interpret_response(status, "");
        }

        let responses = self.responses.read().await;
        match responses.get(&date) {
            Some(canned) => interpret_response(canned.status, &canned.body),
            None => interpret_response(StatusCode::OK, "[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn unknown_date_is_not_a_holiday() {
        let api = MockHolidayApi::new();
        let status = api.lookup(date(2024, 3, 18)).await.unwrap();
        assert_eq!(status, HolidayStatus::NotHoliday);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn canned_holiday() {
        let api = MockHolidayApi::new()
            .with_holiday(date(2024, 3, 29), "Good Friday")
            .await;
        let status = api.lookup(date(2024, 3, 29)).await.unwrap();
        assert_eq!(status, HolidayStatus::holiday("Good Friday"));
    }

    #[tokio::test]
    async fn maundy_thursday_suppressed() {
        let api = MockHolidayApi::new()
            .with_holiday(date(2024, 3, 28), "Maundy Thursday")
            .await;
        let status = api.lookup(date(2024, 3, 28)).await.unwrap();
        assert_eq!(status, HolidayStatus::NotHoliday);
    }

    #[tokio::test]
    async fn unauthorized_for_every_date() {
        let api = MockHolidayApi::unauthorized();
        let err = api.lookup(date(2024, 1, 1)).await.unwrap_err();
        assert!(matches!(err, HolidayApiError::Unauthorized));
    }

    #[tokio::test]
    async fn raw_server_error() {
        let api = MockHolidayApi::new()
            .with_response(date(2024, 5, 3), StatusCode::INTERNAL_SERVER_ERROR, "boom")
            .await;
        let err = api.lookup(date(2024, 5, 3)).await.unwrap_err();
        assert!(matches!(err, HolidayApiError::Api { status: 500, .. }));
    }
}
