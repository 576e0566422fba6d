//! Holiday provider HTTP client.
//!
//! Answers "is this date a public holiday in Ecuador?" with one GET request
//! per date. The API key travels as a query parameter.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::domain::HolidayStatus;

use super::error::HolidayApiError;
use super::types::ProviderHoliday;

/// Default base URL for the holiday provider.
pub const DEFAULT_BASE_URL: &str = "https://holidays.abstractapi.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// ISO 3166-1 country queried.
const COUNTRY: &str = "EC";

/// The provider lists Maundy Thursday as an Ecuadorian holiday; it is not one.
pub const MAUNDY_THURSDAY: &str = "Maundy Thursday";

/// Configuration for the holiday provider client.
#[derive(Debug, Clone)]
pub struct HolidayApiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to the production provider)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HolidayApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Holiday provider API client.
#[derive(Debug, Clone)]
pub struct HolidayApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl HolidayApiClient {
    /// Create a new client with the given configuration.
    ///
    /// An empty API key is rejected up front rather than sent to the
    /// provider.
    pub fn new(config: HolidayApiConfig) -> Result<Self, HolidayApiError> {
        if config.api_key.trim().is_empty() {
            return Err(HolidayApiError::NotConfigured(
                "HOLIDAYS_API_KEY is not set".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(HolidayApiError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Look up whether `date` is a public holiday.
    ///
    /// Timeouts and transport failures are errors; they are never reported
    /// as "not a holiday".
    pub async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus, HolidayApiError> {
        let url = format!("{}/v1/", self.base_url);

        debug!(%date, "querying holiday provider");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.clone()),
                ("country", COUNTRY.to_string()),
                ("year", date.year().to_string()),
                ("month", date.month().to_string()),
                ("day", date.day().to_string()),
            ])
            .send()
            .await
            .map_err(|e| HolidayApiError::from_transport(e, self.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HolidayApiError::from_transport(e, self.timeout_secs))?;

        let result = interpret_response(status, &body);
        if let Err(e) = &result {
            warn!(%date, error = %e, "holiday provider lookup failed");
        }
        result
    }
}

/// Turn a provider response into a holiday status.
///
/// - `[]` means not a holiday
/// - otherwise the first entry not named [`MAUNDY_THURSDAY`] names the holiday
/// - 401/403 map to [`HolidayApiError::Unauthorized`]
pub fn interpret_response(status: StatusCode, body: &str) -> Result<HolidayStatus, HolidayApiError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(HolidayApiError::Unauthorized);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(HolidayApiError::RateLimited);
    }

    if !status.is_success() {
        return Err(HolidayApiError::Api {
            status: status.as_u16(),
            message: body.chars().take(500).collect(),
        });
    }

    let holidays: Vec<ProviderHoliday> =
        serde_json::from_str(body).map_err(|e| HolidayApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

    let named = holidays
        .into_iter()
        .find(|h| h.name != MAUNDY_THURSDAY)
        .map(|h| h.name);

    Ok(match named {
        Some(name) => HolidayStatus::Holiday { name },
        None => HolidayStatus::NotHoliday,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn config_builder() {
        let config = HolidayApiConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(3);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn config_defaults() {
        let config = HolidayApiConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation() {
        let client = HolidayApiClient::new(HolidayApiConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn empty_key_is_not_configured() {
        let err = HolidayApiClient::new(HolidayApiConfig::new("  ")).unwrap_err();
        assert!(matches!(err, HolidayApiError::NotConfigured(_)));
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client = HolidayApiClient::new(
            HolidayApiConfig::new("k").with_base_url("http://localhost:9000/"),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[test]
    fn empty_array_is_not_a_holiday() {
        let status = interpret_response(StatusCode::OK, "[]").unwrap();
        assert_eq!(status, HolidayStatus::NotHoliday);
    }

    #[test]
    fn named_entry_is_a_holiday() {
        let body = r#"[{"name": "Good Friday", "type": "National"}]"#;
        let status = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(status, HolidayStatus::holiday("Good Friday"));
    }

    #[test]
    fn maundy_thursday_suppressed() {
        let body = r#"[{"name": "Maundy Thursday", "type": "National"}]"#;
        let status = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(status, HolidayStatus::NotHoliday);
    }

    #[test]
    fn maundy_thursday_does_not_mask_other_entries() {
        let body = r#"[{"name": "Maundy Thursday"}, {"name": "Some Local Feast"}]"#;
        let status = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(status, HolidayStatus::holiday("Some Local Feast"));
    }

    #[test]
    fn unauthorized_is_distinct() {
        let err = interpret_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
        assert!(matches!(err, HolidayApiError::Unauthorized));

        let err = interpret_response(StatusCode::FORBIDDEN, "").unwrap_err();
        assert!(matches!(err, HolidayApiError::Unauthorized));
    }

    #[test]
    fn rate_limited() {
        let err = interpret_response(StatusCode::TOO_MANY_REQUESTS, "").unwrap_err();
        assert!(matches!(err, HolidayApiError::RateLimited));
    }

    #[test]
    fn server_error_keeps_status() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        match err {
            HolidayApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_body_is_json_error() {
        let err = interpret_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, HolidayApiError::Json { .. }));
    }

    /// Serve one connection on a local port and return the base URL plus a
    /// handle yielding the request line. `None` never answers.
    async fn one_shot_server(reply: Option<String>) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }

            match reply {
                Some(resp) => stream.write_all(resp.as_bytes()).await.unwrap(),
                None => tokio::time::sleep(Duration::from_secs(5)).await,
            }

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base, handle)
    }

    fn http_reply(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(base: &str, timeout_secs: u64) -> HolidayApiClient {
        HolidayApiClient::new(
            HolidayApiConfig::new("k")
                .with_base_url(base)
                .with_timeout(timeout_secs),
        )
        .unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn lookup_sends_query_and_suppresses_maundy_thursday() {
        let body = r#"[{"name": "Maundy Thursday", "type": "National"}]"#;
        let (base, server) = one_shot_server(Some(http_reply("200 OK", body))).await;

        let status = client_for(&base, 5).lookup(ymd(2024, 3, 28)).await.unwrap();
        assert_eq!(status, HolidayStatus::NotHoliday);

        let request_line = server.await.unwrap();
        assert_eq!(
            request_line,
            "GET /v1/?api_key=k&country=EC&year=2024&month=3&day=28 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn lookup_names_holiday() {
        let body = r#"[{"name": "Good Friday"}]"#;
        let (base, _server) = one_shot_server(Some(http_reply("200 OK", body))).await;

        let status = client_for(&base, 5).lookup(ymd(2024, 3, 29)).await.unwrap();
        assert_eq!(status, HolidayStatus::holiday("Good Friday"));
    }

    #[tokio::test]
    async fn lookup_unauthorized() {
        let reply = http_reply("401 Unauthorized", r#"{"error": "invalid api key"}"#);
        let (base, _server) = one_shot_server(Some(reply)).await;

        let err = client_for(&base, 5).lookup(ymd(2024, 1, 1)).await.unwrap_err();
        assert!(matches!(err, HolidayApiError::Unauthorized));
    }

    #[tokio::test]
    async fn lookup_times_out_instead_of_answering_not_a_holiday() {
        let (base, _server) = one_shot_server(None).await;

        let err = client_for(&base, 1).lookup(ymd(2024, 1, 2)).await.unwrap_err();
        assert!(matches!(err, HolidayApiError::Timeout { secs: 1 }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn lookup_connection_refused_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client_for(&base, 5).lookup(ymd(2024, 1, 2)).await.unwrap_err();
        assert!(matches!(err, HolidayApiError::Http(_)));
    }
}
