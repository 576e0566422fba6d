//! Holiday provider error types.

/// Errors from the remote holiday provider.
#[derive(Debug, thiserror::Error)]
pub enum HolidayApiError {
    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("holiday provider did not answer within {secs}s")]
    Timeout { secs: u64 },

    /// Missing or invalid API key
    #[error("unauthorized: check HOLIDAYS_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by holiday provider")]
    RateLimited,

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Remote lookups requested without the required configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl HolidayApiError {
    /// Classify a transport error, separating timeouts from other failures.
    pub(crate) fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            HolidayApiError::Timeout { secs: timeout_secs }
        } else {
            HolidayApiError::Http(err)
        }
    }

    /// Whether trying the same request again could succeed.
    ///
    /// Nothing retries automatically; this lets the caller decide.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HolidayApiError::Http(_) | HolidayApiError::Timeout { .. } | HolidayApiError::RateLimited
        )
    }
}
