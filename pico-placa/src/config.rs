//! Runtime settings read from the environment.

use std::env;
use std::net::SocketAddr;

use crate::cache::{CacheConfig, CachedOracle};
use crate::domain::Province;
use crate::holidays_api::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HolidayApiClient, HolidayApiConfig, HolidayApiError,
};
use crate::restriction::{HolidaySource, LocalCalendar};

pub const API_KEY_VAR: &str = "HOLIDAYS_API_KEY";
pub const API_URL_VAR: &str = "HOLIDAYS_API_URL";
pub const API_TIMEOUT_VAR: &str = "HOLIDAYS_API_TIMEOUT_SECS";
pub const ADDR_VAR: &str = "PICO_PLACA_ADDR";

/// Default HTTP listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// A setting present in the environment but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Settings shared by the CLI and the HTTP server.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Holiday provider API key; remote lookups are unavailable without it.
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout_secs: u64,
    pub listen_addr: SocketAddr,
    pub cache: CacheConfig,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read settings through `lookup`, applying defaults for unset variables.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let timeout_secs = match get(API_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError {
                        var: API_TIMEOUT_VAR,
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr.trim().parse().map_err(|_| ConfigError {
            var: ADDR_VAR,
            value: addr.clone(),
            reason: "expected HOST:PORT",
        })?;

        Ok(Self {
            api_key: get(API_KEY_VAR),
            api_url: get(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            listen_addr,
            cache: CacheConfig::default(),
        })
    }

    /// Provider client configuration, if an API key is set.
    pub fn api_config(&self) -> Option<HolidayApiConfig> {
        self.api_key.as_ref().map(|key| {
            HolidayApiConfig::new(key)
                .with_base_url(&self.api_url)
                .with_timeout(self.timeout_secs)
        })
    }

    /// A cached remote holiday source.
    ///
    /// Fails with [`HolidayApiError::NotConfigured`] when no API key is set.
    pub fn remote_source(&self) -> Result<HolidaySource, HolidayApiError> {
        let config = self.api_config().ok_or_else(|| {
            HolidayApiError::NotConfigured(format!("{API_KEY_VAR} is not set"))
        })?;
        let client = HolidayApiClient::new(config)?;
        Ok(HolidaySource::Remote(CachedOracle::new(client, &self.cache)))
    }

    /// The locally computed holiday source for `province`.
    pub fn local_source(&self, province: Option<Province>) -> HolidaySource {
        HolidaySource::Local(LocalCalendar::with_config(province, &self.cache))
    }

    /// Remote when `online`, local otherwise.
    pub fn holiday_source(
        &self,
        online: bool,
        province: Option<Province>,
    ) -> Result<HolidaySource, HolidayApiError> {
        if online {
            self.remote_source()
        } else {
            Ok(self.local_source(province))
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache: CacheConfig::default(),
        }
    }
}
