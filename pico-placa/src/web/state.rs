//! Application state for the web layer.

use std::sync::Arc;

use crate::config::{API_KEY_VAR, Settings};
use crate::domain::Province;
use crate::holidays_api::HolidayApiError;
use crate::restriction::{HolidaySource, RestrictionEngine};

/// Shared application state.
///
/// Contains the engines needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Engine backed by the local Pichincha calendar
    pub local: Arc<RestrictionEngine<HolidaySource>>,

    /// Engine backed by the remote provider, when an API key is configured
    pub remote: Option<Arc<RestrictionEngine<HolidaySource>>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        local: RestrictionEngine<HolidaySource>,
        remote: Option<RestrictionEngine<HolidaySource>>,
    ) -> Self {
        Self {
            local: Arc::new(local),
            remote: remote.map(Arc::new),
        }
    }

    /// Build both engines from settings.
    ///
    /// The remote engine is left out when no API key is set; requests asking
    /// for it then fail with [`HolidayApiError::NotConfigured`].
    pub fn from_settings(settings: &Settings) -> Result<Self, HolidayApiError> {
        let local = RestrictionEngine::new(settings.local_source(Some(Province::Pichincha)));
        let remote = match settings.api_key {
            Some(_) => Some(RestrictionEngine::new(settings.remote_source()?)),
            None => None,
        };
        Ok(Self::new(local, remote))
    }

    /// The engine for the requested source.
    pub fn engine(
        &self,
        online: bool,
    ) -> Result<&RestrictionEngine<HolidaySource>, HolidayApiError> {
        if !online {
            return Ok(self.local.as_ref());
        }
        self.remote.as_deref().ok_or_else(|| {
            HolidayApiError::NotConfigured(format!("{API_KEY_VAR} is not set"))
        })
    }
}
