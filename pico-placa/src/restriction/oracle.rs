//! Holiday oracles: sources of "is this date a holiday?".
//!
//! The engine only depends on the [`HolidayOracle`] trait. Implementations
//! exist for the locally computed calendar, the remote provider, its mock,
//! and the caching wrapper; [`HolidaySource`] picks one at runtime.

use std::future::Future;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::cache::{CacheConfig, CachedOracle};
use crate::calendar::{CalendarError, HolidayCalendar, holidays_for_year};
use crate::domain::{HolidayStatus, Province};
use crate::holidays_api::{HolidayApiClient, HolidayApiError, MockHolidayApi};

/// Answers whether a date is a public holiday.
///
/// Failures must be reported as errors, never as
/// [`HolidayStatus::NotHoliday`].
pub trait HolidayOracle: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn holiday_status(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<HolidayStatus, Self::Error>> + Send;
}

/// Holiday oracle backed by the locally computed calendar.
///
/// Calendars are computed once per year and kept for reuse.
#[derive(Debug, Clone)]
pub struct LocalCalendar {
    province: Option<Province>,
    years: MokaCache<i32, Arc<HolidayCalendar>>,
}

impl LocalCalendar {
    /// A calendar including `province`'s local holidays.
    pub fn new(province: Option<Province>) -> Self {
        Self::with_config(province, &CacheConfig::default())
    }

    pub fn with_config(province: Option<Province>, config: &CacheConfig) -> Self {
        Self {
            province,
            years: MokaCache::builder()
                .max_capacity(config.calendar_years)
                .build(),
        }
    }

    /// The province whose holidays are included.
    pub fn province(&self) -> Option<Province> {
        self.province
    }

    /// The calendar for `year`, computed on first use.
    ///
    /// Concurrent callers asking for the same year share one computation.
    /// Failures are not cached.
    pub async fn calendar(&self, year: i32) -> Result<Arc<HolidayCalendar>, CalendarError> {
        let province = self.province;
        self.years
            .try_get_with(year, async move {
                let cal = holidays_for_year(year, province)?;
                trace!(year, holidays = cal.len(), "computed holiday calendar");
                Ok::<_, CalendarError>(Arc::new(cal))
            })
            .await
            .map_err(|e| (*e).clone())
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::new(Some(Province::Pichincha))
    }
}

impl HolidayOracle for LocalCalendar {
    type Error = CalendarError;

    async fn holiday_status(&self, date: NaiveDate) -> Result<HolidayStatus, CalendarError> {
        let cal = self.calendar(date.year()).await?;
        Ok(match cal.get(date) {
            Some(name) => HolidayStatus::holiday(name),
            None => HolidayStatus::NotHoliday,
        })
    }
}

impl HolidayOracle for HolidayApiClient {
    type Error = HolidayApiError;

    async fn holiday_status(&self, date: NaiveDate) -> Result<HolidayStatus, HolidayApiError> {
        self.lookup(date).await
    }
}

impl HolidayOracle for MockHolidayApi {
    type Error = HolidayApiError;

    async fn holiday_status(&self, date: NaiveDate) -> Result<HolidayStatus, HolidayApiError> {
        self.lookup(date).await
    }
}

/// Error from whichever source a [`HolidaySource`] dispatched to.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Api(#[from] HolidayApiError),
}

/// Runtime choice between local computation and the remote provider.
///
/// A remote failure is returned as-is; there is no fallback to the local
/// calendar.
#[derive(Debug, Clone)]
pub enum HolidaySource {
    Local(LocalCalendar),
    Remote(CachedOracle<HolidayApiClient>),
}

impl HolidaySource {
    /// Short label for logs and responses.
    pub fn label(&self) -> &'static str {
        match self {
            HolidaySource::Local(_) => "local",
            HolidaySource::Remote(_) => "remote",
        }
    }
}

impl HolidayOracle for HolidaySource {
    type Error = OracleError;

    async fn holiday_status(&self, date: NaiveDate) -> Result<HolidayStatus, OracleError> {
        match self {
            HolidaySource::Local(cal) => Ok(cal.holiday_status(date).await?),
            HolidaySource::Remote(api) => Ok(api.holiday_status(date).await?),
        }
    }
}
