//! Caching layer for holiday lookups.
//!
//! Remote lookups cost one HTTP request (and one unit of API quota) per
//! date, so answers are cached per date for a few hours. Only successful
//! answers are cached; errors are always returned to the caller and retried
//! on the next request.

use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::HolidayStatus;
use crate::restriction::HolidayOracle;

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached remote answers.
    pub ttl: Duration,

    /// Maximum number of cached remote answers.
    pub max_capacity: u64,

    /// Maximum number of computed calendars (one per year) kept locally.
    pub calendar_years: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(6 * 60 * 60),
            max_capacity: 1000,
            calendar_years: 16,
        }
    }
}

/// Holiday oracle with per-date caching.
///
/// Wraps any [`HolidayOracle`] and caches its successful answers.
#[derive(Debug, Clone)]
pub struct CachedOracle<O> {
    inner: O,
    answers: MokaCache<NaiveDate, HolidayStatus>,
}

impl<O> CachedOracle<O> {
    /// Create a new cached oracle.
    pub fn new(inner: O, config: &CacheConfig) -> Self {
        let answers = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, answers }
    }

    /// Access the wrapped oracle for lookups that bypass the cache.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.answers.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.answers.invalidate_all();
    }
}

impl<O: HolidayOracle> HolidayOracle for CachedOracle<O> {
    type Error = O::Error;

    async fn holiday_status(&self, date: NaiveDate) -> Result<HolidayStatus, O::Error> {
        if let Some(cached) = self.answers.get(&date).await {
            trace!(%date, "holiday answer served from cache");
            return Ok(cached);
        }

        let status = self.inner.holiday_status(date).await?;
        self.answers.insert(date, status.clone()).await;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays_api::{HolidayApiError, MockHolidayApi};
    use reqwest::StatusCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(21_600));
        assert_eq!(config.max_capacity, 1000);
        assert_eq!(config.calendar_years, 16);
    }

    #[tokio::test]
    async fn cache_creation() {
        let cached = CachedOracle::new(MockHolidayApi::new(), &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }

    #[tokio::test]
    async fn second_lookup_served_from_cache() {
        let api = MockHolidayApi::new()
            .with_holiday(date(2024, 12, 25), "Christmas Day")
            .await;
        let cached = CachedOracle::new(api, &CacheConfig::default());

        let first = cached.holiday_status(date(2024, 12, 25)).await.unwrap();
        let second = cached.holiday_status(date(2024, 12, 25)).await.unwrap();

        assert_eq!(first, HolidayStatus::holiday("Christmas Day"));
        assert_eq!(first, second);
        assert_eq!(cached.inner().calls(), 1);
    }

    #[tokio::test]
    async fn distinct_dates_not_shared() {
        let cached = CachedOracle::new(MockHolidayApi::new(), &CacheConfig::default());
        cached.holiday_status(date(2024, 3, 18)).await.unwrap();
        cached.holiday_status(date(2024, 3, 19)).await.unwrap();
        assert_eq!(cached.inner().calls(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let api = MockHolidayApi::new()
            .with_response(date(2024, 5, 3), StatusCode::SERVICE_UNAVAILABLE, "down")
            .await;
        let cached = CachedOracle::new(api, &CacheConfig::default());

        for _ in 0..2 {
            let err = cached.holiday_status(date(2024, 5, 3)).await.unwrap_err();
            assert!(matches!(err, HolidayApiError::Api { status: 503, .. }));
        }
        assert_eq!(cached.inner().calls(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cached = CachedOracle::new(MockHolidayApi::new(), &CacheConfig::default());
        cached.holiday_status(date(2024, 3, 18)).await.unwrap();
        cached.invalidate_all();
        cached.holiday_status(date(2024, 3, 18)).await.unwrap();
        assert_eq!(cached.inner().calls(), 2);
    }
}
