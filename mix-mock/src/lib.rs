//! mix-mock
//!
//! Connectors for tests and demos that never touch the network.
//!
//! - `MockConnector`: deterministic per-region fixtures scaled to the window
//!   length, with a "latest available day" cut-off.
//! - `DynamicMockConnector`: per-region scripted behaviors (return, fail,
//!   hang) driven through a `DynamicMockController`, with a call log.
#![warn(missing_docs)]

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use mix_core::{
    GenerationProvider, GenerationSnapshot, MixError, RegionQuery, RequestWindow,
    TOTAL_GENERATION_KEY,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Upstream code the mocks use for "no data for this window".
pub const NO_DATA_CODE: i64 = 502;

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Windows ending after the latest available day report "no data", like the
/// real source does for the current day. The scope `"FAIL"` returns an
/// upstream error.
pub struct MockConnector {
    latest: Option<NaiveDate>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Data is available up to two days before today (UTC).
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Data is available up to and including `latest`.
    #[must_use]
    pub const fn with_latest(latest: NaiveDate) -> Self {
        Self {
            latest: Some(latest),
        }
    }

    fn latest(&self) -> NaiveDate {
        self.latest.unwrap_or_else(|| {
            let today = Utc::now().date_naive();
            today.checked_sub_days(Days::new(2)).unwrap_or(today)
        })
    }

    /// Build the fixture snapshot of `scope` for a window of `days` days.
    ///
    /// Percentages are relative to the region's own total, as upstream reports them.
    ///
    /// # Errors
    /// Returns `Upstream` for an unknown scope.
    pub fn fixture(scope: &str, days: i64) -> Result<GenerationSnapshot, MixError> {
        let daily = fixtures::regions::daily_by_scope(scope)
            .ok_or_else(|| MixError::upstream(400, format!("unknown geo_limit '{scope}'")))?;
        #[allow(clippy::cast_precision_loss)]
        let scale = days as f64;
        let total: f64 = daily.iter().map(|(_, v)| v * scale).sum();
        let rows = daily
            .iter()
            .map(|&(k, v)| (k, v * scale, 100.0 * v * scale / total))
            .chain(std::iter::once((TOTAL_GENERATION_KEY, total, 100.0)));
        GenerationSnapshot::from_rows(rows)
    }
}

#[async_trait]
impl GenerationProvider for MockConnector {
    fn name(&self) -> &'static str {
        "mix-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn generation(
        &self,
        region: &RegionQuery,
        window: &RequestWindow,
    ) -> Result<GenerationSnapshot, MixError> {
        if region.scope == "FAIL" {
            return Err(MixError::upstream(500, "forced failure"));
        }
        if window.end().date() > self.latest() {
            return Err(MixError::no_data(window.label(), NO_DATA_CODE));
        }
        let days = (window.end().date() - window.start().date()).num_days() + 1;
        Self::fixture(&region.scope, days)
    }
}
