use mix_core::{AggregatedResult, MixError, RegionQuery, RequestWindow, find_date};
use serde::{Deserialize, Serialize};

use crate::Mix;

/// Outcome of one national aggregation.
///
/// When `error` is set, `totals` holds only what was accumulated before the
/// failing region and must not be shown as a national figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalReport {
    /// Window every region was queried with.
    pub window: RequestWindow,
    /// Accumulated totals.
    pub totals: AggregatedResult,
    /// Regions combined into `totals`, in query order.
    pub contributors: Vec<RegionQuery>,
    /// Error of the region that stopped the aggregation, if any.
    pub error: Option<MixError>,
}

impl NationalReport {
    /// True if a region failed and the totals are incomplete.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Date text shown in the reply header.
    #[must_use]
    pub fn label(&self) -> &str {
        self.window.label()
    }
}

impl Mix {
    /// Resolve the request window for a mention text.
    ///
    /// An explicit date is resolved locally; without one the latest available
    /// day is probed.
    ///
    /// # Errors
    /// `InvalidDate` or `DateOutOfRange` for explicit dates, and the probe's
    /// errors otherwise. No region is queried for an explicit date that fails.
    pub async fn resolve_window(&self, text: &str) -> Result<RequestWindow, MixError> {
        match find_date(text) {
            Some(token) => RequestWindow::resolve(&token, self.cfg.lower_bound_year),
            None => self.latest_available_date().await,
        }
    }

    /// Aggregate the national generation mix for the date found in `text`.
    ///
    /// Region failures are carried in the report rather than returned as
    /// `Err`, so callers can see how far the aggregation got.
    ///
    /// # Errors
    /// Only failures that happen before any region is aggregated: date
    /// parsing, lower bound, and the latest-available-date probe.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "mixenergetico::router::aggregate::national", skip(self))
    )]
    pub async fn national(&self, text: &str) -> Result<NationalReport, MixError> {
        let window = self.resolve_window(text).await?;
        self.national_for(window).await
    }

    /// Aggregate the configured regions, in order, for an already resolved window.
    ///
    /// The primary region seeds the totals. Each further region is absorbed
    /// with the accumulation rule; the first region that fails stops the
    /// aggregation and its error is recorded in the report.
    ///
    /// # Errors
    /// `InvalidArg` if no regions are configured.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixenergetico::router::aggregate::national_for",
            skip(self, window),
            fields(date = %window.label(), trunc = %window.granularity()),
        )
    )]
    pub async fn national_for(&self, window: RequestWindow) -> Result<NationalReport, MixError> {
        let primary = self.primary_region()?;
        let mut report = NationalReport {
            window,
            totals: AggregatedResult::default(),
            contributors: Vec::with_capacity(self.cfg.regions.len()),
            error: None,
        };

        match self.fetch_region(primary, &report.window).await {
            Ok(snapshot) => {
                report.totals = AggregatedResult::from_primary(snapshot);
                report.contributors.push(primary.clone());
            }
            Err(e) => {
                report.error = Some(e);
                return Ok(report);
            }
        }

        for region in self.cfg.regions.iter().skip(1) {
            match self.fetch_region(region, &report.window).await {
                Ok(snapshot) => {
                    report.totals.absorb(&snapshot);
                    report.contributors.push(region.clone());
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        region = %region.scope,
                        error = %e,
                        "aggregation stopped on regional error"
                    );
                    report.error = Some(e);
                    break;
                }
            }
        }

        Ok(report)
    }

    /// Run the whole pipeline for a mention and return the reply text.
    ///
    /// Any failure is rendered as its description; no partial table is ever
    /// returned.
    pub async fn reply(&self, text: &str) -> String {
        match self.national(text).await {
            Ok(report) => self.summarize(&report),
            Err(e) => e.to_string(),
        }
    }
}
