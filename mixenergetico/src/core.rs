use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use mix_core::{
    EnergyCatalog, GenerationProvider, GenerationSnapshot, MixConfig, MixError, RegionQuery,
    RequestWindow,
};

/// Source of "today" for the latest-available-date probe.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Orchestrator that aggregates the Spanish electric systems into a reply.
pub struct Mix {
    pub(crate) connector: Arc<dyn GenerationProvider>,
    pub(crate) cfg: MixConfig,
    pub(crate) catalog: EnergyCatalog,
    pub(crate) clock: Clock,
}

/// Builder for constructing a `Mix` orchestrator with custom configuration.
pub struct MixBuilder {
    connector: Option<Arc<dyn GenerationProvider>>,
    cfg: MixConfig,
    catalog: EnergyCatalog,
    clock: Option<Clock>,
}

impl Default for MixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's date in peninsular Spain, where the upstream publishes its days.
fn madrid_today() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Europe::Madrid).date_naive()
}

impl MixBuilder {
    /// Create a new builder with the defaults of the bot.
    ///
    /// - No connector; register one via [`MixBuilder::with_connector`].
    /// - The five Spanish systems, peninsular first, lower bound 2011.
    /// - The Spanish catalog and canonical order, 10s provider timeout,
    ///   30-day probe cap, and a clock reading today in Europe/Madrid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: MixConfig::default(),
            catalog: EnergyCatalog::default(),
            clock: None,
        }
    }

    /// Register the generation data connector.
    ///
    /// A second call replaces the first connector.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn GenerationProvider>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: MixConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the regions queried for a national total; the first one is primary.
    #[must_use]
    pub fn regions(mut self, regions: Vec<RegionQuery>) -> Self {
        self.cfg.regions = regions;
        self
    }

    /// Set the order in which sources are rendered.
    #[must_use]
    pub fn canonical_order<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.canonical_order = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the first year for which requests are accepted.
    #[must_use]
    pub const fn lower_bound_year(mut self, year: i32) -> Self {
        self.cfg.lower_bound_year = year;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied to each regional query and to each probe step.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set how many days the latest-available-date probe may inspect.
    #[must_use]
    pub const fn probe_max_days(mut self, days: u32) -> Self {
        self.cfg.probe_max_days = days;
        self
    }

    /// Replace the display catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: EnergyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the clock used by the probe as "today".
    #[must_use]
    pub fn clock<F>(mut self, f: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(f));
        self
    }

    /// Build the `Mix` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered, the region list is
    /// empty, or the probe cap is zero.
    pub fn build(self) -> Result<Mix, MixError> {
        let Some(connector) = self.connector else {
            return Err(MixError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        if self.cfg.regions.is_empty() {
            return Err(MixError::InvalidArg(
                "region list is empty; the first region is the primary one".to_string(),
            ));
        }
        if self.cfg.probe_max_days == 0 {
            return Err(MixError::InvalidArg(
                "probe_max_days must be at least 1".to_string(),
            ));
        }

        Ok(Mix {
            connector,
            cfg: self.cfg,
            catalog: self.catalog,
            clock: self.clock.unwrap_or_else(|| Arc::new(madrid_today)),
        })
    }
}

impl Mix {
    /// Start building a new `Mix` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use mix_mock::MockConnector;
    ///
    /// let mix = mixenergetico::Mix::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .probe_max_days(7)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> MixBuilder {
        MixBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &MixConfig {
        &self.cfg
    }

    /// Display catalog used by [`Mix::summarize`].
    #[must_use]
    pub const fn catalog(&self) -> &EnergyCatalog {
        &self.catalog
    }

    /// Today's date according to the configured clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub(crate) fn primary_region(&self) -> Result<&RegionQuery, MixError> {
        self.cfg
            .primary_region()
            .ok_or_else(|| MixError::InvalidArg("no regions configured".to_string()))
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixenergetico::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, MixError>
    where
        Fut: core::future::Future<Output = Result<T, MixError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(MixError::provider_timeout(connector_name)))
    }

    /// Query one region for one window through the registered connector.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixenergetico::core::fetch_region",
            skip(self, region, window),
            fields(region = %region.scope, date = %window.label()),
        )
    )]
    pub(crate) async fn fetch_region(
        &self,
        region: &RegionQuery,
        window: &RequestWindow,
    ) -> Result<GenerationSnapshot, MixError> {
        let out = Self::provider_call_with_timeout(
            self.connector.name(),
            self.cfg.provider_timeout,
            self.connector.generation(region, window),
        )
        .await;
        #[cfg(feature = "tracing")]
        match &out {
            Ok(snapshot) => tracing::debug!(sources = snapshot.len(), "region ok"),
            Err(e) if e.is_transport() => tracing::warn!(error = %e, "region transport failure"),
            Err(e) => tracing::debug!(error = %e, code = ?e.code(), "region reported error"),
        }
        out
    }
}
