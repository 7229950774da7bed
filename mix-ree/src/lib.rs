//! mix-ree
//!
//! Public connector that implements `GenerationProvider` on top of the REE
//! (Red Eléctrica) open data API, endpoint `generacion/estructura-generacion`.
//! Responses are classified into snapshots, "no data for this window", other
//! upstream errors, and transport failures.
#![warn(missing_docs)]

/// HTTP adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
mod wire;

use std::sync::Arc;
use std::time::Duration;

use adapter::ReeHttp;
use async_trait::async_trait;
use mix_core::{GenerationProvider, GenerationSnapshot, MixError, RegionQuery, RequestWindow};
use serde::{Deserialize, Serialize};
use url::Url;

pub use builder::ReeConnectorBuilder;

/// Default endpoint of the generation-structure dataset.
pub const DEFAULT_BASE_URL: &str =
    "https://apidatos.ree.es/en/datos/generacion/estructura-generacion";

/// Connector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReeConfig {
    /// Endpoint URL without query string.
    pub base_url: String,
    /// Fixed scope discriminator sent as `geo_trunc`.
    pub geo_trunc: String,
    /// Upstream error code meaning "no data for this window".
    pub no_data_code: i64,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for ReeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            geo_trunc: "electric_system".to_string(),
            no_data_code: 502,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Public connector type. Production users will construct with `ReeConnector::new_default()`.
pub struct ReeConnector {
    http: Arc<dyn ReeHttp>,
    base_url: Url,
    cfg: ReeConfig,
}

impl ReeConnector {
    /// Static connector name used in errors and logs.
    pub const NAME: &'static str = "mix-ree";

    /// Build with the default configuration and a fresh `reqwest` client.
    ///
    /// # Errors
    /// Returns `Transport` if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, MixError> {
        Self::builder().build()
    }

    /// Start building a connector with custom configuration.
    #[must_use]
    pub fn builder() -> ReeConnectorBuilder {
        ReeConnectorBuilder::new()
    }

    /// Build from an injected adapter (tests, custom transports).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `cfg.base_url` is not a valid URL.
    pub fn from_adapter(http: Arc<dyn ReeHttp>, cfg: ReeConfig) -> Result<Self, MixError> {
        let base_url = Url::parse(&cfg.base_url)
            .map_err(|e| MixError::InvalidArg(format!("base_url '{}': {e}", cfg.base_url)))?;
        Ok(Self {
            http,
            base_url,
            cfg,
        })
    }

    /// Connector configuration.
    #[must_use]
    pub const fn config(&self) -> &ReeConfig {
        &self.cfg
    }

    /// The full query URL for one region and window.
    #[must_use]
    pub fn query_url(&self, region: &RegionQuery, window: &RequestWindow) -> Url {
        wire::query_url(&self.base_url, &self.cfg.geo_trunc, region, window)
    }
}

#[async_trait]
impl GenerationProvider for ReeConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Red Eléctrica"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "mix::ree",
            skip(self, region, window),
            fields(
                region = %region.scope,
                start = %window.start_param(),
                end = %window.end_param(),
                trunc = %window.granularity(),
            ),
        )
    )]
    async fn generation(
        &self,
        region: &RegionQuery,
        window: &RequestWindow,
    ) -> Result<GenerationSnapshot, MixError> {
        let url = self.query_url(region, window);
        let result = match self.http.get_text(&url).await {
            Ok(body) => wire::classify(&body, window, self.cfg.no_data_code),
            Err(e) => Err(e),
        };

        #[cfg(feature = "tracing")]
        match &result {
            Ok(s) => tracing::debug!(sources = s.len(), "generation snapshot"),
            Err(e) if e.is_transport() => tracing::warn!(error = %e, %url, "transport failure"),
            Err(e) => tracing::debug!(error = %e, code = ?e.code(), "upstream reported error"),
        }

        result
    }
}
