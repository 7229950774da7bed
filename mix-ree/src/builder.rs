use std::sync::Arc;
use std::time::Duration;

use mix_core::MixError;

use crate::adapter::{RealAdapter, ReeHttp};
use crate::{ReeConfig, ReeConnector};

/// Builder for a `ReeConnector`.
pub struct ReeConnectorBuilder {
    cfg: ReeConfig,
    http: Option<Arc<dyn ReeHttp>>,
}

impl Default for ReeConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReeConnectorBuilder {
    /// A builder with the default REE endpoint and a 10 s timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: ReeConfig::default(),
            http: None,
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ReeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the endpoint (e.g. a mock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Override the `geo_trunc` discriminator.
    #[must_use]
    pub fn geo_trunc(mut self, geo_trunc: impl Into<String>) -> Self {
        self.cfg.geo_trunc = geo_trunc.into();
        self
    }

    /// Override the upstream "no data" error code.
    #[must_use]
    pub const fn no_data_code(mut self, code: i64) -> Self {
        self.cfg.no_data_code = code;
        self
    }

    /// Set the HTTP request timeout. Ignored when an adapter is injected.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Use an existing `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(Arc::new(RealAdapter::new(http)));
        self
    }

    /// Inject a custom HTTP adapter.
    #[must_use]
    pub fn adapter(mut self, http: Arc<dyn ReeHttp>) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// `InvalidArg` for an unparsable base URL, `Transport` if the default HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<ReeConnector, MixError> {
        let http = match self.http {
            Some(h) => h,
            None => Arc::new(RealAdapter::with_timeout(self.cfg.timeout)?),
        };
        ReeConnector::from_adapter(http, self.cfg)
    }
}
