use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mix_core::MixError;
use url::Url;

/// HTTP abstraction (so we can inject canned bodies in tests).
#[async_trait]
pub trait ReeHttp: Send + Sync {
    /// Issue a GET for `url` and return the response body as text.
    ///
    /// Any status code is accepted: the REE API reports its own errors in the
    /// JSON body. Only network-level failures are errors here.
    async fn get_text(&self, url: &Url) -> Result<String, MixError>;
}

/// Real adapter backed by a shared `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
}

impl RealAdapter {
    /// Build a client with a request timeout.
    ///
    /// # Errors
    /// Returns `Transport` if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, MixError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mixenergetico/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MixError::transport(crate::ReeConnector::NAME, e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReeHttp for RealAdapter {
    async fn get_text(&self, url: &Url) -> Result<String, MixError> {
        let to_err = |e: reqwest::Error| {
            if e.is_timeout() {
                MixError::provider_timeout(crate::ReeConnector::NAME)
            } else {
                MixError::transport(crate::ReeConnector::NAME, e.to_string())
            }
        };
        let resp = self.http.get(url.clone()).send().await.map_err(to_err)?;
        resp.text().await.map_err(to_err)
    }
}

impl dyn ReeHttp {
    /// Test helper that builds a `ReeHttp` from a closure taking the full
    /// request URL and returning the body text.
    pub fn from_fn<F>(f: F) -> Arc<dyn ReeHttp>
    where
        F: Send + Sync + 'static + Fn(&Url) -> Result<String, MixError>,
    {
        struct FnHttp<F>(F);

        #[async_trait]
        impl<F> ReeHttp for FnHttp<F>
        where
            F: Send + Sync + 'static + Fn(&Url) -> Result<String, MixError>,
        {
            async fn get_text(&self, url: &Url) -> Result<String, MixError> {
                (self.0)(url)
            }
        }

        Arc::new(FnHttp(f))
    }
}
