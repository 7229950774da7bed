use std::sync::Arc;
use std::time::Duration;

use mix_core::{GenerationProvider, MixError};
use mix_ree::ReeConnector;

/// Load `.env` once; missing files are fine.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Provider timeout from `MIX_PROVIDER_TIMEOUT_SECS`, if set and valid.
#[must_use]
pub fn provider_timeout() -> Option<Duration> {
    std::env::var("MIX_PROVIDER_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Return a connector for demos.
///
/// Uses the fixture mock when `MIX_USE_MOCK` is set, otherwise the REE client,
/// pointed at `MIX_REE_BASE_URL` when provided.
///
/// # Errors
/// Returns `InvalidArg` for an unparsable base URL, or `Transport` if the HTTP
/// client cannot be created.
pub fn get_connector() -> Result<Arc<dyn GenerationProvider>, MixError> {
    load_env();
    if std::env::var("MIX_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(Arc::new(mix_mock::MockConnector::new()));
    }

    let mut builder = ReeConnector::builder();
    if let Ok(url) = std::env::var("MIX_REE_BASE_URL") {
        builder = builder.base_url(url);
    }
    if let Some(timeout) = provider_timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(Arc::new(builder.build()?))
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}
