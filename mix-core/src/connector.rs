use async_trait::async_trait;

use crate::snapshot::GenerationSnapshot;
use crate::window::RequestWindow;
use crate::{MixError, RegionQuery};

/// A source of generation-structure data for one region and window.
///
/// Implementations classify upstream responses into the `MixError` taxonomy
/// instead of returning opaque failures: "no data for this window" is
/// `NoDataForWindow`, other upstream errors are `Upstream`, and network or
/// decoding problems are `Transport`.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Stable connector name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Human-readable vendor name.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the generation mix of `region` for `window`.
    async fn generation(
        &self,
        region: &RegionQuery,
        window: &RequestWindow,
    ) -> Result<GenerationSnapshot, MixError>;
}
