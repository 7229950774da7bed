//! Configuration shared by the orchestrator and its connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{OTHER_KEY, TOTAL_GENERATION_KEY};
use crate::region::RegionQuery;

/// Global configuration for the `Mix` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixConfig {
    /// First year for which the upstream source has data.
    pub lower_bound_year: i32,
    /// Regions queried for a national total; the first one is primary.
    pub regions: Vec<RegionQuery>,
    /// Order in which sources are rendered in the reply.
    pub canonical_order: Vec<String>,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Maximum number of days the latest-available-date probe inspects.
    pub probe_max_days: u32,
}

impl MixConfig {
    /// The primary region, if any is configured.
    #[must_use]
    pub fn primary_region(&self) -> Option<&RegionQuery> {
        self.regions.first()
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        let canonical_order = [
            "wind",
            "solar photovoltaic",
            "thermal solar",
            "hydro",
            "nuclear",
            "combined cycle",
            "cogeneration",
            "coal",
            OTHER_KEY,
            TOTAL_GENERATION_KEY,
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            lower_bound_year: 2011,
            regions: RegionQuery::spanish_systems(),
            canonical_order,
            provider_timeout: Duration::from_secs(10),
            probe_max_days: 30,
        }
    }
}
