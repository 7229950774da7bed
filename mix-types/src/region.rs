//! Geographic regions queried to build the national total.

use serde::{Deserialize, Serialize};

/// A `(scope, id)` pair identifying one electric system upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionQuery {
    /// Geographic scope sent as `geo_limit` (e.g. "peninsular").
    pub scope: String,
    /// Region identifier sent as `geo_ids`.
    pub id: u32,
}

impl RegionQuery {
    /// Construct a region query.
    pub fn new(scope: impl Into<String>, id: u32) -> Self {
        Self {
            scope: scope.into(),
            id,
        }
    }

    /// The five Spanish electric systems, primary (peninsular) first.
    #[must_use]
    pub fn spanish_systems() -> Vec<Self> {
        vec![
            Self::new("peninsular", 8741),
            Self::new("canarias", 8742),
            Self::new("baleares", 8743),
            Self::new("ceuta", 8744),
            Self::new("melilla", 8745),
        ]
    }
}
