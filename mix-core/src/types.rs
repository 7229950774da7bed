//! Re-export of foundational types from `mix-types`.
// Consolidated re-exports so downstream crates can depend on `mix-core` only

pub use mix_types::{
    EnergyCatalog, EnergyEntry, Granularity, Magnitude, MixConfig, MixError, OTHER_KEY,
    RegionQuery, TOTAL_GENERATION_KEY,
};
