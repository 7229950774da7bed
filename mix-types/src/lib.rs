//! MixEnergetico-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod granularity;
mod region;

pub use catalog::{EnergyCatalog, EnergyEntry, Magnitude, OTHER_KEY, TOTAL_GENERATION_KEY};
pub use config::MixConfig;
pub use error::MixError;
pub use granularity::Granularity;
pub use region::RegionQuery;
