//! MixEnergetico turns a mention such as `"mix del 8/6/2020"` into a reply
//! describing the electricity generation mix of Spain for that day, month or
//! year.
//!
//! Overview
//! - Finds a date expression in the text (`D/M/YYYY`, `M/YYYY` or `YYYY`) and
//!   resolves it into an inclusive query window.
//! - Without a date, probes the primary region backwards from today for the
//!   latest day with published data.
//! - Queries the five Spanish electric systems one after another through a
//!   `GenerationProvider`, summing values and recomputing percentages.
//! - Renders the national totals in a fixed source order, folding sources the
//!   catalog does not know into a single "other" line.
//!
//! Key behaviors and trade-offs
//! - Regions are queried sequentially with the same window. The first
//!   failing region stops the aggregation: the reply is that error's text,
//!   never a partial national total.
//! - Dates before the configured lower bound, and impossible dates, fail
//!   locally before any query is issued.
//! - Every provider call is bounded by `provider_timeout`; expiry is reported
//!   as `ProviderTimeout`.
//! - The latest-date probe inspects at most `probe_max_days` days and then
//!   fails with `NoRecentData`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use mix_ree::ReeConnector;
//! use mixenergetico::Mix;
//!
//! let mix = Mix::builder()
//!     .with_connector(Arc::new(ReeConnector::new_default()?))
//!     .build()?;
//!
//! let text = mix.reply("@MixEnergetico 6/2020").await;
//! println!("{text}");
//! ```
//!
//! Inspecting the aggregation instead of the rendered text:
//! ```rust,ignore
//! let report = mix.national("2020").await?;
//! if let Some(err) = &report.error {
//!     eprintln!("stopped after {} regions: {err}", report.contributors.len());
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
pub mod summary;

pub use core::{Clock, Mix, MixBuilder};
pub use router::aggregate::NationalReport;

// Re-export core types for convenience
pub use mix_core::{
    AggregatedResult, DateToken, EnergyCatalog, EnergyEntry, GenerationProvider,
    GenerationSnapshot, Granularity, Magnitude, MixConfig, MixError, OTHER_KEY, RegionQuery,
    RequestWindow, SourceValue, TOTAL_GENERATION_KEY, find_date,
};
