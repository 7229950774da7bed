//! mix-core
//!
//! Core types and rules shared across the MixEnergetico workspace.
//!
//! - `parse`: extracts a date token and its granularity from mention text.
//! - `window`: resolves a token into an inclusive query window.
//! - `snapshot`: one region's generation mix for one window.
//! - `aggregate`: the left-to-right regional accumulation rule.
//! - `connector`: the `GenerationProvider` trait implemented by data sources.
#![warn(missing_docs)]

/// Accumulation of regional snapshots into a national result.
pub mod aggregate;
/// Connector trait for generation data sources.
pub mod connector;
/// Date expression parsing.
pub mod parse;
/// Regional generation snapshots.
pub mod snapshot;
pub mod types;
/// Time window resolution.
pub mod window;

pub use aggregate::AggregatedResult;
pub use connector::GenerationProvider;
pub use parse::{DateToken, find_date};
pub use snapshot::{GenerationSnapshot, SourceValue};
pub use types::*;
pub use window::RequestWindow;
