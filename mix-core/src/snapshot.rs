use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{MixError, TOTAL_GENERATION_KEY};

/// Energy and share of one generation source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceValue {
    /// Energy in GWh.
    pub value: f64,
    /// Share of total generation, 0-100.
    pub percentage: f64,
}

impl SourceValue {
    /// Construct a source value.
    #[must_use]
    pub const fn new(value: f64, percentage: f64) -> Self {
        Self { value, percentage }
    }
}

/// Successful result of querying one region for one window.
///
/// Always contains a `total generation` entry; other percentages are relative
/// to it as returned by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    sources: BTreeMap<String, SourceValue>,
}

impl GenerationSnapshot {
    /// Build a snapshot, checking that `total generation` is present.
    ///
    /// # Errors
    /// Returns `Data` if the total generation entry is missing.
    pub fn new(sources: BTreeMap<String, SourceValue>) -> Result<Self, MixError> {
        if !sources.contains_key(TOTAL_GENERATION_KEY) {
            return Err(MixError::Data(format!(
                "snapshot has no '{TOTAL_GENERATION_KEY}' entry"
            )));
        }
        Ok(Self { sources })
    }

    /// Build a snapshot from `(key, value GWh, percentage)` rows.
    ///
    /// # Errors
    /// Returns `Data` if the total generation entry is missing.
    pub fn from_rows<I, K>(rows: I) -> Result<Self, MixError>
    where
        I: IntoIterator<Item = (K, f64, f64)>,
        K: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|(k, v, p)| (k.into(), SourceValue::new(v, p)))
                .collect(),
        )
    }

    /// Value for a source key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SourceValue> {
        self.sources.get(key)
    }

    /// Total generation entry.
    #[must_use]
    pub fn total(&self) -> SourceValue {
        self.sources
            .get(TOTAL_GENERATION_KEY)
            .copied()
            .unwrap_or_default()
    }

    /// Iterate sources in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceValue)> {
        self.sources.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sources reported.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false for a valid snapshot; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Consume into the underlying map.
    #[must_use]
    pub fn into_sources(self) -> BTreeMap<String, SourceValue> {
        self.sources
    }
}
