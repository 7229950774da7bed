use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TOTAL_GENERATION_KEY;
use crate::snapshot::{GenerationSnapshot, SourceValue};

/// National result accumulated from regional snapshots.
///
/// Created from the primary region's snapshot (percentages as reported
/// upstream), then combined region by region with [`AggregatedResult::absorb`].
/// Values are summed; percentages are never summed but recomputed from the
/// accumulated total after each step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregatedResult {
    sources: BTreeMap<String, SourceValue>,
}

impl AggregatedResult {
    /// Start an accumulation from the primary region's snapshot.
    #[must_use]
    pub fn from_primary(snapshot: GenerationSnapshot) -> Self {
        Self {
            sources: snapshot.into_sources(),
        }
    }

    /// Combine one more region into the accumulator.
    ///
    /// - Sources new to the accumulator start at zero.
    /// - Values of sources the region reports are added; sources it does not
    ///   report are left unchanged.
    /// - Every percentage is recomputed as `100 * value / total`, using the
    ///   accumulator's total generation after this step.
    pub fn absorb(&mut self, other: &GenerationSnapshot) {
        for (key, sv) in other.iter() {
            self.sources.entry(key.to_string()).or_default().value += sv.value;
        }
        self.recompute_percentages();
    }

    fn recompute_percentages(&mut self) {
        let total = self
            .sources
            .get(TOTAL_GENERATION_KEY)
            .map_or(0.0, |t| t.value);
        for sv in self.sources.values_mut() {
            sv.percentage = if total == 0.0 {
                0.0
            } else {
                100.0 * sv.value / total
            };
        }
    }

    /// Value for a source key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SourceValue> {
        self.sources.get(key)
    }

    /// Total generation entry, zero if nothing was accumulated.
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

    /// True if no region has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl From<GenerationSnapshot> for AggregatedResult {
    fn from(snapshot: GenerationSnapshot) -> Self {
        Self::from_primary(snapshot)
    }
}

/// Accumulate snapshots left to right, the first one acting as primary.
///
/// Returns `None` for an empty input.
pub fn accumulate<I>(snapshots: I) -> Option<AggregatedResult>
where
    I: IntoIterator<Item = GenerationSnapshot>,
{
    let mut it = snapshots.into_iter();
    let mut acc = AggregatedResult::from_primary(it.next()?);
    for s in it {
        acc.absorb(&s);
    }
    Some(acc)
}
