//! Reply rendering for aggregated results.
//!
//! Source keys are resolved against the catalog once, into [`SourceClass`],
//! and uncatalogued ones are folded into the `other` bucket before any line is
//! written. Lines then follow the canonical order, skipping keys with no data.

use std::collections::BTreeMap;
use std::fmt::Write;

use mix_core::{AggregatedResult, EnergyCatalog, EnergyEntry, Magnitude, OTHER_KEY, SourceValue};

use crate::{Mix, NationalReport};

/// How a source key is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceClass<'a> {
    /// The key has its own catalog entry.
    Known(&'a str),
    /// The key is folded into the `other` bucket.
    Other,
}

/// Resolve a source key against the catalog.
#[must_use]
pub fn classify<'a>(catalog: &EnergyCatalog, key: &'a str) -> SourceClass<'a> {
    if catalog.contains(key) {
        SourceClass::Known(key)
    } else {
        SourceClass::Other
    }
}

/// Fold the totals into catalogued keys plus an `other` entry.
///
/// `other` is always present; its value and percentage are the sums over all
/// uncatalogued sources (zero when there are none).
#[must_use]
pub fn fold(totals: &AggregatedResult, catalog: &EnergyCatalog) -> BTreeMap<String, SourceValue> {
    let mut other = SourceValue::default();
    let mut out = BTreeMap::new();
    for (key, sv) in totals.iter() {
        match classify(catalog, key) {
            SourceClass::Known(k) => {
                out.insert(k.to_string(), *sv);
            }
            SourceClass::Other => {
                other.value += sv.value;
                other.percentage += sv.percentage;
            }
        }
    }
    out.insert(OTHER_KEY.to_string(), other);
    out
}

/// Render the reply for a successful aggregation.
#[must_use]
pub fn render_totals(
    label: &str,
    totals: &AggregatedResult,
    catalog: &EnergyCatalog,
    canonical_order: &[String],
) -> String {
    let folded = fold(totals, catalog);
    let mut out = format!("Generación del {label} en {}\n\n", catalog.header_glyph);

    for key in canonical_order {
        let Some(sv) = folded.get(key) else {
            continue;
        };
        let Some(entry) = entry_for(catalog, key) else {
            continue;
        };
        let figure = match entry.magnitude {
            Magnitude::Value => sv.value,
            Magnitude::Percentage => sv.percentage,
        };
        let _ = writeln!(
            out,
            "{} {}: {figure:.1}{}",
            entry.glyph, entry.description, entry.units
        );
    }
    out
}

fn entry_for<'c>(catalog: &'c EnergyCatalog, key: &str) -> Option<&'c EnergyEntry> {
    if key == OTHER_KEY {
        Some(&catalog.other)
    } else {
        catalog.get(key)
    }
}

/// Render a report: its error description verbatim, or the totals table.
#[must_use]
pub fn render(report: &NationalReport, catalog: &EnergyCatalog, canonical_order: &[String]) -> String {
    match &report.error {
        Some(e) => e.to_string(),
        None => render_totals(report.label(), &report.totals, catalog, canonical_order),
    }
}

impl Mix {
    /// Render a report with this orchestrator's catalog and canonical order.
    #[must_use]
    pub fn summarize(&self, report: &NationalReport) -> String {
        render(report, &self.catalog, &self.cfg.canonical_order)
    }
}
