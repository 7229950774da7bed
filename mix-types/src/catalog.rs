//! Display catalog for energy sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Source key carrying the total generation of a snapshot.
pub const TOTAL_GENERATION_KEY: &str = "total generation";

/// Synthetic key under which uncatalogued sources are folded.
pub const OTHER_KEY: &str = "other";

/// Which figure of a source is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    /// Absolute energy in GWh.
    Value,
    /// Share of total generation, 0-100.
    Percentage,
}

/// Display metadata for one energy source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyEntry {
    /// Localized description.
    pub description: String,
    /// Figure shown for this source.
    pub magnitude: Magnitude,
    /// Units suffix appended after the number (e.g. "%" or " GWh").
    pub units: String,
    /// Emoji glyph prefixed to the line.
    pub glyph: String,
}

impl EnergyEntry {
    fn new(description: &str, magnitude: Magnitude, units: &str, glyph: &str) -> Self {
        Self {
            description: description.to_string(),
            magnitude,
            units: units.to_string(),
            glyph: glyph.to_string(),
        }
    }

    fn share(description: &str, glyph: &str) -> Self {
        Self::new(description, Magnitude::Percentage, "%", glyph)
    }
}

/// Immutable lookup table from source key to display metadata.
///
/// Keys absent from `entries` are folded into the `other` entry by summing
/// their percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCatalog {
    /// Known sources by lower-case upstream key.
    pub entries: BTreeMap<String, EnergyEntry>,
    /// Entry used for the folded bucket of uncatalogued sources.
    pub other: EnergyEntry,
    /// Glyph shown in the reply header next to the date.
    pub header_glyph: String,
}

impl EnergyCatalog {
    /// Look up a catalogued source.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnergyEntry> {
        self.entries.get(key)
    }

    /// True if `key` has its own catalog entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The Spanish catalog used by the bot.
    #[must_use]
    pub fn spanish() -> Self {
        let entries = [
            ("wind", EnergyEntry::share("Eólica", "🟢")),
            ("solar photovoltaic", EnergyEntry::share("Solar fotovoltaica", "🟡")),
            ("thermal solar", EnergyEntry::share("Solar térmica", "🟤")),
            ("hydro", EnergyEntry::share("Hidráulica", "🔵")),
            ("nuclear", EnergyEntry::share("Nuclear", "🟠")),
            ("combined cycle", EnergyEntry::share("Ciclo combinado", "🔴")),
            ("cogeneration", EnergyEntry::share("Cogeneración", "🟣")),
            ("coal", EnergyEntry::share("Carbón", "⚫")),
            (
                TOTAL_GENERATION_KEY,
                EnergyEntry::new("Total", Magnitude::Value, " GWh", "⚡"),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            entries,
            other: EnergyEntry::share("Otras", "⚪"),
            header_glyph: "🇪🇸".to_string(),
        }
    }
}

impl Default for EnergyCatalog {
    fn default() -> Self {
        Self::spanish()
    }
}
