
pub use mock_connector::{Call, MockConnector};

use mix_core::{GenerationSnapshot, RegionQuery, TOTAL_GENERATION_KEY};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Construct a `NaiveDate` without unwrap noise in tests.
pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("invalid date")
}

/// The five Spanish systems, peninsular first.
pub fn regions() -> Vec<RegionQuery> {
    RegionQuery::spanish_systems()
}

/// Build a snapshot from `(key, GWh)` pairs; the total and percentages are derived.
pub fn snapshot(rows: &[(&str, f64)]) -> GenerationSnapshot {
    let total: f64 = rows.iter().map(|(_, v)| v).sum();
    GenerationSnapshot::from_rows(
        rows.iter()
            .map(|&(k, v)| (k, v, 100.0 * v / total))
            .chain(std::iter::once((TOTAL_GENERATION_KEY, total, 100.0))),
    )
    .expect("snapshot with total")
}

/// Snapshot per region scope used by the happy-path tests.
pub fn regional_snapshot(scope: &str) -> GenerationSnapshot {
    match scope {
        "peninsular" => snapshot(&[
            ("wind", 150.0),
            ("nuclear", 120.0),
            ("hydro", 80.0),
            ("other renewables", 10.0),
        ]),
        "canarias" => snapshot(&[("wind", 2.0), ("diesel engines", 3.0)]),
        "baleares" => snapshot(&[("coal", 2.0), ("combined cycle", 3.0)]),
        "ceuta" => snapshot(&[("diesel engines", 0.5)]),
        "melilla" => snapshot(&[("diesel engines", 0.5)]),
        other => panic!("unexpected scope {other}"),
    }
}
