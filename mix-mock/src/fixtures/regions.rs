//! Daily generation per electric system, GWh. Longer windows scale linearly
//! with the number of days they cover.

const PENINSULAR: &[(&str, f64)] = &[
    ("wind", 150.0),
    ("solar photovoltaic", 60.0),
    ("thermal solar", 10.0),
    ("hydro", 80.0),
    ("nuclear", 122.0),
    ("combined cycle", 50.0),
    ("cogeneration", 40.0),
    ("coal", 5.0),
    ("other renewables", 12.0),
];

const CANARIAS: &[(&str, f64)] = &[
    ("wind", 2.0),
    ("solar photovoltaic", 1.0),
    ("combined cycle", 5.0),
    ("steam turbine", 4.0),
    ("diesel engines", 3.0),
];

const BALEARES: &[(&str, f64)] = &[
    ("solar photovoltaic", 0.5),
    ("combined cycle", 3.0),
    ("coal", 2.0),
    ("cogeneration", 0.3),
];

const CEUTA: &[(&str, f64)] = &[("diesel engines", 0.05)];

const MELILLA: &[(&str, f64)] = &[("diesel engines", 0.06), ("solar photovoltaic", 0.001)];

/// Daily source values for a region scope, without the total.
pub fn daily_by_scope(scope: &str) -> Option<&'static [(&'static str, f64)]> {
    match scope {
        "peninsular" => Some(PENINSULAR),
        "canarias" => Some(CANARIAS),
        "baleares" => Some(BALEARES),
        "ceuta" => Some(CEUTA),
        "melilla" => Some(MELILLA),
        _ => None,
    }
}
