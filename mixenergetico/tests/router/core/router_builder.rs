use std::time::Duration;

use mix_core::{MixConfig, MixError};
use mixenergetico::Mix;

use crate::helpers::{MockConnector, date, regions};

#[test]
fn build_requires_a_connector() {
    let err = Mix::builder().build().err().unwrap();
    assert!(matches!(err, MixError::InvalidArg(_)));
}

#[test]
fn build_rejects_empty_regions() {
    let err = Mix::builder()
        .with_connector(MockConnector::builder().build())
        .regions(vec![])
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, MixError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_probe_cap() {
    let err = Mix::builder()
        .with_connector(MockConnector::builder().build())
        .probe_max_days(0)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, MixError::InvalidArg(_)));
}

#[test]
fn defaults_and_overrides() {
    let mix = Mix::builder()
        .with_connector(MockConnector::builder().build())
        .build()
        .unwrap();
    assert_eq!(mix.config(), &MixConfig::default());
    assert_eq!(mix.config().regions, regions());

    let mix = Mix::builder()
        .with_connector(MockConnector::builder().build())
        .lower_bound_year(2015)
        .provider_timeout(Duration::from_secs(2))
        .probe_max_days(7)
        .canonical_order(["nuclear", "total generation"])
        .clock(|| date(2021, 3, 4))
        .build()
        .unwrap();
    assert_eq!(mix.config().lower_bound_year, 2015);
    assert_eq!(mix.config().provider_timeout, Duration::from_secs(2));
    assert_eq!(mix.config().probe_max_days, 7);
    assert_eq!(
        mix.config().canonical_order,
        vec!["nuclear".to_string(), "total generation".to_string()]
    );
    assert_eq!(mix.today(), date(2021, 3, 4));
}
