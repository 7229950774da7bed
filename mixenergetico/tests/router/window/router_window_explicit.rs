use mix_core::{Granularity, MixError};
use mixenergetico::Mix;

use crate::helpers::{MockConnector, regional_snapshot};

fn mix_with(mock: std::sync::Arc<MockConnector>) -> Mix {
    Mix::builder().with_connector(mock).build().unwrap()
}

#[tokio::test]
async fn month_window_covers_thirty_days() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = mix_with(mock.clone());

    let window = mix.resolve_window("6/2020").await.unwrap();
    assert_eq!(window.granularity(), Granularity::Month);
    assert_eq!(window.start_param(), "2020-06-01T00:00");
    assert_eq!(window.end_param(), "2020-06-30T23:59");
    assert_eq!(window.raw_token(), Some("6/2020"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn year_window_ends_on_december_31() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = mix_with(mock.clone());

    mix.national("2020").await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 5);
    let w = &calls[0].window;
    assert_eq!(w.granularity(), Granularity::Year);
    assert_eq!(w.start_param(), "2020-01-01T00:00");
    assert_eq!(w.end_param(), "2020-12-31T23:59");
}

#[tokio::test]
async fn year_before_lower_bound_fails_before_any_query() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = mix_with(mock.clone());

    let err = mix.national("en 2010").await.unwrap_err();

    assert_eq!(err, MixError::date_out_of_range(2010, 2011));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn impossible_date_fails_before_any_query() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = mix_with(mock.clone());

    let err = mix.national("29/2/2021").await.unwrap_err();

    assert!(matches!(err, MixError::InvalidDate { .. }));
    assert!(mock.calls().is_empty());
}
