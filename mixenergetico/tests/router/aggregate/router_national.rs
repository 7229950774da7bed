use mix_core::TOTAL_GENERATION_KEY;
use mix_core::aggregate::accumulate;
use mixenergetico::Mix;

use crate::helpers::{MockConnector, regional_snapshot, regions};

#[tokio::test]
async fn all_regions_are_summed_in_list_order() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = Mix::builder().with_connector(mock.clone()).build().unwrap();

    let report = mix.national("@MixEnergetico 6/2020").await.unwrap();

    assert!(!report.is_error());
    assert_eq!(report.contributors, regions());
    assert_eq!(
        mock.scopes(),
        vec!["peninsular", "canarias", "baleares", "ceuta", "melilla"]
    );
    // every region sees the same window
    let calls = mock.calls();
    assert!(calls.iter().all(|c| c.window == report.window));

    let total = report.totals.total();
    assert!((total.value - 371.0).abs() < 1e-9);
    assert!((total.percentage - 100.0).abs() < 1e-12);

    let wind = report.totals.get("wind").unwrap();
    assert!((wind.value - 152.0).abs() < 1e-9);
    assert!((wind.percentage - 100.0 * 152.0 / 371.0).abs() < 1e-9);

    // islands without nuclear leave the peninsular value untouched
    let nuclear = report.totals.get("nuclear").unwrap();
    assert!((nuclear.value - 120.0).abs() < 1e-9);
    assert!((nuclear.percentage - 100.0 * 120.0 / 371.0).abs() < 1e-9);

    let diesel = report.totals.get("diesel engines").unwrap();
    assert!((diesel.value - 4.0).abs() < 1e-9);
    assert!(report.totals.get(TOTAL_GENERATION_KEY).is_some());
}

#[tokio::test]
async fn result_matches_plain_left_to_right_accumulation() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = Mix::builder().with_connector(mock).build().unwrap();

    let report = mix.national("2019").await.unwrap();
    let expected = accumulate(regions().iter().map(|r| regional_snapshot(&r.scope))).unwrap();

    assert_eq!(report.totals, expected);
}

#[tokio::test]
async fn configured_region_subset_is_respected() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = Mix::builder()
        .with_connector(mock.clone())
        .regions(regions().into_iter().take(2).collect())
        .build()
        .unwrap();

    let report = mix.national("8/6/2020").await.unwrap();

    assert_eq!(mock.scopes(), vec!["peninsular", "canarias"]);
    assert!((report.totals.total().value - 365.0).abs() < 1e-9);
}
