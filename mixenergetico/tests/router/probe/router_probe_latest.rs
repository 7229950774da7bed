use mix_core::{Granularity, MixError};
use mixenergetico::Mix;

use crate::helpers::{MockConnector, date, regional_snapshot};

#[tokio::test]
async fn no_date_uses_latest_day_with_data() {
    // no data for the three most recent days
    let latest = date(2020, 6, 7);
    let mock = MockConnector::builder()
        .with_generation_fn(move |region, window| {
            if window.end().date() > latest {
                Err(MixError::no_data(window.label(), 502))
            } else {
                Ok(regional_snapshot(&region.scope))
            }
        })
        .build();
    let mix = Mix::builder()
        .with_connector(mock.clone())
        .clock(|| date(2020, 6, 10))
        .build()
        .unwrap();

    let report = mix.national("@MixEnergetico hola").await.unwrap();

    assert!(!report.is_error());
    assert_eq!(report.window.reference_date(), latest);
    assert_eq!(report.window.granularity(), Granularity::Day);
    assert_eq!(report.window.raw_token(), None);
    assert_eq!(report.label(), "07/06/2020");

    let calls = mock.calls();
    let probed: Vec<_> = calls[..4]
        .iter()
        .map(|c| c.window.reference_date())
        .collect();
    assert_eq!(
        probed,
        vec![
            date(2020, 6, 10),
            date(2020, 6, 9),
            date(2020, 6, 8),
            date(2020, 6, 7)
        ]
    );
    assert!(calls[..4].iter().all(|c| c.scope == "peninsular"));
    assert_eq!(calls.len(), 4 + 5);

    let text = mix.summarize(&report);
    assert!(text.starts_with("Generación del 07/06/2020 en 🇪🇸\n\n"));
}

#[tokio::test]
async fn probe_stops_on_other_upstream_error() {
    let mock = MockConnector::builder()
        .with_generation_fn(|_, _| Err(MixError::upstream(429, "Too many requests")))
        .build();
    let mix = Mix::builder()
        .with_connector(mock.clone())
        .clock(|| date(2020, 6, 10))
        .build()
        .unwrap();

    let window = mix.latest_available_date().await.unwrap();
    assert_eq!(window.reference_date(), date(2020, 6, 10));
    assert_eq!(mock.calls().len(), 1);

    assert_eq!(mix.reply("sin fecha").await, "Too many requests");
}

#[tokio::test]
async fn probe_below_lower_bound_is_out_of_range() {
    let mock = MockConnector::builder()
        .with_generation_fn(|_, window| Err(MixError::no_data(window.label(), 502)))
        .build();
    let mix = Mix::builder()
        .with_connector(mock.clone())
        .clock(|| date(2011, 1, 2))
        .build()
        .unwrap();

    let err = mix.latest_available_date().await.unwrap_err();

    assert_eq!(err, MixError::date_out_of_range(2010, 2011));
    assert_eq!(err.code(), Some(-1));
    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn no_data_cutoff_on_scripted_connector() {
    use mix_core::RegionQuery;
    use mix_mock::{DynamicMockConnector, MockBehavior, MockConnector as FixtureConnector};

    let (connector, controller) = DynamicMockConnector::new_with_controller("scripted");
    for region in RegionQuery::spanish_systems() {
        let snapshot = FixtureConnector::fixture(&region.scope, 1).unwrap();
        controller
            .set_region_behavior(&region.scope, MockBehavior::Return(snapshot))
            .await;
    }
    controller.set_no_data_after(date(2020, 6, 7)).await;

    let mix = Mix::builder()
        .with_connector(connector)
        .clock(|| date(2020, 6, 10))
        .build()
        .unwrap();

    let report = mix.national("@MixEnergetico").await.unwrap();

    assert!(!report.is_error());
    assert_eq!(report.label(), "07/06/2020");
    assert_eq!(report.contributors.len(), 5);

    let calls = controller.calls().await;
    assert_eq!(calls.len(), 4 + 5);
    assert!(calls[..4].iter().all(|(region, _)| region.scope == "peninsular"));
    assert_eq!(calls[3].1.reference_date(), date(2020, 6, 7));
    assert!(calls[4..].iter().all(|(_, window)| window == &report.window));
}
