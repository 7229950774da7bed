use std::time::Duration;

use mix_core::{MixError, RegionQuery};
use mix_mock::{DynamicMockConnector, MockBehavior, MockConnector};
use mixenergetico::Mix;

use crate::helpers::{MockConnector as ClosureConnector, regional_snapshot};

#[tokio::test]
async fn slow_provider_times_out() {
    let mock = ClosureConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(500))
        .with_generation_fn(|region, _| Ok(regional_snapshot(&region.scope)))
        .build();
    let mix = Mix::builder()
        .with_connector(mock.clone())
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = mix.national("2020").await.unwrap();

    assert_eq!(
        report.error,
        Some(MixError::ProviderTimeout {
            connector: "slow".to_string()
        })
    );
    assert!(report.contributors.is_empty());
    assert_eq!(mock.scopes(), vec!["peninsular"]);
    assert_eq!(mix.summarize(&report), "slow timed out");
}

#[tokio::test]
async fn hanging_region_times_out_and_stops_aggregation() {
    let (connector, controller) = DynamicMockConnector::new_with_controller("hanging");
    for region in RegionQuery::spanish_systems() {
        let behavior = if region.scope == "ceuta" {
            MockBehavior::Hang
        } else {
            MockBehavior::Return(MockConnector::fixture(&region.scope, 1).unwrap())
        };
        controller.set_region_behavior(&region.scope, behavior).await;
    }
    let mix = Mix::builder()
        .with_connector(connector)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = mix.national("8/6/2020").await.unwrap();

    assert_eq!(
        report.error,
        Some(MixError::provider_timeout("hanging"))
    );
    assert!(report.error.as_ref().is_some_and(MixError::is_transport));
    let scopes: Vec<_> = report.contributors.iter().map(|r| r.scope.as_str()).collect();
    assert_eq!(scopes, vec!["peninsular", "canarias", "baleares"]);
    // melilla is never queried once ceuta hangs
    assert_eq!(controller.calls().await.len(), 4);
    assert_eq!(mix.summarize(&report), "hanging timed out");
}
