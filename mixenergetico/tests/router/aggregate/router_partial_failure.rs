use mix_core::MixError;
use mixenergetico::Mix;

use crate::helpers::{MockConnector, regional_snapshot, regions};

#[tokio::test]
async fn third_region_error_stops_and_is_the_reply() {
    let mock = MockConnector::builder()
        .with_generation_fn(|region, _| {
            if region.scope == "baleares" {
                Err(MixError::upstream(500, "Servicio temporalmente no disponible"))
            } else {
                Ok(regional_snapshot(&region.scope))
            }
        })
        .build();
    let mix = Mix::builder().with_connector(mock.clone()).build().unwrap();

    let report = mix.national("6/2020").await.unwrap();

    assert!(report.is_error());
    assert_eq!(
        report.error,
        Some(MixError::upstream(500, "Servicio temporalmente no disponible"))
    );
    assert_eq!(report.contributors, regions()[..2].to_vec());
    // later regions are never queried
    assert_eq!(mock.scopes(), vec!["peninsular", "canarias", "baleares"]);

    assert_eq!(
        mix.summarize(&report),
        "Servicio temporalmente no disponible"
    );
}

#[tokio::test]
async fn primary_no_data_is_reported_with_requested_date() {
    let mock = MockConnector::builder()
        .with_generation_fn(|_, window| Err(MixError::no_data(window.label(), 502)))
        .build();
    let mix = Mix::builder().with_connector(mock.clone()).build().unwrap();

    let text = mix.reply("datos de 6/2020 por favor").await;

    assert_eq!(text, "No existen datos para 6/2020");
    assert_eq!(mock.scopes(), vec!["peninsular"]);
}

#[tokio::test]
async fn transport_error_on_last_region_is_not_a_zero_contribution() {
    let mock = MockConnector::builder()
        .name("flaky")
        .with_generation_fn(|region, _| {
            if region.scope == "melilla" {
                Err(MixError::transport("flaky", "connection reset"))
            } else {
                Ok(regional_snapshot(&region.scope))
            }
        })
        .build();
    let mix = Mix::builder().with_connector(mock).build().unwrap();

    let report = mix.national("2020").await.unwrap();

    assert_eq!(report.contributors.len(), 4);
    assert!(report.error.as_ref().is_some_and(MixError::is_transport));
    assert_eq!(mix.summarize(&report), "flaky failed: connection reset");
}
