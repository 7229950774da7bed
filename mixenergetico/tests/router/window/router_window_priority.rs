use mix_core::Granularity;
use mixenergetico::Mix;
use proptest::prelude::*;

use crate::helpers::{MockConnector, date};

fn mix() -> Mix {
    Mix::builder()
        .with_connector(MockConnector::builder().build())
        .build()
        .unwrap()
}

#[tokio::test]
async fn day_pattern_wins_over_month_and_year() {
    let window = mix()
        .resolve_window("2019 no, 6/2020 tampoco, 8/6/2020 sí")
        .await
        .unwrap();
    assert_eq!(window.granularity(), Granularity::Day);
    assert_eq!(window.reference_date(), date(2020, 6, 8));
    assert_eq!(window.label(), "8/6/2020");
}

#[tokio::test]
async fn backslashes_are_read_as_slashes() {
    let window = mix().resolve_window("12\\6\\2020").await.unwrap();
    assert_eq!(window.granularity(), Granularity::Day);
    assert_eq!(window.reference_date(), date(2020, 6, 12));
}

proptest! {
    #[test]
    fn day_window_is_a_single_day(y in 2011i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let text = format!("{}/{m}/{y} y {m}/{y}", d);
        let window = rt.block_on(mix().resolve_window(&text)).unwrap();
        prop_assert_eq!(window.granularity(), Granularity::Day);
        prop_assert_eq!(window.start().date(), window.end().date());
        prop_assert_eq!(window.reference_date(), date(y, m, d));
    }
}
