use std::sync::Arc;

use sourcerate::RateCollector;
use sourcerate_mock::{MockRateCollector, MockSourceSelection, fixtures};

use crate::helpers::{EAST, WEST, builder, cart, q};

fn disjoint() -> MockSourceSelection {
    MockSourceSelection::new()
        .stock(EAST, "A", q(5))
        .stock(WEST, "B", q(5))
}

#[tokio::test]
async fn each_group_keeps_its_own_price() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(disjoint());
    let collector = builder(&inner, &selection).build().unwrap();

    let res = collector
        .collect_rates(&cart(&[(1, "A", 1), (2, "B", 2)]))
        .await
        .unwrap();

    assert_eq!(res.packages.len(), 2);
    let flat: Vec<_> = res
        .packages
        .iter()
        .map(|p| {
            p.entries
                .iter()
                .find(|e| e.method() == Some("flatrate"))
                .map(|e| match e {
                    sourcerate_core::RateEntry::Rate(r) => r.price,
                    sourcerate_core::RateEntry::Error(_) => unreachable!(),
                })
        })
        .collect();
    assert_eq!(flat, vec![Some(q(5)), Some(q(10))]);

    let seen = inner.requests().await;
    assert_eq!(seen[0].items.len(), 1);
    assert_eq!(seen[0].items[0].sku, "A");
    assert_eq!(seen[1].items.len(), 1);
    assert_eq!(seen[1].items[0].sku, "B");
}

#[tokio::test]
async fn method_missing_on_one_group_is_dropped_everywhere() {
    let inner = Arc::new(
        MockRateCollector::new()
            .quote_for(WEST, vec![fixtures::rates::flatrate(&cart(&[(2, "B", 2)]))]),
    );
    let selection = Arc::new(disjoint());
    let collector = builder(&inner, &selection).build().unwrap();

    let res = collector
        .collect_rates(&cart(&[(1, "A", 1), (2, "B", 2)]))
        .await
        .unwrap();

    let methods: Vec<_> = res.rates().map(|r| r.method.as_str()).collect();
    assert_eq!(methods, vec!["flatrate", "flatrate"]);
}
