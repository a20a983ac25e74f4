use std::sync::Arc;

use rust_decimal::Decimal;
use sourcerate::RateCollector;
use sourcerate_mock::MockRateCollector;

use crate::helpers::{EAST, WEST, builder, cart, q, split_six_four};

#[tokio::test]
async fn method_quoted_by_every_source_is_kept_per_package() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection).build().unwrap();

    let res = collector
        .collect_rates(&cart(&[(1, "A", 10)]))
        .await
        .unwrap();

    assert_eq!(res.packages.len(), 2);
    let east = &res.packages[0];
    let west = &res.packages[1];
    assert_eq!(east.source_code.as_deref(), Some(EAST));
    assert_eq!(west.source_code.as_deref(), Some(WEST));
    assert_eq!(east.count, 1);

    let methods = |p: &sourcerate_core::RatePackage| -> Vec<String> {
        p.entries
            .iter()
            .filter_map(|e| e.method().map(str::to_string))
            .collect()
    };
    assert_eq!(methods(east), vec!["flatrate", "bestway"]);
    assert_eq!(methods(west), vec!["flatrate", "bestway"]);

    // Flat rate is priced on the allocated quantity of each source.
    let flat: Vec<Decimal> = res
        .rates()
        .filter(|r| r.method == "flatrate")
        .map(|r| r.price)
        .collect();
    assert_eq!(flat, vec![q(30), q(20)]);
}

#[tokio::test]
async fn sub_requests_ship_from_each_source_with_allocated_quantities() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection).build().unwrap();

    let original = cart(&[(1, "A", 10), (2, "B", 1)]);
    // B has no stock anywhere, so it is allocated nowhere.
    let _ = collector.collect_rates(&original).await.unwrap();

    let seen = inner.requests().await;
    assert_eq!(seen.len(), 2);

    let east = &seen[0];
    assert_eq!(east.selected_source_code.as_deref(), Some(EAST));
    assert_eq!(east.origin.postcode.as_deref(), Some("07001"));
    assert_eq!(east.origin.region_id.as_deref(), Some("NJ"));
    assert_eq!(east.origin.region_code.as_deref(), Some("NJ"));
    assert_eq!(east.origin.city.as_deref(), Some("Avenel"));
    assert_eq!(east.destination, original.destination);
    assert_eq!(east.items.len(), 1);
    assert_eq!(east.items[0].sku, "A");
    assert_eq!(east.items[0].qty, q(6));

    let west = &seen[1];
    assert_eq!(west.selected_source_code.as_deref(), Some(WEST));
    assert_eq!(west.origin.postcode.as_deref(), Some("94607"));
    assert_eq!(west.items[0].qty, q(4));
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection).build().unwrap();

    let req = cart(&[(1, "A", 10)]);
    let first = collector.collect_rates(&req).await.unwrap();
    let second = collector.collect_rates(&req).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(inner.calls().await, 4);
}
