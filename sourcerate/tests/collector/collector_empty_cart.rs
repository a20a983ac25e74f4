use std::sync::Arc;

use sourcerate::RateCollector;
use sourcerate_core::CartItem;
use sourcerate_mock::{MockBehavior, MockRateCollector, MockSourceSelection};

use crate::helpers::{builder, cart, q, split_six_four};

#[tokio::test]
async fn nothing_to_ship_returns_empty_result() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection).build().unwrap();

    let req = cart(&[])
        .with_item(CartItem::new(1, "GIFT", q(1)).virtual_product())
        .with_item(CartItem::new(2, "A", q(2)).with_parent(9));
    let res = collector.collect_rates(&req).await.unwrap();

    assert!(res.packages.is_empty());
    assert!(selection.calls().await.is_empty());
    assert_eq!(inner.calls().await, 0);
}

#[tokio::test]
async fn zero_quantity_allocation_opens_no_sub_request() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(MockSourceSelection::new().respond(MockBehavior::Return(vec![
        sourcerate_core::SourceSelectionEntry::new("east", "A", q(0)),
    ])));
    let collector = builder(&inner, &selection).build().unwrap();

    let res = collector.collect_rates(&cart(&[(1, "A", 1)])).await.unwrap();
    assert!(res.packages.is_empty());
    assert_eq!(inner.calls().await, 0);
}
