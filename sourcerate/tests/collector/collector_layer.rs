use std::sync::Arc;

use sourcerate::{QuoteDispatch, RateCollector, SourceSplitCollector, USE_SOURCE_ORIGIN_FLAG};
use sourcerate_core::Middleware;
use sourcerate_mock::{MockRateCollector, MockSourceRepository, MockStockResolver};

use crate::helpers::{EAST, WEST, builder, carriers, cart, split_six_four};

#[tokio::test]
async fn layer_wraps_any_collector() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let layer = builder(&inner, &selection)
        .dispatch(QuoteDispatch::Concurrent)
        .into_layer()
        .unwrap();

    assert_eq!(layer.name(), "SourceSplitCollector");
    let cfg = layer.config_json();
    assert_eq!(cfg["flag"], USE_SOURCE_ORIGIN_FLAG);
    assert!(cfg["algorithm_code"].is_null());
    assert_eq!(cfg["resolved_algorithm"], "priority");
    assert_eq!(cfg["dispatch"], "Concurrent");

    let wrapped = Box::new(layer).apply(inner.clone());
    assert_eq!(wrapped.name(), "source-split");

    let res = wrapped.collect_rates(&cart(&[(1, "A", 10)])).await.unwrap();
    let codes: Vec<_> = res
        .packages
        .iter()
        .map(|p| p.source_code.as_deref())
        .collect();
    assert_eq!(codes, vec![Some(EAST), Some(WEST)]);
    assert_eq!(inner.calls().await, 2);
}

#[test]
fn layer_requires_collaborators_but_not_inner() {
    let err = SourceSplitCollector::builder()
        .stock_resolver(Arc::new(MockStockResolver::default()))
        .source_repository(Arc::new(MockSourceRepository::default()))
        .into_layer()
        .err()
        .expect("missing selection must fail");
    assert_eq!(
        err,
        sourcerate::SourceRateError::unsupported(sourcerate::Capability::SourceSelection.as_str())
    );

    let selection = Arc::new(split_six_four("A"));
    let layer = SourceSplitCollector::builder()
        .source_selection(selection)
        .stock_resolver(Arc::new(MockStockResolver::default()))
        .source_repository(Arc::new(MockSourceRepository::default()))
        .scope_config(Arc::new(true))
        .carrier_config(carriers(false))
        .into_layer();
    assert!(layer.is_ok());
}
