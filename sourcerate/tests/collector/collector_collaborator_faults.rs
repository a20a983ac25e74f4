use std::sync::Arc;
use std::time::Duration;

use sourcerate::{QuoteDispatch, RateCollector, SourceRateError};
use sourcerate_core::SourceSelectionEntry;
use sourcerate_mock::{MockBehavior, MockRateCollector, MockSourceSelection, MockStockResolver};

use crate::helpers::{EAST, WEST, builder, cart, q, split_six_four};

#[tokio::test]
async fn unknown_source_aborts_collection() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(MockSourceSelection::new().respond(MockBehavior::Return(vec![
        SourceSelectionEntry::new(EAST, "A", q(6)),
        SourceSelectionEntry::new("nowhere", "A", q(4)),
    ])));
    let collector = builder(&inner, &selection).build().unwrap();

    let err = collector
        .collect_rates(&cart(&[(1, "A", 10)]))
        .await
        .unwrap_err();
    assert_eq!(err, SourceRateError::not_found("source nowhere"));
    assert!(err.is_collaborator_fault());
    // Sources are resolved before any quoting call.
    assert_eq!(inner.calls().await, 0);
}

#[tokio::test]
async fn allocator_failure_propagates() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(
        MockSourceSelection::new()
            .respond(MockBehavior::Fail(SourceRateError::Other("down".into()))),
    );
    let collector = builder(&inner, &selection).build().unwrap();

    let err = collector
        .collect_rates(&cart(&[(1, "A", 10)]))
        .await
        .unwrap_err();
    match err {
        SourceRateError::Collaborator { collaborator, msg } => {
            assert_eq!(collaborator, "source-selection");
            assert!(msg.contains("down"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn stock_resolution_failure_propagates() {
    let inner = Arc::new(MockRateCollector::new());
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection)
        .stock_resolver(Arc::new(MockStockResolver::default()))
        .build()
        .unwrap();

    let mut req = cart(&[(1, "A", 10)]);
    req.website_id = 7;
    let err = collector.collect_rates(&req).await.unwrap_err();
    assert!(matches!(err, SourceRateError::NotFound { .. }));
    assert!(selection.calls().await.is_empty());
}

#[tokio::test]
async fn inner_collector_failure_fails_the_whole_call() {
    for dispatch in [QuoteDispatch::Sequential, QuoteDispatch::Concurrent] {
        let inner = Arc::new(
            MockRateCollector::new().fail_for(WEST, SourceRateError::Other("boom".into())),
        );
        let selection = Arc::new(split_six_four("A"));
        let collector = builder(&inner, &selection)
            .dispatch(dispatch)
            .build()
            .unwrap();

        let err = collector
            .collect_rates(&cart(&[(1, "A", 10)]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SourceRateError::collaborator("mock-rates", "unknown error: boom")
        );
    }
}

#[tokio::test]
async fn concurrent_dispatch_stops_at_first_failure() {
    let inner = Arc::new(
        MockRateCollector::new()
            .hang_for(EAST)
            .fail_for(WEST, SourceRateError::Other("boom".into())),
    );
    let selection = Arc::new(split_six_four("A"));
    let collector = builder(&inner, &selection)
        .dispatch(QuoteDispatch::Concurrent)
        .build()
        .unwrap();

    let req = cart(&[(1, "A", 10)]);
    let err = tokio::time::timeout(Duration::from_secs(5), collector.collect_rates(&req))
        .await
        .expect("a failed source must not wait on a stalled one")
        .unwrap_err();
    assert_eq!(
        err,
        SourceRateError::collaborator("mock-rates", "unknown error: boom")
    );
    assert_eq!(inner.calls().await, 2);
}
