use std::sync::Arc;

use proptest::prelude::*;
use sourcerate::{QuoteDispatch, RateCollector, RateResult};
use sourcerate_mock::{MockRateCollector, MockSourceSelection, fixtures};

use crate::helpers::{CENTRAL, EAST, WEST, builder, cart, q};

const SOURCES: [&str; 3] = [EAST, WEST, CENTRAL];

async fn run(
    dispatch: QuoteDispatch,
    stock: &[(usize, &str, i64)],
    failing: &[bool],
    lines: &[(u64, &str, i64)],
) -> RateResult {
    let mut inner = MockRateCollector::new();
    for (i, fails) in failing.iter().enumerate() {
        if *fails {
            inner = inner.quote_for(
                SOURCES[i],
                vec![fixtures::rates::unavailable("flatrate", "Flat Rate")],
            );
        }
    }
    let selection = stock
        .iter()
        .fold(MockSourceSelection::new(), |sel, (s, sku, qty)| {
            sel.stock(SOURCES[*s], sku, q(*qty))
        });

    let collector = builder(&Arc::new(inner), &Arc::new(selection))
        .dispatch(dispatch)
        .build()
        .unwrap();
    collector.collect_rates(&cart(lines)).await.unwrap()
}

#[tokio::test]
async fn concurrent_matches_sequential() {
    let stock: [(usize, &str, i64); 4] = [(0, "A", 3), (1, "A", 10), (1, "B", 1), (2, "B", 5)];
    let lines: [(u64, &str, i64); 2] = [(1, "A", 8), (2, "B", 4)];
    for failing in [[false, false, false], [false, true, false], [true, false, true]] {
        let seq = run(QuoteDispatch::Sequential, &stock, &failing, &lines).await;
        let con = run(QuoteDispatch::Concurrent, &stock, &failing, &lines).await;
        assert_eq!(seq, con);
    }
}

fn arb_stock() -> impl Strategy<Value = Vec<(usize, &'static str, i64)>> {
    proptest::collection::vec(
        (0usize..3, prop_oneof![Just("A"), Just("B")], 1i64..6),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn flatrate_survives_iff_no_shipping_source_fails(
        stock in arb_stock(),
        failing in proptest::collection::vec(any::<bool>(), 3),
        qty_a in 0i64..8,
        qty_b in 0i64..8,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let lines: [(u64, &str, i64); 2] = [(1, "A", qty_a), (2, "B", qty_b)];
        let (seq, con) = rt.block_on(async {
            (
                run(QuoteDispatch::Sequential, &stock, &failing, &lines).await,
                run(QuoteDispatch::Concurrent, &stock, &failing, &lines).await,
            )
        });
        prop_assert_eq!(&seq, &con);

        let shipping: Vec<usize> = seq
            .packages
            .iter()
            .filter_map(|p| p.source_code.as_deref())
            .filter_map(|code| SOURCES.iter().position(|s| *s == code))
            .collect();
        let any_fails = shipping.iter().any(|i| failing[*i]);
        let has_flat = seq.rates().any(|r| r.method == "flatrate");
        prop_assert_eq!(has_flat, !shipping.is_empty() && !any_fails);
        if has_flat {
            // One rate per shipping source.
            prop_assert_eq!(
                seq.rates().filter(|r| r.method == "flatrate").count(),
                shipping.len()
            );
        }
    }
}
