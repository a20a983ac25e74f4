use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use sourcerate::{QuoteDispatch, SourceRateError, SourceSplitCollector};
use sourcerate_core::{CarrierSettings, CartItem, Destination, RateRequest};
use sourcerate_mock::{
    MockRateCollector, MockSourceRepository, MockSourceSelection, MockStockResolver,
};

/// Fixture stock: east and west both carry the jacket, only west carries boots.
#[must_use]
pub fn selection() -> MockSourceSelection {
    MockSourceSelection::new()
        .stock("east", "JACKET-M", Decimal::new(6, 0))
        .stock("west", "JACKET-M", Decimal::new(20, 0))
        .stock("west", "BOOTS-42", Decimal::new(3, 0))
        .stock("central", "BOOTS-42", Decimal::new(10, 0))
}

/// Carrier configuration: both fixture carriers active and showing errors.
#[must_use]
pub fn carriers() -> HashMap<String, CarrierSettings> {
    let mut m = HashMap::new();
    m.insert("flatrate".to_string(), CarrierSettings::active(true));
    m.insert("tablerate".to_string(), CarrierSettings::active(true));
    m
}

/// Build a split collector over the mock collaborators.
///
/// # Errors
/// Returns an error if the builder rejects the wiring.
pub fn split_collector(
    inner: Arc<MockRateCollector>,
    dispatch: QuoteDispatch,
) -> Result<SourceSplitCollector, SourceRateError> {
    SourceSplitCollector::builder()
        .with_inner(inner)
        .source_selection(Arc::new(selection()))
        .stock_resolver(Arc::new(MockStockResolver::default()))
        .source_repository(Arc::new(MockSourceRepository::default()))
        .scope_config(Arc::new(true))
        .carrier_config(Arc::new(carriers()))
        .dispatch(dispatch)
        .build()
}

/// A cart shipping ten jackets and four pairs of boots to Brooklyn, plus a gift card.
#[must_use]
pub fn sample_request() -> RateRequest {
    RateRequest::new(
        1,
        Destination {
            country_id: "US".into(),
            postcode: "11201".into(),
            street: Some("1 Main St".into()),
            region_id: Some("NY".into()),
            city: Some("Brooklyn".into()),
        },
    )
    .with_item(CartItem::new(1, "JACKET-M", Decimal::new(10, 0)))
    .with_item(CartItem::new(2, "BOOTS-42", Decimal::new(4, 0)))
    .with_item(CartItem::new(3, "GIFT-25", Decimal::ONE).virtual_product())
}
