use rust_decimal::Decimal;
use sourcerate_core::{Rate, RateEntry, RateError, RateRequest};

fn rate(carrier: &str, carrier_title: &str, method: &str, method_title: &str, price: Decimal) -> RateEntry {
    RateEntry::Rate(Rate {
        carrier: carrier.to_string(),
        carrier_title: carrier_title.to_string(),
        method: method.to_string(),
        method_title: method_title.to_string(),
        price,
        cost: Decimal::ZERO,
    })
}

/// Flat rate: 5.00 per shipped unit.
pub fn flatrate(request: &RateRequest) -> RateEntry {
    let units: Decimal = request
        .items
        .iter()
        .filter(|i| i.is_shippable())
        .map(|i| i.qty)
        .sum();
    rate("flatrate", "Flat Rate", "flatrate", "Fixed", Decimal::new(500, 2) * units)
}

/// Table rate: 10.00 per package, 15.00 when shipping across regions.
pub fn tablerate(request: &RateRequest) -> RateEntry {
    let cross_region = match (&request.origin.region_id, &request.destination.region_id) {
        (Some(from), Some(to)) => from != to,
        _ => false,
    };
    let price = if cross_region {
        Decimal::new(1500, 2)
    } else {
        Decimal::new(1000, 2)
    };
    rate("tablerate", "Best Way", "bestway", "Table Rate", price)
}

/// Carrier failure entry.
pub fn unavailable(carrier: &str, carrier_title: &str) -> RateEntry {
    RateEntry::Error(RateError {
        carrier: carrier.to_string(),
        carrier_title: carrier_title.to_string(),
        message: "This shipping method is currently unavailable.".to_string(),
    })
}

/// Default quote set: flat rate and table rate.
pub fn standard(request: &RateRequest) -> Vec<RateEntry> {
    vec![flatrate(request), tablerate(request)]
}
