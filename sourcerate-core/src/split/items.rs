use crate::types::{Address, AllocationRequest, CartItem, RateRequest, ShippableItem};

/// Keep only the cart rows that physically ship on their own.
///
/// Child rows (bundle/configurable components, represented by their parent)
/// and virtual products are dropped. Quantities are passed through unchanged
/// and rows sharing a SKU are not coalesced.
#[must_use]
pub fn extract_shippable_items(items: &[CartItem]) -> Vec<ShippableItem> {
    items
        .iter()
        .filter(|item| item.is_shippable())
        .map(|item| ShippableItem {
            sku: item.sku.clone(),
            qty: item.qty,
        })
        .collect()
}

/// Build the allocation request for `request` shipping `items` from `stock_id`.
///
/// Optional destination fields default to empty strings.
#[must_use]
pub fn build_allocation_request(
    request: &RateRequest,
    items: Vec<ShippableItem>,
    stock_id: i64,
) -> AllocationRequest {
    let dest = &request.destination;
    AllocationRequest {
        stock_id,
        items,
        destination: Address {
            country: dest.country_id.clone(),
            postcode: dest.postcode.clone(),
            street: dest.street.clone().unwrap_or_default(),
            region: dest.region_id.clone().unwrap_or_default(),
            city: dest.city.clone().unwrap_or_default(),
        },
    }
}
