use serde::{Deserialize, Serialize};

use crate::cart::CartItem;

/// Shipping destination carried on a rate request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// ISO country code.
    pub country_id: String,
    /// Postal code.
    pub postcode: String,
    /// Street lines joined by newline, if known.
    pub street: Option<String>,
    /// Region identifier, if known.
    pub region_id: Option<String>,
    /// City, if known.
    pub city: Option<String>,
}

/// Shipping origin. Carriers read origin fields when pricing a shipment;
/// unset fields fall back to the store's configured origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// ISO country code.
    pub country_id: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// Region identifier.
    pub region_id: Option<String>,
    /// Region code; some carriers read this instead of `region_id`.
    pub region_code: Option<String>,
    /// City.
    pub city: Option<String>,
}

/// A rate collection request: one cart shipped to one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Website the cart belongs to; resolves the stock used for allocation.
    pub website_id: u32,
    /// Where the order ships to.
    pub destination: Destination,
    /// Where the order ships from.
    pub origin: Origin,
    /// Inventory source this request is restricted to, if any.
    pub selected_source_code: Option<String>,
    /// Cart line items.
    pub items: Vec<CartItem>,
}

impl RateRequest {
    /// Create a request for the given website and destination with no items.
    #[must_use]
    pub fn new(website_id: u32, destination: Destination) -> Self {
        Self {
            website_id,
            destination,
            ..Self::default()
        }
    }

    /// Append a cart item.
    #[must_use]
    pub fn with_item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }
}
