use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::ShippableItem;

/// Destination address as understood by the allocation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO country code.
    pub country: String,
    /// Postal code.
    pub postcode: String,
    /// Street, empty when unknown.
    pub street: String,
    /// Region, empty when unknown.
    pub region: String,
    /// City, empty when unknown.
    pub city: String,
}

/// Input to the source allocation service. Built once per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Stock the sources are drawn from.
    pub stock_id: i64,
    /// Items that must ship.
    pub items: Vec<ShippableItem>,
    /// Where the order ships to.
    pub destination: Address,
}

/// One row of an allocation decision: `qty_to_deduct` of `sku` ships from `source_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSelectionEntry {
    /// Inventory source code.
    pub source_code: String,
    /// Product SKU.
    pub sku: String,
    /// Quantity allocated to this source.
    pub qty_to_deduct: Decimal,
}

impl SourceSelectionEntry {
    /// Convenience constructor.
    pub fn new(source_code: impl Into<String>, sku: impl Into<String>, qty: Decimal) -> Self {
        Self {
            source_code: source_code.into(),
            sku: sku.into(),
            qty_to_deduct: qty,
        }
    }
}

/// An inventory source (warehouse) and its shipping location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Unique source code.
    pub source_code: String,
    /// Display name.
    pub name: String,
    /// ISO country code.
    pub country_id: String,
    /// Postal code.
    pub postcode: String,
    /// Region identifier.
    pub region_id: Option<String>,
    /// City.
    pub city: Option<String>,
}
