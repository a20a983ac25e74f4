use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cart line item as carried on a rate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart row identifier.
    pub item_id: u64,
    /// Product SKU.
    pub sku: String,
    /// Quantity on this row.
    pub qty: Decimal,
    /// Parent row for bundle/configurable children.
    pub parent_item_id: Option<u64>,
    /// True for non-physical products that never ship.
    pub is_virtual: bool,
    /// Per-unit weight, carried through to derived requests.
    pub weight: Decimal,
    /// Row total, carried through to derived requests.
    pub row_total: Decimal,
}

impl CartItem {
    /// Build a simple physical item with zero weight and row total.
    pub fn new(item_id: u64, sku: impl Into<String>, qty: Decimal) -> Self {
        Self {
            item_id,
            sku: sku.into(),
            qty,
            parent_item_id: None,
            is_virtual: false,
            weight: Decimal::ZERO,
            row_total: Decimal::ZERO,
        }
    }

    /// Mark this item as a child of `parent`.
    #[must_use]
    pub const fn with_parent(mut self, parent: u64) -> Self {
        self.parent_item_id = Some(parent);
        self
    }

    /// Mark this item as virtual.
    #[must_use]
    pub const fn virtual_product(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Copy of this item with a different quantity.
    #[must_use]
    pub fn with_qty(&self, qty: Decimal) -> Self {
        Self { qty, ..self.clone() }
    }

    /// Whether the item physically ships on its own row.
    #[must_use]
    pub const fn is_shippable(&self) -> bool {
        self.parent_item_id.is_none() && !self.is_virtual
    }
}

/// A `(sku, quantity)` pair that must physically ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippableItem {
    /// Product SKU.
    pub sku: String,
    /// Quantity to ship.
    pub qty: Decimal,
}
