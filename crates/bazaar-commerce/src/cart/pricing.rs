//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart, as printed on receipts and order summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartPricing {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of adding.
    pub name: String,
    /// Captured unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}

impl LineItemPricing {
    /// "₺2.499,00 x 2" as shown under each cart line.
    pub fn unit_label(&self) -> String {
        format!("{} x {}", self.unit_price.display(), self.quantity)
    }
}
