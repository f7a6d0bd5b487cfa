//! Order types.

use crate::ids::OrderId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Statuses are labels on denormalised records, so unknown labels are kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Delivered to the customer.
    Delivered,
    /// With the courier.
    Shipping,
    /// Cancelled.
    Cancelled,
    /// Any other label.
    Other(String),
}

impl OrderStatus {
    /// Label as shown in the portals.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Delivered => "Teslim Edildi",
            OrderStatus::Shipping => "Kargoda",
            OrderStatus::Cancelled => "İptal Edildi",
            OrderStatus::Other(label) => label,
        }
    }

    /// Parse a portal label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Teslim Edildi" => OrderStatus::Delivered,
            "Kargoda" => OrderStatus::Shipping,
            "İptal Edildi" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Whether the order still counts towards revenue.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A line in a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at time of order.
    pub price: Money,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Line total, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// A past order embedded in a customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order identifier (e.g. "SIP-1001").
    pub id: OrderId,
    /// Order date.
    pub date: NaiveDate,
    /// Total as recorded. Not recomputed from the items.
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Ordered items.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Date formatted the way the portals show it ("15.04.2024").
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}
