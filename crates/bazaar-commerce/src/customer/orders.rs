//! Order history filter.

use crate::accounts::{Order, OrderStatus};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status filter on the order history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    #[default]
    All,
    Delivered,
    Shipping,
    Cancelled,
}

impl OrderFilter {
    pub const ALL: [OrderFilter; 4] = [
        OrderFilter::All,
        OrderFilter::Delivered,
        OrderFilter::Shipping,
        OrderFilter::Cancelled,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            OrderFilter::All => "all",
            OrderFilter::Delivered => "delivered",
            OrderFilter::Shipping => "shipping",
            OrderFilter::Cancelled => "cancelled",
        }
    }

    /// Label of the filter menu entry.
    pub fn label(&self) -> &'static str {
        match self {
            OrderFilter::All => "Tüm Siparişler",
            OrderFilter::Delivered => "Teslim Edilenler",
            OrderFilter::Shipping => "Kargoda Olanlar",
            OrderFilter::Cancelled => "İptal Edilenler",
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Delivered => order.status == OrderStatus::Delivered,
            OrderFilter::Shipping => order.status == OrderStatus::Shipping,
            OrderFilter::Cancelled => order.status == OrderStatus::Cancelled,
        }
    }

    /// Orders passing the filter, in their original order.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

impl FromStr for OrderFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown order filter: {s}")))
    }
}

impl std::fmt::Display for OrderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn test_filters_over_seed_orders() {
        let mehmet = seed::customer_by_id("cust-3").unwrap();
        assert_eq!(OrderFilter::All.apply(&mehmet.orders).len(), 2);
        let cancelled = OrderFilter::Cancelled.apply(&mehmet.orders);
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].id.as_str(), "SIP-1004");
        assert!(OrderFilter::Shipping.apply(&mehmet.orders).is_empty());

        let ayse = seed::customer_by_id("cust-2").unwrap();
        assert_eq!(OrderFilter::Shipping.apply(&ayse.orders).len(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("delivered".parse::<OrderFilter>().unwrap(), OrderFilter::Delivered);
        assert!("pending".parse::<OrderFilter>().is_err());
    }
}
