//! Admin dashboard figures.

use crate::accounts::Customer;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Stock at or below this level is flagged on the dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Summary figures computed from the in-memory books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub product_count: usize,
    pub customer_count: usize,
    pub active_customers: usize,
    /// Sum of customer balances.
    pub total_balance: Money,
    /// Names of products at or below [`LOW_STOCK_THRESHOLD`].
    pub low_stock: Vec<String>,
    /// Orders across all customers.
    pub order_count: usize,
    /// Total of orders that were not cancelled.
    pub revenue: Money,
}

impl DashboardStats {
    pub fn compute(
        products: &[Product],
        customers: &[Customer],
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let total_balance = Money::try_sum(customers.iter().map(|c| &c.balance), currency)
            .ok_or(CommerceError::Overflow)?;

        let orders = customers.iter().flat_map(|c| c.orders.iter());
        let revenue = Money::try_sum(
            orders
                .clone()
                .filter(|o| !o.status.is_cancelled())
                .map(|o| &o.total),
            currency,
        )
        .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            product_count: products.len(),
            customer_count: customers.len(),
            active_customers: customers.iter().filter(|c| c.is_active()).count(),
            total_balance,
            low_stock: products
                .iter()
                .filter(|p| p.is_low_stock(LOW_STOCK_THRESHOLD))
                .map(|p| p.name.clone())
                .collect(),
            order_count: orders.count(),
            revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn test_seed_dashboard() {
        let stats =
            DashboardStats::compute(&seed::products(), &seed::customers(), seed::CURRENCY).unwrap();
        assert_eq!(stats.product_count, 12);
        assert_eq!(stats.customer_count, 3);
        assert_eq!(stats.active_customers, 2);
        assert_eq!(stats.total_balance.display(), "₺2.001,00");
        assert_eq!(
            stats.low_stock,
            vec!["MacBook Air M2", "Lenovo ThinkPad X1", "Dell XPS 15"]
        );
        assert_eq!(stats.order_count, 5);
        // 2499 + 1850 + 1250 + 3750; SIP-1004 was cancelled.
        assert_eq!(stats.revenue, Money::from_major(9349, Currency::TRY));
    }

    #[test]
    fn test_cancelled_orders_count_but_earn_nothing() {
        let mut customers = seed::customers();
        let order = &mut customers[0].orders[0];
        let cancelled_total = order.total;
        order.status = crate::accounts::OrderStatus::Cancelled;

        let stats = DashboardStats::compute(&seed::products(), &customers, seed::CURRENCY).unwrap();
        assert_eq!(stats.order_count, 5);
        assert_eq!(
            stats.revenue,
            Money::from_major(9349, Currency::TRY)
                .try_subtract(&cancelled_total)
                .unwrap()
        );
    }

    #[test]
    fn test_empty_books() {
        let stats = DashboardStats::compute(&[], &[], Currency::TRY).unwrap();
        assert_eq!(stats.order_count, 0);
        assert!(stats.revenue.is_zero());
    }
}
