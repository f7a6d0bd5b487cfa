//! Customer dashboard summary.

use crate::accounts::Customer;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shown in place of a date when the customer has no transactions.
pub const NO_TRANSACTIONS: &str = "Yok";

/// Figures on the customer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub order_count: usize,
    pub balance: Money,
    /// Date of the first listed transaction.
    pub last_transaction: Option<NaiveDate>,
}

impl CustomerSummary {
    pub fn of(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            order_count: customer.orders.len(),
            balance: customer.balance,
            last_transaction: customer.transactions.first().map(|t| t.date),
        }
    }

    pub fn last_transaction_label(&self) -> String {
        self.last_transaction
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| NO_TRANSACTIONS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::CustomerBook;
    use crate::admin::CustomerDraft;
    use crate::catalog::seed;

    #[test]
    fn test_summary_uses_first_transaction() {
        let summary = CustomerSummary::of(&seed::customer_by_id("cust-1").unwrap());
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.balance.display(), "₺1.250,75");
        assert_eq!(summary.last_transaction_label(), "10.04.2024");
    }

    #[test]
    fn test_summary_without_transactions() {
        let mut book = CustomerBook::seeded();
        let fresh = book.add(CustomerDraft::default()).unwrap();
        let summary = CustomerSummary::of(fresh);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.last_transaction_label(), NO_TRANSACTIONS);
    }
}
