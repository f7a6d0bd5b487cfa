//! Customer records.

use crate::accounts::{Order, Transaction};
use crate::ids::CustomerId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CustomerStatus {
    #[default]
    Active,
    Passive,
}

impl CustomerStatus {
    /// Label as shown in the portals.
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Aktif",
            CustomerStatus::Passive => "Pasif",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer with embedded order and transaction history.
///
/// Orders and transactions are denormalised copies; nothing links them to
/// products or to each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Mobile number, digits only (e.g. "05551234567").
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Account balance.
    pub balance: Money,
    pub status: CustomerStatus,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Customer {
    /// Whether this customer matches an admin search query.
    ///
    /// Name and email match case-insensitively; phone matches as a raw substring.
    pub fn matches_query(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.name.to_lowercase().contains(&lowered)
            || self.phone.contains(query)
            || self.email.to_lowercase().contains(&lowered)
    }

    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    /// Find an embedded order.
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id.as_str() == order_id)
    }
}
