//! Account transactions.

use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of account movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Payment,
    Purchase,
    Refund,
    Other(String),
}

impl TransactionKind {
    pub fn label(&self) -> &str {
        match self {
            TransactionKind::Payment => "Ödeme",
            TransactionKind::Purchase => "Satın Alma",
            TransactionKind::Refund => "İade",
            TransactionKind::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Ödeme" => TransactionKind::Payment,
            "Satın Alma" => TransactionKind::Purchase,
            "İade" => TransactionKind::Refund,
            other => TransactionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionKind {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.label().to_string()
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A payment, purchase or refund on a customer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    /// Unsigned amount; the kind carries the direction.
    pub amount: Money,
    pub description: String,
}

impl Transaction {
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}
