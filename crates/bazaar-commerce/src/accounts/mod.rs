//! Customer accounts.
//!
//! Contains customers and the orders and transactions embedded in them.

mod customer;
mod order;
mod transaction;

pub use customer::{Customer, CustomerStatus};
pub use order::{Order, OrderItem, OrderStatus};
pub use transaction::{Transaction, TransactionKind};
