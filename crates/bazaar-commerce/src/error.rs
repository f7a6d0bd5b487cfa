//! Commerce error types.
//!
//! The `Display` text of each variant is the inline message shown to the
//! user when a transition is blocked.

use thiserror::Error;

/// Errors that can occur in catalogue, cart and portal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer not found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Product has no stock left.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Cart has no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Delivery address missing on a new order.
    #[error("Delivery address is required")]
    MissingAddress,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unknown sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
