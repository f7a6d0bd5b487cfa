//! Shopping cart module.
//!
//! One cart shared by the admin sales desk and the customer order form.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
