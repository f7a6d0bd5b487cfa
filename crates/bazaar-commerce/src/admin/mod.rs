//! Admin portal logic.
//!
//! Product and customer books, the sales desk and dashboard figures. All
//! state is local to the mounted portal.

mod customers;
mod dashboard;
mod products;
mod sales;

pub use customers::{CustomerBook, CustomerDraft};
pub use dashboard::{DashboardStats, LOW_STOCK_THRESHOLD};
pub use products::{ProductBook, ProductDraft, NEW_PRODUCT_IMAGE, PRODUCT_CATEGORIES};
pub use sales::{Receipt, ReceiptCustomer, SalesDesk, GUEST_CUSTOMER};
