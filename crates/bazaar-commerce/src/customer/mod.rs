//! Customer portal logic.
//!
//! Everything here works on the logged-in customer's own record.

mod dashboard;
mod new_order;
mod orders;

pub use dashboard::{CustomerSummary, NO_TRANSACTIONS};
pub use new_order::{NewOrder, OrderRequest, SUBMITTED_STATUS};
pub use orders::OrderFilter;
