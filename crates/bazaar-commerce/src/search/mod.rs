//! Search module.
//!
//! Filters, sorts and facet counts for the product search page.

mod filter;
mod query;
mod results;

pub use filter::{FilterState, PriceRange, MAX_RATING};
pub use query::{CatalogQuery, SortOption};
pub use results::{Facet, FacetValue, SearchResults};
