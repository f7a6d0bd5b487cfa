//! Storefront domain types and logic for Bazaar.
//!
//! This crate holds everything the portals and the search page compute,
//! with no I/O of its own:
//!
//! - **Catalog**: Products, the fixed seed data and the synthetic search catalogue
//! - **Search**: Facet filters, sorting and facet counts
//! - **Cart**: One cart for the sales desk and the customer order form
//! - **Accounts**: Customers with their orders and transactions
//! - **Admin** / **Customer**: Portal logic on top of the above
//!
//! # Example
//!
//! ```rust
//! use bazaar_commerce::prelude::*;
//!
//! let products = seed::products();
//!
//! let query = CatalogQuery::new()
//!     .with_filters(FilterState::new().toggle_category("Telefon"))
//!     .with_sort(SortOption::Featured);
//! let results = query.apply(&products);
//! assert_eq!(results.items[0].name, "iPhone 15");
//!
//! let mut cart = Cart::new(seed::CURRENCY);
//! cart.add(&results.items[0]).unwrap();
//! assert_eq!(cart.total().unwrap().display(), "₺2.499,00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod accounts;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod customer;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{seed, generate_catalog, Product, StarRating};

    // Accounts
    pub use crate::accounts::{
        Customer, CustomerStatus, Order, OrderItem, OrderStatus, Transaction, TransactionKind,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};

    // Search
    pub use crate::search::{CatalogQuery, Facet, FilterState, PriceRange, SearchResults, SortOption};

    // Portals
    pub use crate::admin::{CustomerBook, DashboardStats, ProductBook, Receipt, SalesDesk};
    pub use crate::customer::{CustomerSummary, NewOrder, OrderFilter, OrderRequest};
}
