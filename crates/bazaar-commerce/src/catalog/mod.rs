//! Product catalogue.
//!
//! Contains the product type, the fixed commerce seed data and the
//! synthetic search catalogue generator.

mod generator;
mod product;
pub mod seed;

pub use generator::{generate_catalog, generate_catalog_at, CatalogGenerator, COLORS, SEARCH_CATEGORIES};
pub use product::{Product, StarRating, PLACEHOLDER_IMAGE};

use crate::ids::ProductId;

/// Find a product by id.
pub fn find<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}

/// Distinct category labels in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
