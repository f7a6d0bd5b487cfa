//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder image used when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product in the catalogue.
///
/// The search catalogue fills `color`, `discount`, `rating`, `review_count`
/// and `featured`; the commerce catalogue fills `stock`. Fields a view does
/// not use keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category label (e.g. "Telefon", "Electronics").
    pub category: String,
    /// Color label, lower-case. Search catalogue only.
    pub color: Option<String>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Discount percentage, 0 to 100. Search catalogue only.
    pub discount: u8,
    /// Whether the product is promoted on the search page.
    pub featured: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Units in stock. `None` means stock is not tracked.
    pub stock: Option<u32>,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Create a product with only the fields every view shares.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            color: None,
            rating: 0.0,
            review_count: 0,
            discount: 0,
            featured: false,
            created_at: Utc::now(),
            stock: None,
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Set tracked stock.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the color label.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set rating and review count. Rating is clamped to 0.0..=5.0.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Whether the product can be added to a cart.
    ///
    /// Untracked stock always counts as available.
    pub fn is_in_stock(&self) -> bool {
        self.stock.map_or(true, |s| s > 0)
    }

    /// Whether tracked stock is at or below `threshold`.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock.is_some_and(|s| s <= threshold)
    }

    /// Whether a discount applies.
    pub fn is_discounted(&self) -> bool {
        self.discount > 0
    }

    /// Price after discount.
    pub fn sale_price(&self) -> Money {
        self.price.discounted(self.discount)
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// Only an empty query matches everything; whitespace is matched literally.
    pub fn matches_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Like [`Product::matches_text`], also matching the category label.
    pub fn matches_text_or_category(&self, query: &str) -> bool {
        self.matches_text(query) || self.category.to_lowercase().contains(&query.to_lowercase())
    }

    /// Star breakdown for rating display.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Full, half and empty stars for a rating out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Break a 0.0..=5.0 rating into stars; a fraction of .5 or more is a half star.
    pub fn from_rating(rating: f64) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let full = rating.floor() as u8;
        let half = rating.fract() >= 0.5;
        let empty = 5 - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Render as text, e.g. "★★★⯪☆".
    pub fn render(&self) -> String {
        let mut s = "\u{2605}".repeat(self.full as usize);
        if self.half {
            s.push('\u{2bea}');
        }
        s.push_str(&"\u{2606}".repeat(self.empty as usize));
        s
    }
}
