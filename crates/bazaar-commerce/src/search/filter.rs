//! Search filter state.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest selectable rating floor.
pub const MAX_RATING: u8 = 5;

/// Inclusive price range. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// Range from zero up to `ceiling`.
    pub fn up_to(ceiling: Money) -> Self {
        Self {
            min: Some(Money::zero(ceiling.currency)),
            max: Some(ceiling),
        }
    }

    /// Whether `price` lies within the range, both ends inclusive.
    ///
    /// A bound in another currency excludes the price.
    pub fn contains(&self, price: &Money) -> bool {
        let above_min = self.min.map_or(true, |min| price >= &min);
        let below_max = self.max.map_or(true, |max| price <= &max);
        above_min && below_max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Facet selections on the search page.
///
/// Every edit consumes the state and returns a new one; nothing is mutated
/// in place behind the caller's back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Selected categories. Empty means no restriction.
    pub categories: BTreeSet<String>,
    /// Selected colors. Empty means no restriction.
    pub colors: BTreeSet<String>,
    /// Price range.
    pub price: PriceRange,
    /// Minimum rating, 0 for none.
    pub min_rating: u8,
    /// Upper price bound the page starts with and returns to on clear.
    #[serde(default)]
    pub price_ceiling: Option<Money>,
}

impl FilterState {
    /// Unrestricted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state of a page whose price slider tops out at `ceiling`.
    pub fn with_price_ceiling(ceiling: Money) -> Self {
        Self {
            price: PriceRange::up_to(ceiling),
            price_ceiling: Some(ceiling),
            ..Self::default()
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
        self
    }

    /// Add the color if absent, remove it if present.
    pub fn toggle_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        if !self.colors.remove(&color) {
            self.colors.insert(color);
        }
        self
    }

    /// Set the price range. A `max` below `min` is raised to `min`.
    pub fn set_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        let max = match (min, max) {
            (Some(lo), Some(hi)) if lo.currency == hi.currency && hi < lo => {
                tracing::debug!(min = %lo, max = %hi, "price range inverted, clamping max");
                Some(lo)
            }
            _ => max,
        };
        self.price = PriceRange::new(min, max);
        self
    }

    /// Select a rating floor. Selecting the current floor again clears it.
    pub fn set_min_rating(mut self, rating: u8) -> Self {
        let rating = rating.min(MAX_RATING);
        self.min_rating = if rating == self.min_rating { 0 } else { rating };
        self
    }

    /// Back to the page's initial state.
    pub fn clear(self) -> Self {
        match self.price_ceiling {
            Some(ceiling) => Self::with_price_ceiling(ceiling),
            None => Self::default(),
        }
    }

    /// Number of active facet restrictions, as shown on the filter button.
    pub fn active_count(&self) -> usize {
        let price_narrowed = match self.price_ceiling {
            Some(ceiling) => self.price != PriceRange::up_to(ceiling),
            None => !self.price.is_unbounded(),
        };
        self.categories.len()
            + self.colors.len()
            + usize::from(price_narrowed)
            + usize::from(self.min_rating > 0)
    }

    /// Whether a product passes every facet, in pipeline order:
    /// category, color, price, rating.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_color(product)
            && self.price.contains(&product.price)
            && self.matches_rating(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_color(&self, product: &Product) -> bool {
        if self.colors.is_empty() {
            return true;
        }
        product
            .color
            .as_ref()
            .is_some_and(|color| self.colors.contains(color))
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating == 0 || product.rating >= f64::from(self.min_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(units: i64) -> Money {
        Money::from_major(units, Currency::USD)
    }

    fn lamp(price: i64) -> Product {
        Product::new("p", "Modern Lamp", "d", usd(price), "Home")
            .with_color("black")
            .with_rating(4.2, 10)
    }

    #[test]
    fn test_toggle_category_adds_then_removes() {
        let state = FilterState::new().toggle_category("Home");
        assert!(state.categories.contains("Home"));
        let state = state.toggle_category("Home");
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_toggle_color() {
        let state = FilterState::new().toggle_color("red").toggle_color("blue");
        assert_eq!(state.colors.len(), 2);
        assert!(!state.matches(&lamp(10)));
        assert!(state.toggle_color("black").matches(&lamp(10)));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(Some(usd(10)), Some(usd(20)));
        assert!(range.contains(&usd(10)));
        assert!(range.contains(&usd(20)));
        assert!(!range.contains(&usd(21)));
        assert!(PriceRange::default().contains(&usd(1_000_000)));
    }

    #[test]
    fn test_inverted_price_range_clamps_max_up() {
        let state = FilterState::new().set_price_range(Some(usd(500)), Some(usd(100)));
        assert_eq!(state.price.min, Some(usd(500)));
        assert_eq!(state.price.max, Some(usd(500)));
        assert!(state.matches(&lamp(500)));
        assert!(!state.matches(&lamp(499)));
    }

    #[test]
    fn test_rating_floor_toggles_off() {
        let state = FilterState::new().set_min_rating(4);
        assert_eq!(state.min_rating, 4);
        assert!(state.matches(&lamp(10)));
        let state = state.set_min_rating(4);
        assert_eq!(state.min_rating, 0);
        assert_eq!(FilterState::new().set_min_rating(9).min_rating, MAX_RATING);
    }

    #[test]
    fn test_rating_floor_excludes_lower_ratings() {
        let state = FilterState::new().set_min_rating(5);
        assert!(!state.matches(&lamp(10)));
    }

    #[test]
    fn test_product_without_color_excluded_when_color_selected() {
        let plain = Product::new("p", "n", "d", usd(5), "Home");
        assert!(FilterState::new().matches(&plain));
        assert!(!FilterState::new().toggle_color("black").matches(&plain));
    }

    #[test]
    fn test_clear_restores_page_ceiling() {
        let state = FilterState::with_price_ceiling(usd(1000))
            .toggle_category("Home")
            .toggle_color("red")
            .set_min_rating(3)
            .set_price_range(Some(usd(50)), Some(usd(60)));
        assert_eq!(state.active_count(), 4);

        let cleared = state.clear();
        assert_eq!(cleared, FilterState::with_price_ceiling(usd(1000)));
        assert_eq!(cleared.price.max, Some(usd(1000)));
        assert_eq!(cleared.active_count(), 0);
        assert!(!cleared.matches(&lamp(1001)));
    }
}
