//! Catalogue query pipeline.

use crate::catalog::{self, Product};
use crate::error::CommerceError;
use crate::search::{Facet, FilterState, SearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Featured products first, otherwise original order.
    #[default]
    Featured,
    /// Newest first.
    Newest,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
    ];

    /// Key accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Top Rated",
        }
    }

    /// Sort in place. Every ordering is stable.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortOption::Featured => products.sort_by_key(|p| !p.featured),
            SortOption::Newest => products.sort_by_key(|p| Reverse(p.created_at)),
            SortOption::PriceLow => products.sort_by_key(|p| p.price.amount_minor),
            SortOption::PriceHigh => products.sort_by_key(|p| Reverse(p.price.amount_minor)),
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Text query, facet filters and sort order of the search page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogQuery {
    /// Free text, matched against name and description.
    pub query: String,
    /// Facet selections.
    pub filters: FilterState,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create an unrestricted query with the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Replace the facet selections.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run every narrowing stage: text, category, color, price, rating.
    ///
    /// Output keeps input order.
    pub fn filter(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| p.matches_text(&self.query) && self.filters.matches(p))
            .cloned()
            .collect()
    }

    /// Run the full pipeline over the complete product set.
    ///
    /// Recomputed from scratch on every call.
    pub fn apply(&self, products: &[Product]) -> SearchResults<Product> {
        let mut visible = self.filter(products);
        self.sort.sort(&mut visible);

        let facets = vec![
            self.facet("Categories", "category", &catalog::categories(products), &visible, |p| {
                Some(p.category.as_str())
            }),
            self.facet("Colors", "color", &colors(products), &visible, |p| p.color.as_deref()),
        ];

        tracing::debug!(
            query = %self.query,
            sort = %self.sort,
            visible = visible.len(),
            total = products.len(),
            "catalogue query applied"
        );

        SearchResults::new(visible, products.len()).with_facets(facets)
    }

    fn facet(
        &self,
        name: &str,
        field: &str,
        values: &[String],
        visible: &[Product],
        value_of: impl Fn(&Product) -> Option<&str>,
    ) -> Facet {
        let selected = match field {
            "category" => &self.filters.categories,
            _ => &self.filters.colors,
        };
        let mut facet = Facet::terms(name, field);
        for value in values {
            let count = visible
                .iter()
                .filter(|p| value_of(p) == Some(value.as_str()))
                .count();
            facet.add_value(value.clone(), count, selected.contains(value));
        }
        facet
    }
}

/// Distinct color labels in first-seen order.
fn colors(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for color in products.iter().filter_map(|p| p.color.as_ref()) {
        if !seen.contains(color) {
            seen.push(color.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::money::{Currency, Money};
    use chrono::{TimeZone, Utc};

    fn item(id: &str, price: i64, rating: f64, featured: bool, day: u32) -> Product {
        let mut p = Product::new(id, id, "test item", Money::from_major(price, Currency::USD), "Home")
            .with_color("red")
            .with_rating(rating, 1)
            .with_created_at(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap());
        p.featured = featured;
        p
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_option_parsing() {
        assert_eq!("price-low".parse::<SortOption>().unwrap(), SortOption::PriceLow);
        assert_eq!("featured".parse::<SortOption>().unwrap(), SortOption::default());
        assert_eq!(
            "cheapest".parse::<SortOption>(),
            Err(CommerceError::UnknownSortOption("cheapest".to_string()))
        );
        for option in SortOption::ALL {
            assert_eq!(option.key().parse::<SortOption>().unwrap(), option);
        }
    }

    #[test]
    fn test_featured_sort_is_stable_partition() {
        let mut products = vec![
            item("a", 1, 3.0, false, 1),
            item("b", 1, 3.0, true, 1),
            item("c", 1, 3.0, false, 1),
            item("d", 1, 3.0, true, 1),
        ];
        SortOption::Featured.sort(&mut products);
        assert_eq!(ids(&products), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_price_newest_and_rating_sorts() {
        let products = vec![
            item("a", 30, 4.0, false, 3),
            item("b", 10, 4.5, false, 1),
            item("c", 20, 4.0, false, 2),
        ];

        let mut sorted = products.clone();
        SortOption::PriceLow.sort(&mut sorted);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);

        SortOption::PriceHigh.sort(&mut sorted);
        assert_eq!(ids(&sorted), vec!["a", "c", "b"]);

        SortOption::Newest.sort(&mut sorted);
        assert_eq!(ids(&sorted), vec!["a", "c", "b"]);

        let mut sorted = products;
        SortOption::Rating.sort(&mut sorted);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_text_query_matches_name_or_description() {
        let products = seed::products();
        let results = CatalogQuery::new().with_query("Dizüstü").apply(&products);
        assert_eq!(ids(&results.items), vec!["prod-5", "prod-9", "prod-12"]);
        assert_eq!(results.total, 12);

        let all = CatalogQuery::new().with_query("").apply(&products);
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_text_query_keeps_whitespace() {
        let products = seed::products();
        assert!(CatalogQuery::new().with_query("15 ").apply(&products).is_empty());
        assert!(CatalogQuery::new().with_query("   ").apply(&products).is_empty());

        let spaced = CatalogQuery::new().with_query("xps 15").apply(&products);
        assert_eq!(ids(&spaced.items), vec!["prod-12"]);
    }

    #[test]
    fn test_telefon_category_featured_sort() {
        let products = seed::products();
        let query = CatalogQuery::new()
            .with_filters(FilterState::new().toggle_category("Telefon"))
            .with_sort(SortOption::Featured);
        let results = query.apply(&products);
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["iPhone 15", "Samsung Galaxy S23", "Xiaomi Redmi Note 12"]);
    }

    #[test]
    fn test_facet_counts_follow_visible_items() {
        let products = seed::products();
        let results = CatalogQuery::new()
            .with_filters(FilterState::new().toggle_category("Tablet"))
            .apply(&products);

        let categories = results.facet("category").unwrap();
        assert_eq!(categories.count("Tablet"), 2);
        assert_eq!(categories.count("Telefon"), 0);
        assert!(categories.values.iter().any(|v| v.value == "Tablet" && v.selected));
        assert_eq!(categories.values.len(), 4);
        assert!(results.facet("color").unwrap().values.is_empty());
    }

    #[test]
    fn test_price_ceiling_hides_expensive_items() {
        let products = seed::products();
        let filters = FilterState::with_price_ceiling(Money::from_major(1000, Currency::TRY));
        let results = CatalogQuery::new().with_filters(filters).apply(&products);
        assert_eq!(ids(&results.items), vec!["prod-3", "prod-7", "prod-10", "prod-11"]);
    }
}
