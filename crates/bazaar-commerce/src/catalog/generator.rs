//! Synthetic catalogue for the product search page.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Categories used by the search catalogue.
pub const SEARCH_CATEGORIES: [&str; 6] =
    ["Clothing", "Shoes", "Accessories", "Electronics", "Home", "Beauty"];

/// Colors used by the search catalogue.
pub const COLORS: [&str; 6] = ["black", "white", "gray", "red", "blue", "green"];

/// Name parts and description template for one category.
struct Template {
    prefixes: &'static [&'static str],
    kinds: &'static [&'static str],
    description: fn(&str) -> String,
    price: (i64, i64),
}

fn template(category: &str) -> Template {
    match category {
        "Clothing" => Template {
            prefixes: &["Casual", "Elegant", "Vintage", "Modern", "Classic"],
            kinds: &["T-Shirt", "Sweater", "Jacket", "Dress", "Jeans", "Shorts"],
            description: |n| format!("Comfortable {n} for everyday wear"),
            price: (10, 100),
        },
        "Shoes" => Template {
            prefixes: &["Sporty", "Elegant", "Casual", "Outdoor", "Formal"],
            kinds: &["Sneakers", "Boots", "Sandals", "Loafers", "Heels", "Running Shoes"],
            description: |n| format!("Stylish and comfortable {n} for any occasion"),
            price: (10, 100),
        },
        "Accessories" => Template {
            prefixes: &["Luxury", "Casual", "Vintage", "Designer", "Handmade"],
            kinds: &["Watch", "Bag", "Wallet", "Sunglasses", "Hat", "Scarf"],
            description: |n| format!("High-quality {n} to complete your look"),
            price: (10, 100),
        },
        "Electronics" => Template {
            prefixes: &["TechPro", "SoundMax", "PixelView", "SmartLife", "ElectraTech"],
            kinds: &["Headphones", "Smartwatch", "Speaker", "Tablet", "Camera", "Earbuds"],
            description: |n| format!("Advanced technology {n} for your digital lifestyle"),
            price: (50, 500),
        },
        "Home" => Template {
            prefixes: &["Modern", "Rustic", "Minimalist", "Bohemian", "Scandinavian"],
            kinds: &["Lamp", "Pillow", "Blanket", "Vase", "Frame", "Candle"],
            description: |n| format!("Beautiful {n} to enhance your home decor"),
            price: (20, 200),
        },
        _ => Template {
            prefixes: &["NaturGlow", "PureSkin", "LuxeBeauty", "EssenceOf", "RadiantYou"],
            kinds: &["Moisturizer", "Serum", "Cleanser", "Mask", "Perfume", "Makeup Set"],
            description: |n| format!("Premium quality {n} for your beauty routine"),
            price: (10, 100),
        },
    }
}

/// Seeded generator for the search catalogue.
///
/// The same seed and reference time always yield the same products.
pub struct CatalogGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
    currency: Currency,
}

impl CatalogGenerator {
    /// Create a generator anchored at `now`.
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now,
            currency: Currency::USD,
        }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.gen_range(0..options.len())]
    }

    /// Generate product `prod-{n}`.
    pub fn product(&mut self, n: usize) -> Product {
        let category = self.pick(&SEARCH_CATEGORIES);
        let template = template(category);
        let name = format!("{} {}", self.pick(template.prefixes), self.pick(template.kinds));
        let description = (template.description)(&name.to_lowercase());

        let (low, high) = template.price;
        let price = Money::from_major(self.rng.gen_range(low..=high), self.currency);

        // 3 in 11 discounted, 2 in 11 featured.
        let discount = if self.rng.gen_range(0..=10) > 7 {
            self.rng.gen_range(10..=30)
        } else {
            0
        };
        let rating = f64::from(self.rng.gen_range(30..=50_u32)) / 10.0;
        let review_count = self.rng.gen_range(5..=500);
        let featured = self.rng.gen_range(0..=10) > 8;
        let color = self.pick(&COLORS);

        let year_ms = Duration::days(365).num_milliseconds();
        let created_at = self.now - Duration::milliseconds(self.rng.gen_range(0..=year_ms));

        let mut product = Product::new(format!("prod-{n}"), name.clone(), description, price, category)
            .with_color(color)
            .with_rating(rating, review_count)
            .with_created_at(created_at);
        product.discount = discount;
        product.featured = featured;
        product.image = format!(
            "/placeholder.svg?height=300&width=300&text={}",
            name.replace(' ', "%20")
        );
        product
    }

    /// Generate `size` products numbered from 1.
    pub fn generate(&mut self, size: usize) -> Vec<Product> {
        (1..=size).map(|n| self.product(n)).collect()
    }
}

/// Generate the search catalogue relative to the current time.
pub fn generate_catalog(seed: u64, size: usize) -> Vec<Product> {
    generate_catalog_at(seed, size, Utc::now())
}

/// Generate the search catalogue relative to `now`.
pub fn generate_catalog_at(seed: u64, size: usize, now: DateTime<Utc>) -> Vec<Product> {
    let products = CatalogGenerator::new(seed, now).generate(size);
    tracing::debug!(seed, size, "generated search catalogue");
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate_catalog_at(42, 24, anchor());
        let b = generate_catalog_at(42, 24, anchor());
        assert_eq!(a, b);
        assert_ne!(a, generate_catalog_at(7, 24, anchor()));
    }

    #[test]
    fn test_generated_fields_stay_in_range() {
        let products = generate_catalog_at(1, 200, anchor());
        assert_eq!(products.len(), 200);
        assert_eq!(products[0].id.as_str(), "prod-1");
        assert_eq!(products[199].id.as_str(), "prod-200");

        for p in &products {
            assert!(SEARCH_CATEGORIES.contains(&p.category.as_str()));
            assert!(COLORS.contains(&p.color.as_deref().unwrap()));
            assert!((3.0..=5.0).contains(&p.rating));
            assert!((5..=500).contains(&p.review_count));
            assert!(p.discount == 0 || (10..=30).contains(&p.discount));
            assert!(p.created_at <= anchor());
            assert!(p.created_at >= anchor() - Duration::days(365));
            assert!(p.stock.is_none());

            let major = p.price.amount_minor / 100;
            match p.category.as_str() {
                "Electronics" => assert!((50..=500).contains(&major)),
                "Home" => assert!((20..=200).contains(&major)),
                _ => assert!((10..=100).contains(&major)),
            }
        }
    }

    #[test]
    fn test_names_follow_category_templates() {
        for p in generate_catalog_at(3, 50, anchor()) {
            assert!(p.name.split(' ').count() >= 2);
            assert!(p.description.contains(&p.name.to_lowercase()));
        }
    }
}
