use bazaar_commerce::catalog::{generate_catalog_at, COLORS, SEARCH_CATEGORIES};
use bazaar_commerce::prelude::*;
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn usd(units: i64) -> Money {
    Money::from_major(units, Currency::USD)
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::subsequence(SEARCH_CATEGORIES.to_vec(), 0..=3),
        prop::sample::subsequence(COLORS.to_vec(), 0..=3),
        prop::option::of(0i64..300),
        prop::option::of(0i64..600),
        0u8..=5,
    )
        .prop_map(|(categories, colors, min, max, rating)| {
            let mut state = FilterState::new();
            for category in categories {
                state = state.toggle_category(category);
            }
            for color in colors {
                state = state.toggle_color(color);
            }
            state
                .set_price_range(min.map(usd), max.map(usd))
                .set_min_rating(rating)
        })
}

fn catalog_query() -> impl Strategy<Value = CatalogQuery> {
    (
        prop::sample::select(vec!["", "modern", "LAMP", "for", "xyz", " casual "]),
        filter_state(),
        prop::sample::select(SortOption::ALL.to_vec()),
    )
        .prop_map(|(text, filters, sort)| {
            CatalogQuery::new()
                .with_query(text)
                .with_filters(filters)
                .with_sort(sort)
        })
}

fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_telefon_scenario_over_seed_catalogue() {
    let results = CatalogQuery::new()
        .with_filters(FilterState::new().toggle_category("Telefon"))
        .apply(&seed::products());
    let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["iPhone 15", "Samsung Galaxy S23", "Xiaomi Redmi Note 12"]);
}

#[test]
fn test_inverted_price_range() {
    let state = FilterState::new().set_price_range(Some(usd(500)), Some(usd(100)));
    assert_eq!(state.price.max, state.price.min);
}

proptest! {
    #[test]
    fn prop_filter_is_subset_and_idempotent(seed in any::<u64>(), query in catalog_query()) {
        let products = generate_catalog_at(seed, 24, anchor());
        let once = query.filter(&products);
        let all = ids(&products);
        prop_assert!(ids(&once).iter().all(|id| all.contains(id)));
        prop_assert_eq!(query.filter(&once), once);
    }

    #[test]
    fn prop_every_sort_is_idempotent(seed in any::<u64>(), sort in prop::sample::select(SortOption::ALL.to_vec())) {
        let mut products = generate_catalog_at(seed, 24, anchor());
        sort.sort(&mut products);
        let once = products.clone();
        sort.sort(&mut products);
        prop_assert_eq!(products, once);
    }

    #[test]
    fn prop_featured_is_stable_partition(seed in any::<u64>()) {
        let products = generate_catalog_at(seed, 24, anchor());
        let mut sorted = products.clone();
        SortOption::Featured.sort(&mut sorted);

        let featured_end = sorted.iter().take_while(|p| p.featured).count();
        prop_assert!(sorted[featured_end..].iter().all(|p| !p.featured));

        let expected: Vec<String> = products
            .iter()
            .filter(|p| p.featured)
            .chain(products.iter().filter(|p| !p.featured))
            .map(|p| p.id.to_string())
            .collect();
        prop_assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn prop_apply_is_filter_then_sort(seed in any::<u64>(), query in catalog_query()) {
        let products = generate_catalog_at(seed, 24, anchor());
        let mut expected = query.filter(&products);
        query.sort.sort(&mut expected);
        let results = query.apply(&products);
        prop_assert_eq!(results.total, products.len());
        prop_assert_eq!(results.items, expected);
    }
}
