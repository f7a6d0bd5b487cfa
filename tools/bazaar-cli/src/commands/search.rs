//! Product search page.

use anyhow::Result;
use bazaar_commerce::catalog::{self, seed, Product};
use bazaar_commerce::search::{CatalogQuery, FilterState, SearchResults};
use bazaar_commerce::Currency;
use console::style;

use super::{parse_money, SearchArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let (products, currency) = if args.store {
        (seed::products(), seed::CURRENCY)
    } else {
        let seed = args.seed.unwrap_or(ctx.config.catalog.seed);
        let size = args.size.unwrap_or(ctx.config.catalog.size);
        (catalog::generate_catalog(seed, size), Currency::USD)
    };

    let query = build_query(&args, ctx, currency)?;
    let results = query.apply(&products);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    print_results(&results, &query, args.facets, ctx);
    Ok(())
}

fn build_query(args: &SearchArgs, ctx: &Context, currency: Currency) -> Result<CatalogQuery> {
    let ceiling = if args.store {
        None
    } else {
        ctx.config.catalog.price_ceiling_in(currency)?
    };
    let mut filters = match ceiling {
        Some(ceiling) => FilterState::with_price_ceiling(ceiling),
        None => FilterState::new(),
    };

    for category in &args.categories {
        filters = filters.toggle_category(category.as_str());
    }
    for color in &args.colors {
        filters = filters.toggle_color(color.to_lowercase());
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args
            .min_price
            .as_deref()
            .map(|p| parse_money(p, currency))
            .transpose()?
            .or(filters.price.min);
        let max = args
            .max_price
            .as_deref()
            .map(|p| parse_money(p, currency))
            .transpose()?
            .or(filters.price.max);
        filters = filters.set_price_range(min, max);
    }

    if args.min_rating > 0 {
        filters = filters.set_min_rating(args.min_rating);
    }

    Ok(CatalogQuery::new()
        .with_query(args.query.as_str())
        .with_filters(filters)
        .with_sort(args.sort))
}

fn print_results(results: &SearchResults<Product>, query: &CatalogQuery, facets: bool, ctx: &Context) {
    ctx.output.header(&format!(
        "Products ({}, {} filter(s) active)",
        query.sort.display_name(),
        query.filters.active_count()
    ));

    if results.is_empty() {
        ctx.output.info("No products found");
        ctx.output.info("Try adjusting your search or filter criteria.");
        return;
    }

    let widths = [8, 30, 12, 8, 18, 14];
    ctx.output
        .table_header(&["ID", "NAME", "CATEGORY", "COLOR", "PRICE", "RATING"], &widths);
    for product in &results.items {
        let name = if product.featured {
            format!("{} {}", product.name, style("★").yellow())
        } else {
            product.name.clone()
        };
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.category,
                product.color.as_deref().unwrap_or("-"),
                &price_cell(product),
                &format!("{} ({})", product.stars().render(), product.review_count),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output
        .info(&format!("Showing {} of {} products", results.len(), results.total));

    if facets {
        for facet in &results.facets {
            ctx.output.header(&facet.name);
            for value in &facet.values {
                let mark = if value.selected { "[x]" } else { "[ ]" };
                ctx.output
                    .list_item(&format!("{mark} {} ({})", value.value, value.count));
            }
        }
    }
}

fn price_cell(product: &Product) -> String {
    if product.is_discounted() {
        format!(
            "{} {}",
            product.sale_price().display(),
            style(format!("-{}%", product.discount)).red()
        )
    } else {
        product.price.display()
    }
}
