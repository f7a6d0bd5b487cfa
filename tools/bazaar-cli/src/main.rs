//! Bazaar CLI - storefront demo on the command line.
//!
//! Commands:
//! - `bazaar search` - Filter and sort the product catalogue
//! - `bazaar admin` - Admin panel: dashboard, products, customers, sales
//! - `bazaar customer` - Customer portal: orders, transactions, new orders
//! - `bazaar config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use bazaar_session::SessionError;
use clap::{Parser, Subcommand};

use commands::{AdminArgs, ConfigArgs, CustomerArgs, SearchArgs};

/// Bazaar CLI - browse the catalogue and run the admin and customer portals
#[derive(Parser)]
#[command(name = "bazaar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the product catalogue
    Search(SearchArgs),

    /// Admin panel
    Admin(AdminArgs),

    /// Customer portal
    Customer(CustomerArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config and open the session store
    let mut ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = bazaar_observability::init(&ctx.config.logging, cli.verbose) {
        ctx.output.warn(&e.to_string());
    }
    tracing::debug!(config = ?ctx.config_path, "configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &mut ctx).await,
        Commands::Customer(args) => commands::customer::run(args, &mut ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        if let Some(SessionError::NotLoggedIn(role)) = e.downcast_ref::<SessionError>() {
            ctx.output
                .info(&format!("Run `bazaar {} login` first.", role.as_str()));
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_commerce::customer::OrderFilter;
    use bazaar_commerce::search::SortOption;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::try_parse_from([
            "bazaar", "search", "--query", "pro", "--category", "Electronics", "--category",
            "Books", "--sort", "price-high", "--min-rating", "4", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "pro");
                assert_eq!(args.categories, vec!["Electronics", "Books"]);
                assert_eq!(args.sort, SortOption::PriceHigh);
                assert_eq!(args.min_rating, 4);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["bazaar", "search", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn test_parse_order_filter() {
        let cli = Cli::try_parse_from(["bazaar", "customer", "orders", "--filter", "shipping"])
            .unwrap();
        match cli.command {
            Commands::Customer(CustomerArgs {
                command: commands::CustomerPortalCommand::Orders { filter },
            }) => assert_eq!(filter, OrderFilter::Shipping),
            _ => panic!("expected customer orders"),
        }
    }

    #[test]
    fn test_sale_requires_items() {
        assert!(Cli::try_parse_from(["bazaar", "admin", "sale"]).is_err());
        assert!(Cli::try_parse_from(["bazaar", "admin", "sale", "-i", "prod-1", "-i", "prod-1"]).is_ok());
    }
}
