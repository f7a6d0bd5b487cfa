//! CLI command implementations.

pub mod admin;
pub mod config;
pub mod customer;
pub mod search;

use anyhow::{bail, Result};
use bazaar_commerce::cart::Cart;
use bazaar_commerce::customer::OrderFilter;
use bazaar_commerce::search::SortOption;
use bazaar_commerce::{Currency, Money};
use clap::{Args, Subcommand, ValueEnum};

use crate::context::Context;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against product name and description.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to include (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Color to include (repeatable).
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum rating (1-5).
    #[arg(long, default_value_t = 0)]
    pub min_rating: u8,

    /// Sort order: featured, newest, price-low, price-high, rating.
    #[arg(short, long, default_value = "featured")]
    pub sort: SortOption,

    /// RNG seed for the generated catalogue.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of generated products.
    #[arg(long)]
    pub size: Option<usize>,

    /// Search the store's own catalogue instead of the generated one.
    #[arg(long)]
    pub store: bool,

    /// Show category and color counts.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Log in to the admin panel.
    Login {
        /// Username (prompted when omitted).
        #[arg(short, long)]
        username: Option<String>,
        /// Password (prompted when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out of the admin panel.
    Logout,
    /// Show store figures.
    Dashboard,
    /// Manage products.
    Products {
        #[command(subcommand)]
        command: Option<ProductCommand>,
    },
    /// Manage customers.
    Customers {
        #[command(subcommand)]
        command: Option<CustomerCommand>,
    },
    /// Ring up a sale and print the receipt.
    Sale(SaleArgs),
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List products.
    List {
        /// Filter by name or description.
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one product.
    Show { id: String },
    /// Add a product.
    Add(ProductFields),
    /// Edit a product.
    Edit {
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Product form fields. Omitted fields keep their current or default value.
#[derive(Args, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum CustomerCommand {
    /// List customers.
    List {
        /// Filter by name, phone or email.
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a customer with orders and transactions.
    Show { id: String },
    /// Add a customer.
    Add(CustomerFields),
    /// Edit a customer.
    Edit {
        id: String,
        #[command(flatten)]
        fields: CustomerFields,
    },
    /// Delete a customer.
    Delete {
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Customer form fields. Omitted fields keep their current or default value.
#[derive(Args, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub balance: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Passive,
}

/// Arguments for the sale command.
#[derive(Args)]
pub struct SaleArgs {
    /// Product to add, once per unit (repeatable).
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Customer id. Omit for a walk-in guest.
    #[arg(long)]
    pub customer: Option<String>,

    /// Skip confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the customer command.
#[derive(Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerPortalCommand,
}

#[derive(Subcommand)]
pub enum CustomerPortalCommand {
    /// Log in with a phone number.
    Login {
        /// Phone number, 05XXXXXXXXX (prompted when omitted).
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Log out of the customer portal.
    Logout,
    /// Show the account summary.
    Dashboard,
    /// List orders.
    Orders {
        /// all, delivered, shipping or cancelled.
        #[arg(short, long, default_value = "all")]
        filter: OrderFilter,
    },
    /// Show one order.
    Order { id: String },
    /// List account transactions.
    Transactions,
    /// Place a new order.
    NewOrder(NewOrderArgs),
}

/// Arguments for the new-order command.
#[derive(Args)]
pub struct NewOrderArgs {
    /// Product to add, once per unit (repeatable).
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// Delivery address. Defaults to the address on file.
    #[arg(short, long)]
    pub address: Option<String>,

    /// Skip confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config and session file locations.
    Path,
}

/// Parse a price like `2499`, `2499.99` or `2499,99` into minor units.
pub fn parse_money(input: &str, currency: Currency) -> Result<Money> {
    let trimmed = input.trim().trim_start_matches(currency.symbol());
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (major, minor) = match digits.split_once(['.', ',']) {
        Some((major, minor)) => (major, minor),
        None => (digits, ""),
    };

    let places = currency.decimal_places() as usize;
    let valid = !major.is_empty()
        && major.chars().all(|c| c.is_ascii_digit())
        && minor.chars().all(|c| c.is_ascii_digit())
        && minor.len() <= places;
    if !valid {
        bail!("Invalid amount: '{}'", input);
    }

    let scale = 10_i64.pow(places as u32);
    let minor_units = if minor.is_empty() {
        0
    } else {
        format!("{minor:0<places$}").parse::<i64>()?
    };
    let amount = major
        .parse::<i64>()?
        .checked_mul(scale)
        .and_then(|m| m.checked_add(minor_units))
        .ok_or_else(|| anyhow::anyhow!("Amount out of range: '{}'", input))?;

    Ok(Money::new(if negative { -amount } else { amount }, currency))
}

/// Print cart lines and the total.
pub fn print_cart(cart: &Cart, ctx: &Context) -> Result<()> {
    let pricing = cart.pricing()?;
    let widths = [10, 28, 18, 14];
    ctx.output.table_header(&["ID", "PRODUCT", "UNIT", "SUBTOTAL"], &widths);
    for line in &pricing.line_items {
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.name,
                &line.unit_label(),
                &line.subtotal.display(),
            ],
            &widths,
        );
    }
    ctx.output.kv("Items", &pricing.item_count.to_string());
    ctx.output.kv("Total", &pricing.total.display());
    Ok(())
}
