//! Admin panel commands.
//!
//! Product and customer edits apply to this invocation's working copy only;
//! every run starts again from the store's seed data.

use anyhow::Result;
use bazaar_commerce::accounts::{Customer, CustomerStatus};
use bazaar_commerce::admin::{
    CustomerBook, CustomerDraft, DashboardStats, ProductBook, ProductDraft, Receipt, SalesDesk,
    LOW_STOCK_THRESHOLD,
};
use bazaar_commerce::catalog::{seed, Product};
use bazaar_commerce::{CustomerId, ProductId};
use dialoguer::{Confirm, Input, Password};
use serde_json::json;

use super::{
    parse_money, print_cart, AdminArgs, AdminCommand, CustomerCommand, CustomerFields,
    ProductCommand, ProductFields, SaleArgs, StatusArg,
};
use crate::commands::customer::{print_orders, print_transactions};
use crate::context::Context;
use crate::output::{customer_badge, stock_cell};

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        AdminCommand::Login { username, password } => login(username, password, ctx).await,
        AdminCommand::Logout => logout(ctx),
        AdminCommand::Dashboard => {
            ctx.session.require_admin()?;
            dashboard(ctx)
        }
        AdminCommand::Products { command } => {
            ctx.session.require_admin()?;
            products(command, ctx)
        }
        AdminCommand::Customers { command } => {
            ctx.session.require_admin()?;
            customers(command, ctx)
        }
        AdminCommand::Sale(args) => {
            ctx.session.require_admin()?;
            sale(args, ctx)
        }
    }
}

async fn login(username: Option<String>, password: Option<String>, ctx: &mut Context) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Kullanıcı Adı")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Şifre")
            .allow_empty_password(true)
            .interact()?,
    };

    let spinner = ctx.output.spinner("Giriş yapılıyor...");
    let result = ctx.backend.admin_login(&username, &password).await;
    spinner.finish_and_clear();
    let credentials = result?;

    ctx.session.login_admin()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "role": "admin", "username": credentials.username }));
        return Ok(());
    }
    ctx.output
        .success(&format!("Logged in to the admin panel as {}", credentials.username));
    Ok(())
}

fn logout(ctx: &mut Context) -> Result<()> {
    ctx.session.logout(bazaar_session::Role::Admin)?;
    ctx.output.success("Logged out of the admin panel");
    Ok(())
}

fn dashboard(ctx: &Context) -> Result<()> {
    let products = ProductBook::seeded();
    let customers = CustomerBook::seeded();
    let stats = DashboardStats::compute(products.products(), customers.customers(), seed::CURRENCY)?;

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Products", &stats.product_count.to_string());
    ctx.output.kv(
        "Customers",
        &format!("{} ({} active)", stats.customer_count, stats.active_customers),
    );
    ctx.output.kv("Total balance", &stats.total_balance.display());
    ctx.output.kv("Orders", &stats.order_count.to_string());
    ctx.output.kv("Revenue", &stats.revenue.display());

    if !stats.low_stock.is_empty() {
        ctx.output.header(&format!("Low stock (≤ {LOW_STOCK_THRESHOLD})"));
        for name in &stats.low_stock {
            ctx.output.list_item(name);
        }
    }
    Ok(())
}

fn products(command: Option<ProductCommand>, ctx: &Context) -> Result<()> {
    let mut book = ProductBook::seeded();

    match command.unwrap_or(ProductCommand::List { query: None }) {
        ProductCommand::List { query } => {
            let found = book.search(query.as_deref().unwrap_or(""));
            list_products(&found, ctx);
        }
        ProductCommand::Show { id } => show_product(book.get(&ProductId::new(id))?, ctx),
        ProductCommand::Add(fields) => {
            let product = book.add(product_draft(fields)?)?;
            ctx.output.success(&format!("Added product {}", product.id));
            show_product(product, ctx);
        }
        ProductCommand::Edit { id, fields } => {
            let mut product = book.get(&ProductId::new(id))?.clone();
            apply_product_fields(&mut product, fields)?;
            book.edit(product.clone())?;
            ctx.output.success(&format!("Updated product {}", product.id));
            show_product(&product, ctx);
        }
        ProductCommand::Delete { id, yes } => {
            let id = ProductId::new(id);
            let name = book.get(&id)?.name.clone();
            if !yes && !confirm(&format!("Delete product '{name}'?"))? {
                ctx.output.warn("Deletion cancelled");
                return Ok(());
            }
            book.delete(&id)?;
            ctx.output.success(&format!("Deleted product {id}"));
            let remaining: Vec<&Product> = book.products().iter().collect();
            list_products(&remaining, ctx);
        }
    }
    Ok(())
}

fn product_draft(fields: ProductFields) -> Result<ProductDraft> {
    Ok(ProductDraft {
        name: fields.name.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        price: fields
            .price
            .as_deref()
            .map(|p| parse_money(p, seed::CURRENCY))
            .transpose()?,
        category: fields.category.unwrap_or_default(),
        stock: fields.stock,
        image: fields.image.unwrap_or_default(),
    })
}

fn apply_product_fields(product: &mut Product, fields: ProductFields) -> Result<()> {
    if let Some(name) = fields.name {
        product.name = name;
    }
    if let Some(description) = fields.description {
        product.description = description;
    }
    if let Some(price) = fields.price {
        let price = parse_money(&price, product.price.currency)?;
        anyhow::ensure!(!price.is_negative(), "Price must not be negative");
        product.price = price;
    }
    if let Some(category) = fields.category {
        product.category = category;
    }
    if let Some(stock) = fields.stock {
        product.stock = Some(stock);
    }
    if let Some(image) = fields.image {
        product.image = image;
    }
    Ok(())
}

fn list_products(products: &[&Product], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header("Products");
    if products.is_empty() {
        ctx.output.info("No products found");
        return;
    }

    let widths = [10, 24, 12, 14, 6];
    ctx.output
        .table_header(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.category,
                &product.price.display(),
                &stock_cell(product.stock, LOW_STOCK_THRESHOLD),
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));
}

fn show_product(product: &Product, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(product);
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Description", &product.description);
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.price.display());
    ctx.output
        .kv("Stock", &stock_cell(product.stock, LOW_STOCK_THRESHOLD));
    ctx.output.kv("Image", &product.image);
}

fn customers(command: Option<CustomerCommand>, ctx: &Context) -> Result<()> {
    let mut book = CustomerBook::seeded();

    match command.unwrap_or(CustomerCommand::List { query: None }) {
        CustomerCommand::List { query } => {
            let found = book.search(query.as_deref().unwrap_or(""));
            list_customers(&found, ctx);
        }
        CustomerCommand::Show { id } => show_customer(book.get(&CustomerId::new(id))?, true, ctx),
        CustomerCommand::Add(fields) => {
            let customer = book.add(customer_draft(fields)?)?;
            ctx.output.success(&format!("Added customer {}", customer.id));
            show_customer(customer, false, ctx);
        }
        CustomerCommand::Edit { id, fields } => {
            let mut customer = book.get(&CustomerId::new(id))?.clone();
            apply_customer_fields(&mut customer, fields)?;
            book.edit(customer.clone())?;
            ctx.output.success(&format!("Updated customer {}", customer.id));
            show_customer(&customer, false, ctx);
        }
        CustomerCommand::Delete { id, yes } => {
            let id = CustomerId::new(id);
            let name = book.get(&id)?.name.clone();
            if !yes && !confirm(&format!("Delete customer '{name}'?"))? {
                ctx.output.warn("Deletion cancelled");
                return Ok(());
            }
            book.delete(&id)?;
            ctx.output.success(&format!("Deleted customer {id}"));
            let remaining: Vec<&Customer> = book.customers().iter().collect();
            list_customers(&remaining, ctx);
        }
    }
    Ok(())
}

fn status_of(arg: StatusArg) -> CustomerStatus {
    match arg {
        StatusArg::Active => CustomerStatus::Active,
        StatusArg::Passive => CustomerStatus::Passive,
    }
}

fn customer_draft(fields: CustomerFields) -> Result<CustomerDraft> {
    Ok(CustomerDraft {
        name: fields.name.unwrap_or_default(),
        phone: fields.phone.unwrap_or_default(),
        email: fields.email.unwrap_or_default(),
        address: fields.address.unwrap_or_default(),
        balance: fields
            .balance
            .as_deref()
            .map(|b| parse_money(b, seed::CURRENCY))
            .transpose()?,
        status: fields.status.map(status_of),
    })
}

fn apply_customer_fields(customer: &mut Customer, fields: CustomerFields) -> Result<()> {
    if let Some(name) = fields.name {
        customer.name = name;
    }
    if let Some(phone) = fields.phone {
        customer.phone = phone;
    }
    if let Some(email) = fields.email {
        customer.email = email;
    }
    if let Some(address) = fields.address {
        customer.address = address;
    }
    if let Some(balance) = fields.balance {
        customer.balance = parse_money(&balance, customer.balance.currency)?;
    }
    if let Some(status) = fields.status {
        customer.status = status_of(status);
    }
    Ok(())
}

fn list_customers(customers: &[&Customer], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&customers);
        return;
    }

    ctx.output.header("Customers");
    if customers.is_empty() {
        ctx.output.info("No customers found");
        return;
    }

    let widths = [8, 18, 13, 24, 12, 6];
    ctx.output
        .table_header(&["ID", "NAME", "PHONE", "EMAIL", "BALANCE", "STATUS"], &widths);
    for customer in customers {
        ctx.output.table_row(
            &[
                customer.id.as_str(),
                &customer.name,
                &customer.phone,
                &customer.email,
                &customer.balance.display(),
                &customer_badge(customer.status),
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} customer(s)", customers.len()));
}

fn show_customer(customer: &Customer, with_history: bool, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(customer);
        return;
    }

    ctx.output.header(&customer.name);
    ctx.output.kv("ID", customer.id.as_str());
    ctx.output.kv("Phone", &customer.phone);
    ctx.output.kv("Email", &customer.email);
    ctx.output.kv("Address", &customer.address);
    ctx.output.kv("Balance", &customer.balance.display());
    ctx.output.kv("Status", &customer_badge(customer.status));

    if with_history {
        ctx.output.header("Orders");
        print_orders(&customer.orders.iter().collect::<Vec<_>>(), ctx);
        ctx.output.header("Transactions");
        print_transactions(&customer.transactions, ctx);
    }
}

fn sale(args: SaleArgs, ctx: &Context) -> Result<()> {
    let mut desk = SalesDesk::new(seed::products(), seed::customers());

    if let Some(id) = &args.customer {
        desk.select_customer(&CustomerId::new(id.as_str()))?;
    }
    for id in &args.items {
        desk.add_to_cart(&ProductId::new(id.as_str()))?;
    }

    if !ctx.output.is_json() {
        ctx.output.header("Sale");
        let customer = desk
            .selected_customer()
            .map_or(bazaar_commerce::admin::GUEST_CUSTOMER, |c| c.name.as_str());
        ctx.output.kv("Customer", customer);
        print_cart(desk.cart(), ctx)?;
    }

    if !args.yes && !confirm("Complete sale?")? {
        ctx.output.warn("Sale cancelled");
        return Ok(());
    }

    let receipt = desk.complete_sale()?;
    print_receipt(&receipt, ctx);
    desk.confirm_sale();
    Ok(())
}

fn print_receipt(receipt: &Receipt, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(receipt);
        return;
    }

    ctx.output.header(&format!("Receipt {}", receipt.id));
    ctx.output.kv("Date", &receipt.date());
    ctx.output.kv("Time", &receipt.time());
    ctx.output.kv("Customer", &receipt.customer.name);
    ctx.output.kv("Phone", &receipt.customer.phone);

    let widths = [28, 18, 14];
    ctx.output.table_header(&["PRODUCT", "UNIT", "SUBTOTAL"], &widths);
    for line in &receipt.items {
        ctx.output
            .table_row(&[&line.name, &line.unit_label(), &line.subtotal.display()], &widths);
    }
    ctx.output.kv("Total", &receipt.total.display());
    ctx.output.success("Sale completed");
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}
