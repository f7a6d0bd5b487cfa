//! Customer portal commands.

use anyhow::Result;
use bazaar_commerce::accounts::{Order, Transaction};
use bazaar_commerce::catalog::seed;
use bazaar_commerce::customer::{CustomerSummary, NewOrder, OrderFilter};
use bazaar_commerce::{CommerceError, ProductId};
use bazaar_session::Role;
use chrono::Local;
use dialoguer::{Confirm, Input};
use serde_json::json;

use super::{print_cart, CustomerArgs, CustomerPortalCommand, NewOrderArgs};
use crate::context::Context;
use crate::output::order_badge;

/// Run the customer command.
pub async fn run(args: CustomerArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        CustomerPortalCommand::Login { phone } => login(phone, ctx).await,
        CustomerPortalCommand::Logout => {
            ctx.session.logout(Role::Customer)?;
            ctx.output.success("Logged out of the customer portal");
            Ok(())
        }
        CustomerPortalCommand::Dashboard => dashboard(ctx),
        CustomerPortalCommand::Orders { filter } => orders(filter, ctx),
        CustomerPortalCommand::Order { id } => order(&id, ctx),
        CustomerPortalCommand::Transactions => transactions(ctx),
        CustomerPortalCommand::NewOrder(args) => new_order(args, ctx).await,
    }
}

async fn login(phone: Option<String>, ctx: &mut Context) -> Result<()> {
    let phone = match phone {
        Some(phone) => phone,
        None => Input::<String>::new()
            .with_prompt("Telefon Numarası")
            .allow_empty(true)
            .interact_text()?,
    };

    let spinner = ctx.output.spinner("Giriş yapılıyor...");
    let result = ctx.backend.customer_login(phone.trim()).await;
    spinner.finish_and_clear();
    let customer = result?;

    ctx.session.login_customer(&customer)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&json!({ "role": "customer", "customerId": customer.id, "name": customer.name }));
        return Ok(());
    }
    ctx.output.success(&format!("Hoş geldiniz, {}", customer.name));
    Ok(())
}

fn dashboard(ctx: &mut Context) -> Result<()> {
    let customer = ctx.session.require_customer()?;
    let summary = CustomerSummary::of(&customer);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header(&format!("Hoş geldiniz, {}", summary.name));
    ctx.output.kv("Orders", &summary.order_count.to_string());
    ctx.output.kv("Balance", &summary.balance.display());
    ctx.output
        .kv("Last transaction", &summary.last_transaction_label());

    if let Some(latest) = customer.orders.first() {
        ctx.output.header("Latest order");
        print_orders(&[latest], ctx);
    }
    Ok(())
}

fn orders(filter: OrderFilter, ctx: &mut Context) -> Result<()> {
    let customer = ctx.session.require_customer()?;
    let visible = filter.apply(&customer.orders);

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(filter.label());
    print_orders(&visible, ctx);
    Ok(())
}

fn order(id: &str, ctx: &mut Context) -> Result<()> {
    let customer = ctx.session.require_customer()?;
    let order = customer
        .order(id)
        .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
    print_order(order, ctx);
    Ok(())
}

fn transactions(ctx: &mut Context) -> Result<()> {
    let customer = ctx.session.require_customer()?;

    if ctx.output.is_json() {
        ctx.output.json(&customer.transactions);
        return Ok(());
    }

    ctx.output.header("Hesap Hareketleri");
    print_transactions(&customer.transactions, ctx);
    Ok(())
}

async fn new_order(args: NewOrderArgs, ctx: &mut Context) -> Result<()> {
    let customer = ctx.session.require_customer()?;
    let mut form = NewOrder::new(&customer, seed::products());

    for id in &args.items {
        form.add_to_cart(&ProductId::new(id.as_str()))?;
    }
    if let Some(address) = args.address {
        form.set_address(address);
    }

    if form.cart().is_empty() && !ctx.output.is_json() {
        ctx.output.header("Available products");
        for product in form.search("") {
            ctx.output.list_item(&format!(
                "{}  {}  {}",
                product.id,
                product.name,
                product.price.display()
            ));
        }
    }

    // Validation errors surface before any prompt or delay.
    form.prepare()?;

    if !ctx.output.is_json() {
        ctx.output.header("New order");
        print_cart(form.cart(), ctx)?;
        ctx.output.kv("Delivery address", form.address());
    }

    if !args.yes
        && !Confirm::new()
            .with_prompt("Place order?")
            .default(true)
            .interact()?
    {
        ctx.output.warn("Order cancelled");
        return Ok(());
    }

    let spinner = ctx.output.spinner("Sipariş gönderiliyor...");
    let result = ctx.backend.submit_order(&form).await;
    spinner.finish_and_clear();
    let request = result?;

    let address = request.address.clone();
    let order = request.into_order(Local::now().date_naive());
    form.confirm();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "order": order, "address": address }));
        return Ok(());
    }
    ctx.output
        .success(&format!("Siparişiniz alındı: {} ({})", order.id, order.total.display()));
    ctx.output.kv("Delivery address", &address);
    Ok(())
}

/// Print an order table.
pub fn print_orders(orders: &[&Order], ctx: &Context) {
    if orders.is_empty() {
        ctx.output.info("No orders found");
        return;
    }

    let widths = [10, 12, 14, 6, 14];
    ctx.output
        .table_header(&["ORDER", "DATE", "TOTAL", "ITEMS", "STATUS"], &widths);
    for order in orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.display_date(),
                &order.total.display(),
                &order.item_count().to_string(),
                &order_badge(&order.status),
            ],
            &widths,
        );
    }
}

fn print_order(order: &Order, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    ctx.output.header(&format!("Sipariş {}", order.id));
    ctx.output.kv("Date", &order.display_date());
    ctx.output.kv("Status", &order_badge(&order.status));

    let widths = [28, 6, 14];
    ctx.output.table_header(&["PRODUCT", "QTY", "PRICE"], &widths);
    for item in &order.items {
        ctx.output.table_row(
            &[&item.name, &item.quantity.to_string(), &item.price.display()],
            &widths,
        );
    }
    ctx.output.kv("Total", &order.total.display());
}

/// Print a transaction table.
pub fn print_transactions(transactions: &[Transaction], ctx: &Context) {
    if transactions.is_empty() {
        ctx.output.info("No transactions");
        return;
    }

    let widths = [12, 12, 14, 30];
    ctx.output
        .table_header(&["DATE", "KIND", "AMOUNT", "DESCRIPTION"], &widths);
    for transaction in transactions {
        ctx.output.table_row(
            &[
                &transaction.display_date(),
                transaction.kind.label(),
                &transaction.amount.display(),
                &transaction.description,
            ],
            &widths,
        );
    }
}
