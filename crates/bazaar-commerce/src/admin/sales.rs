//! Sales desk and receipts.

use crate::accounts::Customer;
use crate::cart::{Cart, LineItemPricing};
use crate::error::CommerceError;
use crate::ids::{next_stamp, CustomerId, ProductId, ReceiptId};
use crate::catalog::Product;
use crate::money::Money;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Name printed on receipts when no customer is selected.
pub const GUEST_CUSTOMER: &str = "Misafir Müşteri";

/// Customer block of a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptCustomer {
    pub name: String,
    pub phone: String,
}

impl ReceiptCustomer {
    fn guest() -> Self {
        Self {
            name: GUEST_CUSTOMER.to_string(),
            phone: "-".to_string(),
        }
    }
}

/// A completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// `MKB-` and the last six digits of a millisecond stamp.
    pub id: ReceiptId,
    pub issued_at: NaiveDateTime,
    pub customer: ReceiptCustomer,
    pub items: Vec<LineItemPricing>,
    pub total: Money,
}

impl Receipt {
    /// "15.04.2024"
    pub fn date(&self) -> String {
        self.issued_at.format("%d.%m.%Y").to_string()
    }

    /// "14:05:09"
    pub fn time(&self) -> String {
        self.issued_at.format("%H:%M:%S").to_string()
    }
}

fn receipt_id() -> ReceiptId {
    ReceiptId::new(format!("{}-{:06}", ReceiptId::PREFIX, next_stamp() % 1_000_000))
}

/// Point-of-sale screen: product search, optional customer, cart.
#[derive(Debug, Clone)]
pub struct SalesDesk {
    products: Vec<Product>,
    customers: Vec<Customer>,
    cart: Cart,
    customer: Option<CustomerId>,
}

impl SalesDesk {
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        Self {
            products,
            customers,
            cart: Cart::new(currency),
            customer: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Products whose name, description or category contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_text_or_category(query))
            .collect()
    }

    /// Currently selected customer.
    pub fn selected_customer(&self) -> Option<&Customer> {
        let id = self.customer.as_ref()?;
        self.customers.iter().find(|c| &c.id == id)
    }

    /// Attach the sale to a customer.
    pub fn select_customer(&mut self, id: &CustomerId) -> Result<&Customer, CommerceError> {
        let customer = self
            .customers
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CustomerNotFound(id.to_string()))?;
        self.customer = Some(customer.id.clone());
        Ok(customer)
    }

    /// Sell to a walk-in guest.
    pub fn clear_customer(&mut self) {
        self.customer = None;
    }

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<u32, CommerceError> {
        let product = self
            .products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        self.cart.add(product)
    }

    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        self.cart.update_quantity(id, delta)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    /// Build the receipt for the current cart.
    pub fn complete_sale(&self) -> Result<Receipt, CommerceError> {
        self.complete_sale_at(Local::now().naive_local())
    }

    /// Build the receipt as of `issued_at`. Refused on an empty cart.
    pub fn complete_sale_at(&self, issued_at: NaiveDateTime) -> Result<Receipt, CommerceError> {
        if self.cart.is_empty() {
            tracing::warn!("sale refused, cart is empty");
            return Err(CommerceError::EmptyCart);
        }
        let pricing = self.cart.pricing()?;
        let customer = self
            .selected_customer()
            .map(|c| ReceiptCustomer {
                name: c.name.clone(),
                phone: c.phone.clone(),
            })
            .unwrap_or_else(ReceiptCustomer::guest);

        let receipt = Receipt {
            id: receipt_id(),
            issued_at,
            customer,
            items: pricing.line_items,
            total: pricing.total,
        };
        tracing::info!(
            receipt = %receipt.id,
            customer = %receipt.customer.name,
            total = %receipt.total,
            "sale completed"
        );
        Ok(receipt)
    }

    /// Close the receipt: empty the cart and drop the customer.
    pub fn confirm_sale(&mut self) {
        self.cart.clear();
        self.customer = None;
    }
}
