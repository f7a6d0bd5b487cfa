//! New order form.

use crate::accounts::{Customer, Order, OrderItem, OrderStatus};
use crate::cart::{Cart, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CustomerId, OrderId, ProductId};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status label given to a freshly submitted order.
pub const SUBMITTED_STATUS: &str = "Hazırlanıyor";

/// A validated order, ready to hand to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub address: String,
    pub items: Vec<LineItemPricing>,
    pub total: Money,
}

impl OrderRequest {
    /// Record the request as an order placed on `date`.
    pub fn into_order(self, date: NaiveDate) -> Order {
        Order {
            id: OrderId::generate(),
            date,
            total: self.total,
            status: OrderStatus::Other(SUBMITTED_STATUS.to_string()),
            items: self
                .items
                .into_iter()
                .map(|line| OrderItem::new(line.name, line.quantity, line.unit_price))
                .collect(),
        }
    }
}

/// Order form state: product search, cart and delivery address.
#[derive(Debug, Clone)]
pub struct NewOrder {
    customer_id: CustomerId,
    default_address: String,
    address: String,
    products: Vec<Product>,
    cart: Cart,
}

impl NewOrder {
    /// Open the form for `customer`, with the address prefilled.
    pub fn new(customer: &Customer, products: Vec<Product>) -> Self {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or(customer.balance.currency);
        Self {
            customer_id: customer.id.clone(),
            default_address: customer.address.clone(),
            address: customer.address.clone(),
            products,
            cart: Cart::new(currency),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Products whose name, description or category contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_text_or_category(query))
            .collect()
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

    /// Validate the form. Needs a non-empty cart and a non-blank address.
    pub fn prepare(&self) -> Result<OrderRequest, CommerceError> {
        if self.cart.is_empty() {
            tracing::warn!(customer = %self.customer_id, "order refused, cart is empty");
            return Err(CommerceError::EmptyCart);
        }
        if self.address.trim().is_empty() {
            tracing::warn!(customer = %self.customer_id, "order refused, no address");
            return Err(CommerceError::MissingAddress);
        }
        let pricing = self.cart.pricing()?;
        Ok(OrderRequest {
            customer_id: self.customer_id.clone(),
            address: self.address.trim().to_string(),
            items: pricing.line_items,
            total: pricing.total,
        })
    }

    /// Close the confirmation: empty the cart and restore the address.
    pub fn confirm(&mut self) {
        self.cart.clear();
        self.address = self.default_address.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn form() -> NewOrder {
        NewOrder::new(&seed::customer_by_id("cust-1").unwrap(), seed::products())
    }

    #[test]
    fn test_address_is_prefilled() {
        assert_eq!(form().address(), "Atatürk Cad. No:123 Kadıköy/İstanbul");
    }

    #[test]
    fn test_empty_cart_is_refused() {
        assert_eq!(form().prepare(), Err(CommerceError::EmptyCart));
    }

    #[test]
    fn test_blank_address_is_refused() {
        let mut form = form();
        form.add_to_cart(&ProductId::new("prod-7")).unwrap();
        form.set_address("   ");
        assert_eq!(form.prepare(), Err(CommerceError::MissingAddress));
    }

    #[test]
    fn test_prepare_and_confirm() {
        let mut form = form();
        let airpods = ProductId::new("prod-7");
        form.add_to_cart(&airpods).unwrap();
        form.update_quantity(&airpods, 2);
        form.set_address("Moda Cad. No:1");

        let request = form.prepare().unwrap();
        assert_eq!(request.address, "Moda Cad. No:1");
        assert_eq!(request.total.display(), "₺2.850,00");

        let order = request.into_order(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(order.id.as_str().starts_with("SIP-"));
        assert_eq!(order.status.label(), SUBMITTED_STATUS);
        assert_eq!(order.item_count(), 3);

        form.confirm();
        assert!(form.cart().is_empty());
        assert_eq!(form.address(), "Atatürk Cad. No:123 Kadıköy/İstanbul");
    }

    #[test]
    fn test_search_includes_category() {
        assert_eq!(form().search("bilgisayar").len(), 3);
    }
}
