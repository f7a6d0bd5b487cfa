//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per product id, in the order products were first
/// added. Quantities never drop below 1; a line leaves the cart only through
/// [`Cart::remove`] or [`Cart::clear`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line gains one unit; otherwise a new line with quantity 1
    /// captures the product as it is now. Returns the line's new quantity.
    ///
    /// Returns an error if:
    /// - The product's tracked stock is zero
    /// - The product is priced in another currency
    /// - The quantity would overflow
    pub fn add(&mut self, product: &Product) -> Result<u32, CommerceError> {
        if !product.is_in_stock() {
            tracing::warn!(product = %product.id, "add to cart refused, out of stock");
            return Err(CommerceError::OutOfStock(product.name.clone()));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            tracing::debug!(product = %product.id, quantity = existing.quantity, "cart line incremented");
            return Ok(existing.quantity);
        }

        self.items.push(LineItem::new(product.clone()));
        tracing::debug!(product = %product.id, "cart line added");
        Ok(1)
    }

    /// Shift a line's quantity by `delta`, never below 1.
    ///
    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) -> Option<u32> {
        let item = self.items.iter_mut().find(|i| &i.product.id == product_id)?;
        let shifted = i64::from(item.quantity).saturating_add(delta);
        item.quantity = shifted.clamp(1, i64::from(u32::MAX)) as u32;
        tracing::debug!(product = %product_id, quantity = item.quantity, "cart quantity updated");
        Some(item.quantity)
    }

    /// Remove a line. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product = %product_id, "cart line removed");
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, item| {
                item.line_total().and_then(|line| acc.try_add(&line))
            })
            .ok_or(CommerceError::Overflow)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Per-line pricing breakdown.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok(LineItemPricing {
                    product_id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    unit_price: item.unit_price(),
                    quantity: item.quantity,
                    subtotal: item.line_total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total = Money::try_sum(line_items.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            line_items,
            item_count: self.item_count(),
            total,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product as it was when first added.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Captured unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// `unit_price * quantity`, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product::new(id, id, "test", Money::from_major(price, Currency::TRY), "Test").with_stock(10)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::TRY);
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::TRY));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::TRY);
        let p = product("prod-1", 100);
        assert_eq!(cart.add(&p).unwrap(), 1);
        assert_eq!(cart.add(&p).unwrap(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_out_of_stock_is_refused() {
        let mut cart = Cart::new(Currency::TRY);
        let sold_out = product("prod-1", 100).with_stock(0);
        assert_eq!(
            cart.add(&sold_out),
            Err(CommerceError::OutOfStock("prod-1".to_string()))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_is_not_capped_at_stock() {
        let mut cart = Cart::new(Currency::TRY);
        let p = product("prod-1", 100).with_stock(1);
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();
        assert_eq!(cart.get(&p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        assert!(matches!(
            cart.add(&product("prod-1", 1)),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::new(Currency::TRY);
        let p = product("prod-1", 100);
        cart.add(&p).unwrap();
        assert_eq!(cart.update_quantity(&p.id, 4), Some(5));
        assert_eq!(cart.update_quantity(&p.id, -1000), Some(1));
        assert_eq!(cart.update_quantity(&ProductId::new("missing"), 1), None);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new(Currency::TRY);
        let p = product("prod-1", 100);
        cart.add(&p).unwrap();
        assert!(cart.remove(&p.id));
        assert!(!cart.remove(&p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_captured_price_survives_catalogue_edit() {
        let mut cart = Cart::new(Currency::TRY);
        let mut p = product("prod-1", 100);
        cart.add(&p).unwrap();
        p.price = Money::from_major(999, Currency::TRY);
        cart.add(&p).unwrap();
        assert_eq!(cart.total().unwrap(), Money::from_major(200, Currency::TRY));
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new(Currency::TRY);
        let a = product("prod-a", 10);
        cart.add(&a).unwrap();
        cart.add(&a).unwrap();
        cart.add(&product("prod-b", 20)).unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].subtotal, Money::from_major(20, Currency::TRY));
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.total, Money::from_major(40, Currency::TRY));
        assert_eq!(pricing.total, cart.total().unwrap());
    }

    #[test]
    fn test_total_overflow() {
        let mut cart = Cart::new(Currency::TRY);
        let p = Product::new("p", "p", "d", Money::new(i64::MAX / 2, Currency::TRY), "c");
        cart.add(&p).unwrap();
        cart.update_quantity(&p.id, 3);
        assert_eq!(cart.total(), Err(CommerceError::Overflow));
        assert_eq!(cart.pricing(), Err(CommerceError::Overflow));
    }
}
