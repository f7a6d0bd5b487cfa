//! Product book.

use crate::catalog::{seed, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Category options offered by the product form.
pub const PRODUCT_CATEGORIES: [&str; 5] = ["Telefon", "Tablet", "Bilgisayar", "Aksesuar", "Diğer"];

/// Image assigned to products added without one.
pub const NEW_PRODUCT_IMAGE: &str = "/placeholder.svg?height=200&width=200&text=Ürün+Resmi";

/// Fields of the add-product form. Blank fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Option<Money>,
    pub category: String,
    pub stock: Option<u32>,
    pub image: String,
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl ProductDraft {
    fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let price = self.price.unwrap_or_else(|| Money::zero(currency));
        if price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }
        if price.is_negative() {
            return Err(CommerceError::ValidationError(
                "price must not be negative".to_string(),
            ));
        }

        let mut product = Product::new(
            ProductId::generate(),
            or_default(self.name, "Yeni Ürün"),
            or_default(self.description, "Ürün açıklaması"),
            price,
            or_default(self.category, "Diğer"),
        )
        .with_stock(self.stock.unwrap_or(0));
        product.image = or_default(self.image, NEW_PRODUCT_IMAGE);
        Ok(product)
    }
}

/// The admin's working copy of the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBook {
    products: Vec<Product>,
    currency: Currency,
}

impl ProductBook {
    pub fn new(products: Vec<Product>, currency: Currency) -> Self {
        Self { products, currency }
    }

    /// Book loaded with the seed catalogue.
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::CURRENCY)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose name or description contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches_text(query)).collect()
    }

    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Add a product from the form. New products go first.
    pub fn add(&mut self, draft: ProductDraft) -> Result<&Product, CommerceError> {
        let product = draft.into_product(self.currency)?;
        tracing::info!(product = %product.id, name = %product.name, "product added");
        self.products.insert(0, product);
        Ok(&self.products[0])
    }

    /// Replace the product with the same id.
    pub fn edit(&mut self, product: Product) -> Result<(), CommerceError> {
        if product.price.is_negative() {
            return Err(CommerceError::ValidationError(
                "price must not be negative".to_string(),
            ));
        }
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CommerceError::ProductNotFound(product.id.to_string()))?;
        tracing::info!(product = %product.id, "product updated");
        *slot = product;
        Ok(())
    }

    /// Delete a product, returning it.
    pub fn delete(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        tracing::info!(product = %id, "product deleted");
        Ok(self.products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_or_description() {
        let book = ProductBook::seeded();
        let names: Vec<&str> = book.search("samsung").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Samsung Galaxy S23", "Samsung Galaxy Tab S9"]);
        assert!(book.search("telefon").len() >= 3);
        assert!(book.search("aksesuar").is_empty());
        assert_eq!(book.search("").len(), 12);
    }

    #[test]
    fn test_add_uses_defaults_and_goes_first() {
        let mut book = ProductBook::seeded();
        let added = book.add(ProductDraft::default()).unwrap().clone();
        assert_eq!(added.name, "Yeni Ürün");
        assert_eq!(added.description, "Ürün açıklaması");
        assert_eq!(added.category, "Diğer");
        assert_eq!(added.stock, Some(0));
        assert!(added.price.is_zero());
        assert!(added.id.as_str().starts_with("prod-"));
        assert_eq!(book.products()[0].id, added.id);
        assert_eq!(book.len(), 13);
    }

    #[test]
    fn test_add_keeps_given_fields() {
        let mut book = ProductBook::seeded();
        let draft = ProductDraft {
            name: "Kindle".to_string(),
            price: Some(Money::from_major(300, Currency::TRY)),
            category: "Tablet".to_string(),
            stock: Some(4),
            ..ProductDraft::default()
        };
        let added = book.add(draft).unwrap();
        assert_eq!(added.name, "Kindle");
        assert_eq!(added.category, "Tablet");
        assert_eq!(added.stock, Some(4));
        assert_eq!(added.image, NEW_PRODUCT_IMAGE);
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut book = ProductBook::seeded();
        let draft = ProductDraft {
            price: Some(Money::from_major(-1, Currency::TRY)),
            ..ProductDraft::default()
        };
        assert!(matches!(book.add(draft), Err(CommerceError::ValidationError(_))));
        assert_eq!(book.len(), 12);
    }

    #[test]
    fn test_edit_and_delete() {
        let mut book = ProductBook::seeded();
        let id = ProductId::new("prod-2");
        let mut edited = book.get(&id).unwrap().clone();
        edited.stock = Some(0);
        book.edit(edited).unwrap();
        assert_eq!(book.get(&id).unwrap().stock, Some(0));

        let removed = book.delete(&id).unwrap();
        assert_eq!(removed.name, "Samsung Galaxy S23");
        assert_eq!(
            book.delete(&id),
            Err(CommerceError::ProductNotFound("prod-2".to_string()))
        );
        assert!(book.edit(removed).is_err());
    }
}
