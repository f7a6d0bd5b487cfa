//! Customer book.

use crate::accounts::{Customer, CustomerStatus};
use crate::catalog::seed;
use crate::error::CommerceError;
use crate::ids::CustomerId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Fields of the add-customer form. Blank fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub balance: Option<Money>,
    pub status: Option<CustomerStatus>,
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl CustomerDraft {
    fn into_customer(self, currency: Currency) -> Result<Customer, CommerceError> {
        let balance = self.balance.unwrap_or_else(|| Money::zero(currency));
        if balance.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: balance.currency.code().to_string(),
            });
        }
        Ok(Customer {
            id: CustomerId::generate(),
            name: or_default(self.name, "Yeni Müşteri"),
            phone: or_default(self.phone, "05XX XXX XX XX"),
            email: or_default(self.email, "ornek@email.com"),
            address: or_default(self.address, "Adres bilgisi"),
            balance,
            status: self.status.unwrap_or_default(),
            orders: Vec::new(),
            transactions: Vec::new(),
        })
    }
}

/// The admin's working copy of the customer list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerBook {
    customers: Vec<Customer>,
    currency: Currency,
}

impl CustomerBook {
    pub fn new(customers: Vec<Customer>, currency: Currency) -> Self {
        Self {
            customers,
            currency,
        }
    }

    /// Book loaded with the seed customers.
    pub fn seeded() -> Self {
        Self::new(seed::customers(), seed::CURRENCY)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customers matching on name, email or phone.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.matches_query(query))
            .collect()
    }

    /// View a customer.
    pub fn get(&self, id: &CustomerId) -> Result<&Customer, CommerceError> {
        self.customers
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CustomerNotFound(id.to_string()))
    }

    /// Add a customer from the form. New customers go first.
    pub fn add(&mut self, draft: CustomerDraft) -> Result<&Customer, CommerceError> {
        let customer = draft.into_customer(self.currency)?;
        tracing::info!(customer = %customer.id, name = %customer.name, "customer added");
        self.customers.insert(0, customer);
        Ok(&self.customers[0])
    }

    /// Replace the customer with the same id.
    pub fn edit(&mut self, customer: Customer) -> Result<(), CommerceError> {
        let slot = self
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or_else(|| CommerceError::CustomerNotFound(customer.id.to_string()))?;
        tracing::info!(customer = %customer.id, "customer updated");
        *slot = customer;
        Ok(())
    }

    /// Delete a customer, returning it.
    pub fn delete(&mut self, id: &CustomerId) -> Result<Customer, CommerceError> {
        let index = self
            .customers
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CustomerNotFound(id.to_string()))?;
        tracing::info!(customer = %id, "customer deleted");
        Ok(self.customers.remove(index))
    }
}
