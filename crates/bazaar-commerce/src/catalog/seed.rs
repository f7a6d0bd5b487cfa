//! Fixed seed data for the admin and customer portals.
//!
//! Prices are whole lira. The data is loaded fresh at every mount and is
//! never written back.

use crate::accounts::{
    Customer, CustomerStatus, Order, OrderItem, OrderStatus, Transaction, TransactionKind,
};
use crate::catalog::Product;
use crate::ids::{CustomerId, OrderId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;

/// Currency of the portal catalogue.
pub const CURRENCY: Currency = Currency::TRY;

fn lira(units: i64) -> Money {
    Money::from_major(units, CURRENCY)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn product(
    n: u32,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    stock: u32,
    image_text: &str,
) -> Product {
    let mut product = Product::new(format!("prod-{n}"), name, description, lira(price), category)
        .with_stock(stock);
    product.image = format!("/placeholder.svg?height=200&width=200&text={image_text}");
    product
}

/// The twelve-product portal catalogue.
pub fn products() -> Vec<Product> {
    vec![
        product(1, "iPhone 15", "Apple'ın en yeni akıllı telefonu", 2499, "Telefon", 15, "iPhone+15"),
        product(2, "Samsung Galaxy S23", "Samsung'un amiral gemisi telefonu", 1250, "Telefon", 8, "Galaxy+S23"),
        product(3, "Xiaomi Redmi Note 12", "Uygun fiyatlı performans telefonu", 899, "Telefon", 20, "Redmi+Note+12"),
        product(4, "iPad 10. Nesil", "Apple'ın giriş seviyesi tableti", 1850, "Tablet", 12, "iPad"),
        product(5, "MacBook Air M2", "İnce ve hafif dizüstü bilgisayar", 3750, "Bilgisayar", 5, "MacBook+Air"),
        product(6, "Apple Watch Series 9", "Apple'ın en yeni akıllı saati", 1200, "Aksesuar", 10, "Apple+Watch"),
        product(7, "AirPods Pro", "Gürültü önleyici kablosuz kulaklık", 950, "Aksesuar", 18, "AirPods+Pro"),
        product(8, "Samsung Galaxy Tab S9", "Samsung'un üst seviye tableti", 1650, "Tablet", 7, "Galaxy+Tab+S9"),
        product(9, "Lenovo ThinkPad X1", "İş odaklı dizüstü bilgisayar", 2950, "Bilgisayar", 3, "ThinkPad+X1"),
        product(10, "Logitech MX Master 3", "Profesyonel kablosuz mouse", 250, "Aksesuar", 25, "MX+Master+3"),
        product(11, "Sony WH-1000XM5", "Premium gürültü önleyici kulaklık", 850, "Aksesuar", 9, "Sony+WH-1000XM5"),
        product(12, "Dell XPS 15", "Yüksek performanslı dizüstü bilgisayar", 3250, "Bilgisayar", 4, "Dell+XPS+15"),
    ]
}

fn order(id: &str, on: NaiveDate, status: OrderStatus, name: &str, price: i64) -> Order {
    Order {
        id: OrderId::new(id),
        date: on,
        total: lira(price),
        status,
        items: vec![OrderItem::new(name, 1, lira(price))],
    }
}

fn transaction(kind: TransactionKind, on: NaiveDate, amount: i64, description: &str) -> Transaction {
    Transaction {
        kind,
        date: on,
        amount: lira(amount),
        description: description.to_string(),
    }
}

/// The three seed customers with their orders and transactions.
pub fn customers() -> Vec<Customer> {
    use OrderStatus::{Cancelled, Delivered, Shipping};
    use TransactionKind::{Payment, Purchase, Refund};

    vec![
        Customer {
            id: CustomerId::new("cust-1"),
            name: "Ahmet Yılmaz".to_string(),
            phone: "05551234567".to_string(),
            email: "ahmet@example.com".to_string(),
            address: "Atatürk Cad. No:123 Kadıköy/İstanbul".to_string(),
            balance: Money::new(125_075, CURRENCY),
            status: CustomerStatus::Active,
            orders: vec![
                order("SIP-1001", date(2024, 4, 15), Delivered, "iPhone 15", 2499),
                order("SIP-1005", date(2024, 3, 2), Delivered, "iPad 10. Nesil", 1850),
            ],
            transactions: vec![
                transaction(Payment, date(2024, 4, 10), 1000, "Nakit ödeme"),
                transaction(Purchase, date(2024, 4, 15), 2499, "iPhone 15 satın alımı"),
                transaction(Payment, date(2024, 3, 1), 2000, "Havale ile ödeme"),
                transaction(Purchase, date(2024, 3, 2), 1850, "iPad 10. Nesil satın alımı"),
            ],
        },
        Customer {
            id: CustomerId::new("cust-2"),
            name: "Ayşe Demir".to_string(),
            phone: "05559876543".to_string(),
            email: "ayse@example.com".to_string(),
            address: "Bağdat Cad. No:456 Maltepe/İstanbul".to_string(),
            balance: Money::new(75_025, CURRENCY),
            status: CustomerStatus::Active,
            orders: vec![order(
                "SIP-1002",
                date(2024, 4, 2),
                Shipping,
                "Samsung Galaxy S23",
                1250,
            )],
            transactions: vec![
                transaction(Payment, date(2024, 4, 1), 500, "Kredi kartı ile ödeme"),
                transaction(Purchase, date(2024, 4, 2), 1250, "Samsung Galaxy S23 satın alımı"),
            ],
        },
        Customer {
            id: CustomerId::new("cust-3"),
            name: "Mehmet Kaya".to_string(),
            phone: "05553456789".to_string(),
            email: "mehmet@example.com".to_string(),
            address: "İstiklal Cad. No:789 Beyoğlu/İstanbul".to_string(),
            balance: Money::zero(CURRENCY),
            status: CustomerStatus::Passive,
            orders: vec![
                order("SIP-1003", date(2024, 3, 25), Delivered, "MacBook Air M2", 3750),
                order("SIP-1004", date(2024, 3, 10), Cancelled, "Xiaomi Redmi Note 12", 899),
            ],
            transactions: vec![
                transaction(Payment, date(2024, 3, 20), 3750, "Havale ile ödeme"),
                transaction(Purchase, date(2024, 3, 25), 3750, "MacBook Air M2 satın alımı"),
                transaction(
                    Purchase,
                    date(2024, 3, 10),
                    899,
                    "Xiaomi Redmi Note 12 satın alımı (iptal edildi)",
                ),
                transaction(Refund, date(2024, 3, 12), 899, "Xiaomi Redmi Note 12 iadesi"),
            ],
        },
    ]
}

/// Look up a seed customer by phone number.
pub fn customer_by_phone(phone: &str) -> Option<Customer> {
    customers().into_iter().find(|c| c.phone == phone)
}

/// Look up a seed customer by id.
pub fn customer_by_id(id: &str) -> Option<Customer> {
    customers().into_iter().find(|c| c.id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products() {
        let products = products();
        assert_eq!(products.len(), 12);
        assert_eq!(products[0].name, "iPhone 15");
        assert_eq!(products[0].price, lira(2499));
        assert_eq!(products[0].stock, Some(15));
        assert!(products.iter().all(|p| !p.featured));
        assert!(products.iter().all(|p| p.price.currency == Currency::TRY));
    }

    #[test]
    fn test_seed_customers() {
        let customers = customers();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].balance.display(), "₺1.250,75");
        assert_eq!(customers[2].status, CustomerStatus::Passive);
        assert_eq!(customers[2].transactions[3].kind, TransactionKind::Refund);
    }

    #[test]
    fn test_customer_lookup() {
        assert_eq!(customer_by_phone("05559876543").unwrap().name, "Ayşe Demir");
        assert!(customer_by_phone("05550000000").is_none());
        assert_eq!(customer_by_id("cust-3").unwrap().orders.len(), 2);
        assert!(customer_by_id("cust-9").is_none());
    }
}
