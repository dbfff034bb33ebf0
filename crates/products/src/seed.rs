//! Sample catalog loaded at startup.

use crate::product::{Price, Product};

/// The five fixed sample records (ids 1-5).
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1u32, "Laptop", "Electronics", Price::from_cents(99_999), 10),
        Product::new(2u32, "Smartphone", "Electronics", Price::from_cents(69_999), 15),
        Product::new(3u32, "Desk Chair", "Furniture", Price::from_cents(14_999), 5),
        Product::new(4u32, "Coffee Maker", "Appliances", Price::from_cents(7_999), 8),
        Product::new(5u32, "Headphones", "Electronics", Price::from_cents(12_999), 20),
    ]
}
