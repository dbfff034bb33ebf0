//! Fixed-width product table.

use stockroom_products::Product;

const RULE_WIDTH: usize = 67;

/// Column header line.
pub fn header() -> String {
    format!(
        "{:<5} {:<20} {:<15} {:<10} {:<10}",
        "ID", "Name", "Category", "Price", "Stock"
    )
}

/// One product row; the price carries `currency` as a prefix.
pub fn row(product: &Product, currency: &str) -> String {
    let price = format!("{currency}{}", product.price);
    format!(
        "{:<5} {:<20} {:<15} {:<10} {:<10}",
        product.id, product.name, product.category, price, product.stock
    )
}

/// Header, rule, and one row per product.
pub fn render(products: &[Product], currency: &str) -> String {
    let mut lines = Vec::with_capacity(products.len() + 2);
    lines.push(header());
    lines.push("-".repeat(RULE_WIDTH));
    lines.extend(products.iter().map(|p| row(p, currency)));
    lines.join("\n")
}
