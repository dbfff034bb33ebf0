//! Keyword search over product records.

use crate::product::Product;

/// Case-insensitive substring query against a product's name or category.
///
/// The keyword is lower-cased once at construction. An empty keyword matches
/// every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    keyword: String,
}

impl ProductQuery {
    pub fn keyword(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.keyword)
            || product.category.to_lowercase().contains(&self.keyword)
    }

    /// Lazily keep the products this query matches.
    pub fn filter<'a, I>(&'a self, products: I) -> impl Iterator<Item = &'a Product> + 'a
    where
        I: IntoIterator<Item = &'a Product>,
        I::IntoIter: 'a,
    {
        products.into_iter().filter(move |p| self.matches(p))
    }
}
