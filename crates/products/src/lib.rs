//! Products domain module.
//!
//! Owns the product record, the in-memory repository that assigns identifiers and
//! applies stock changes, and the keyword search layered on its read path.
//! Nothing here performs IO; the presentation layer drives it.

pub mod product;
pub mod repository;
pub mod search;
pub mod seed;

pub use product::{Price, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use search::ProductQuery;
pub use seed::sample_catalog;

pub use stockroom_inventory::{StockDelta, StockLevel};
