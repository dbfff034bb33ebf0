//! Inventory domain module.
//!
//! Quantity-on-hand arithmetic, implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod stock;

pub use stock::{StockDelta, StockLevel};
