//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attributes are
/// interchangeable. Stock levels, stock deltas and prices are value objects;
/// products are entities.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct StockLevel(i64);
///
/// impl ValueObject for StockLevel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
