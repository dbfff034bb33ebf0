use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Quantity on hand for one product.
///
/// A level read back from storage may be negative if it was written by a
/// full-record replacement; only [`StockLevel::adjust`] refuses to go below zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevel(i64);

impl StockLevel {
    pub const ZERO: StockLevel = StockLevel(0);

    pub const fn new(quantity: i64) -> Self {
        Self(quantity)
    }

    pub const fn quantity(self) -> i64 {
        self.0
    }

    /// Apply a signed delta.
    ///
    /// Fails with `InvalidQuantity` when the result would be negative or would
    /// overflow; `self` is never modified.
    pub fn adjust(self, delta: StockDelta) -> DomainResult<StockLevel> {
        let next = self
            .0
            .checked_add(delta.0)
            .filter(|q| *q >= 0)
            .ok_or_else(|| DomainError::invalid_quantity(self.0, delta.0))?;
        Ok(Self(next))
    }
}

impl ValueObject for StockLevel {}

impl core::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Forward so width/alignment flags reach the integer.
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for StockLevel {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Signed stock adjustment: positive receives goods, negative removes them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockDelta(i64);

impl StockDelta {
    pub const fn new(delta: i64) -> Self {
        Self(delta)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for StockDelta {}

impl From<i64> for StockDelta {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
