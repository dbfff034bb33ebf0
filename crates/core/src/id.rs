//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product record.
///
/// Identifiers are positive integers handed out by the repository.
/// [`ProductId::UNASSIGNED`] (zero) asks the repository to pick the next one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Placeholder for "not yet assigned".
    pub const UNASSIGNED: ProductId = ProductId(0);

    /// First identifier handed out by a fresh repository.
    pub const FIRST: ProductId = ProductId(1);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_unassigned(self) -> bool {
        self.0 == 0
    }

    /// The identifier immediately after this one, or `None` at `u32::MAX`.
    pub const fn checked_successor(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_decimal_text() {
        assert_eq!(" 42 ".parse::<ProductId>().unwrap(), ProductId::new(42));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        for input in ["-1", "abc", "", "4.2"] {
            match input.parse::<ProductId>() {
                Err(DomainError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn successor_stops_at_the_last_id() {
        assert_eq!(ProductId::new(4).checked_successor(), Some(ProductId::new(5)));
        assert_eq!(ProductId::new(u32::MAX).checked_successor(), None);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(9)).unwrap();
        assert_eq!(json, "9");
    }

    #[test]
    fn zero_is_unassigned() {
        assert!(ProductId::UNASSIGNED.is_unassigned());
        assert!(ProductId::default().is_unassigned());
        assert!(!ProductId::FIRST.is_unassigned());
    }
}
