use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ProductId, ValueObject};
use stockroom_inventory::StockLevel;

/// Unit price of a product.
///
/// Stored as an exact decimal and always rendered with two decimal places. No floor
/// is enforced: a negative price parses and is stored as given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Price from an amount in the smallest currency unit (e.g. cents).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("price `{trimmed}`: {e}")))
    }
}

/// A product record as held by the repository.
///
/// The repository owns every stored record; callers work on clones and hand them
/// back through `add`/`update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub stock: StockLevel,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock: StockLevel::new(stock),
        }
    }

    /// A record without an identifier; `add` assigns the next free one.
    pub fn draft(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> Self {
        Self::new(ProductId::UNASSIGNED, name, category, price, stock)
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "#{} {} [{}] price={} stock={}",
            self.id, self.name, self.category, self.price, self.stock
        )
    }
}
