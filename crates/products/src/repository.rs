//! Product repository: identity assignment, CRUD, and stock adjustment.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};
use stockroom_inventory::StockDelta;

use crate::product::Product;
use crate::search::ProductQuery;
use crate::seed::sample_catalog;

/// Keyed store of product records.
///
/// Each operation is atomic with respect to itself only. Implementations used
/// from several threads must hold one lock across the read-modify-write in
/// [`ProductRepository::adjust_stock`].
pub trait ProductRepository {
    /// Store a record and return it as stored.
    ///
    /// An unassigned id (zero) receives the next free identifier. An explicit id
    /// is kept as-is and pushes the counter past it. A record already stored under
    /// an explicit id is replaced.
    fn add(&mut self, product: Product) -> Product;

    /// Replace the record stored under `product.id`.
    ///
    /// Fails with `NotFound` (leaving the repository untouched) if no such record exists.
    fn update(&mut self, product: Product) -> DomainResult<Product>;

    /// Remove a record. Returns `false` if nothing was stored under `id`.
    fn delete(&mut self, id: ProductId) -> bool;

    fn get(&self, id: ProductId) -> DomainResult<Product>;

    /// All records. Callers must not depend on the order.
    fn list(&self) -> Vec<Product>;

    /// Case-insensitive substring match on name or category.
    fn search(&self, keyword: &str) -> Vec<Product>;

    /// Apply a signed delta to a record's stock.
    ///
    /// Fails with `NotFound` for an unknown id, or `InvalidQuantity` when the
    /// result would be negative; no change is made on failure.
    fn adjust_stock(&mut self, id: ProductId, delta: StockDelta) -> DomainResult<Product>;

    /// Identifier the next unassigned `add` will receive.
    ///
    /// `UNASSIGNED` when no identifier is left to hand out.
    fn next_id(&self) -> ProductId;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository for a single interactive caller.
///
/// Records are kept in id order, so `list` and `search` are stable across calls.
///
/// The counter is wider than `ProductId` so an explicit `u32::MAX` can still push
/// it past every stored id. Once it runs beyond the id range, unassigned adds take
/// the lowest free id instead.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: BTreeMap<ProductId, Product>,
    next_id: u64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: u64::from(ProductId::FIRST.get()),
        }
    }

    /// Repository pre-loaded with the sample catalog (ids 1-5).
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        for product in sample_catalog() {
            repo.add(product);
        }
        repo
    }

    /// Id for the next unassigned add, or `None` if every id is taken.
    fn assignable_id(&self) -> Option<ProductId> {
        match u32::try_from(self.next_id) {
            Ok(raw) => Some(ProductId::new(raw)),
            Err(_) => self.lowest_free_id(),
        }
    }

    fn lowest_free_id(&self) -> Option<ProductId> {
        let mut candidate = ProductId::FIRST;
        for id in self.products.keys() {
            if *id > candidate {
                break;
            }
            if *id == candidate {
                candidate = candidate.checked_successor()?;
            }
        }
        Some(candidate)
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn add(&mut self, mut product: Product) -> Product {
        if product.id.is_unassigned() {
            match self.assignable_id() {
                Some(id) => {
                    product.id = id;
                    self.next_id = self.next_id.max(u64::from(id.get()) + 1);
                }
                None => warn!("product id space exhausted"),
            }
        } else {
            self.next_id = self.next_id.max(u64::from(product.id.get()) + 1);
        }

        if let Some(previous) = self.products.insert(product.id, product.clone()) {
            warn!(
                product_id = %product.id,
                replaced = %previous.name,
                "add replaced an existing product with the same id"
            );
        }

        info!(product_id = %product.id, name = %product.name, "product added");
        product
    }

    fn update(&mut self, product: Product) -> DomainResult<Product> {
        let id = product.id();
        let Some(slot) = self.products.get_mut(&id) else {
            debug!(product_id = %id, "update of unknown product");
            return Err(DomainError::not_found(format!("product {id}")));
        };

        *slot = product.clone();
        info!(product_id = %id, "product updated");
        Ok(product)
    }

    fn delete(&mut self, id: ProductId) -> bool {
        let removed = self.products.remove(&id).is_some();
        if removed {
            info!(product_id = %id, "product deleted");
        } else {
            debug!(product_id = %id, "delete of unknown product");
        }
        removed
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        debug!(product_id = %id, "get product");
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    fn search(&self, keyword: &str) -> Vec<Product> {
        let query = ProductQuery::keyword(keyword);
        let hits: Vec<Product> = query.filter(self.products.values()).cloned().collect();
        debug!(keyword, hits = hits.len(), "search products");
        hits
    }

    fn adjust_stock(&mut self, id: ProductId, delta: StockDelta) -> DomainResult<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;

        match product.stock.adjust(delta) {
            Ok(level) => {
                product.stock = level;
                info!(product_id = %id, delta = delta.value(), stock = level.quantity(), "stock adjusted");
                Ok(product.clone())
            }
            Err(err) => {
                warn!(
                    product_id = %id,
                    delta = delta.value(),
                    stock = product.stock.quantity(),
                    "stock adjustment rejected"
                );
                Err(err)
            }
        }
    }

    fn next_id(&self) -> ProductId {
        self.assignable_id().unwrap_or(ProductId::UNASSIGNED)
    }

    fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Price;
    use stockroom_inventory::StockLevel;

    fn lamp() -> Product {
        Product::draft("Desk Lamp", "Furniture", Price::from_cents(2_499), 4)
    }

    #[test]
    fn unassigned_add_takes_next_id_and_increments() {
        let mut repo = InMemoryProductRepository::new();
        let before = repo.next_id();

        let stored = repo.add(lamp());

        assert_eq!(stored.id, before);
        assert_eq!(repo.next_id(), ProductId::new(before.get() + 1));
    }

    #[test]
    fn explicit_id_advances_counter_past_it() {
        let mut repo = InMemoryProductRepository::new();
        repo.add(lamp().with_id(ProductId::new(10)));
        assert_eq!(repo.next_id(), ProductId::new(11));

        // A lower explicit id never moves the counter backwards.
        repo.add(lamp().with_id(ProductId::new(3)));
        assert_eq!(repo.next_id(), ProductId::new(11));

        let auto = repo.add(lamp());
        assert_eq!(auto.id, ProductId::new(11));
    }

    #[test]
    fn explicit_max_id_does_not_capture_later_assignments() {
        let mut repo = InMemoryProductRepository::new();
        let max = repo.add(
            Product::draft("Max", "Furniture", Price::from_cents(100), 1)
                .with_id(ProductId::new(u32::MAX)),
        );

        let first = repo.add(lamp());
        let second = repo.add(lamp());

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(repo.next_id(), ProductId::new(3));
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(max.id).unwrap(), max);
    }

    #[test]
    fn past_the_id_range_assignments_fill_the_lowest_gap() {
        let mut repo = InMemoryProductRepository::seeded();
        repo.add(lamp().with_id(ProductId::new(u32::MAX)));
        assert!(repo.delete(ProductId::new(2)));

        assert_eq!(repo.add(lamp()).id, ProductId::new(2));
        assert_eq!(repo.add(lamp()).id, ProductId::new(6));
        assert_eq!(repo.len(), 7);
    }

    #[test]
    fn colliding_explicit_id_overwrites() {
        let mut repo = InMemoryProductRepository::seeded();
        let replacement = Product::new(1u32, "Tablet", "Electronics", Price::from_cents(49_999), 2);

        repo.add(replacement.clone());

        assert_eq!(repo.len(), 5);
        assert_eq!(repo.get(ProductId::new(1)).unwrap(), replacement);
    }

    #[test]
    fn update_replaces_whole_record() {
        let mut repo = InMemoryProductRepository::seeded();
        let mut chair = repo.get(ProductId::new(3)).unwrap();
        chair.name = "Office Chair".to_string();
        chair.price = Price::from_cents(17_999);
        chair.stock = StockLevel::new(-2);

        let updated = repo.update(chair.clone()).unwrap();

        assert_eq!(updated, chair);
        // Full replacement does not guard stock.
        assert_eq!(repo.get(ProductId::new(3)).unwrap().stock, StockLevel::new(-2));
    }

    #[test]
    fn update_of_unknown_id_leaves_repository_unchanged() {
        let mut repo = InMemoryProductRepository::seeded();
        let before = repo.list();
        let next_before = repo.next_id();

        let err = repo.update(lamp().with_id(ProductId::new(99))).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.list(), before);
        assert_eq!(repo.next_id(), next_before);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut repo = InMemoryProductRepository::seeded();
        assert!(repo.delete(ProductId::new(2)));
        assert!(repo.get(ProductId::new(2)).unwrap_err().is_not_found());
        assert!(!repo.delete(ProductId::new(2)));
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn adjust_stock_commits_valid_delta() {
        let mut repo = InMemoryProductRepository::seeded();
        let updated = repo.adjust_stock(ProductId::new(4), StockDelta::new(-8)).unwrap();
        assert_eq!(updated.stock, StockLevel::ZERO);
        assert_eq!(repo.get(ProductId::new(4)).unwrap().stock, StockLevel::ZERO);
    }

    #[test]
    fn adjust_stock_rejects_negative_result_without_mutation() {
        let mut repo = InMemoryProductRepository::seeded();
        let before = repo.get(ProductId::new(3)).unwrap();

        let err = repo.adjust_stock(ProductId::new(3), StockDelta::new(-6)).unwrap_err();

        assert_eq!(err, DomainError::invalid_quantity(5, -6));
        assert_eq!(repo.get(ProductId::new(3)).unwrap(), before);
    }

    #[test]
    fn adjust_stock_of_unknown_id_is_not_found() {
        let mut repo = InMemoryProductRepository::new();
        let err = repo.adjust_stock(ProductId::new(1), StockDelta::new(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_is_in_id_order() {
        let repo = InMemoryProductRepository::seeded();
        let ids: Vec<u32> = repo.list().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn fresh_repository_is_empty() {
        let repo = InMemoryProductRepository::default();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), ProductId::FIRST);
        assert!(repo.list().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: unassigned adds hand out consecutive ids, explicit ids push the
            /// counter to max(next_id, id + 1).
            #[test]
            fn id_assignment_follows_counter(
                ids in prop::collection::vec(0u32..50, 1..40)
            ) {
                let mut repo = InMemoryProductRepository::new();
                for raw in ids {
                    let before = repo.next_id();
                    let stored = repo.add(lamp().with_id(ProductId::new(raw)));
                    if raw == 0 {
                        prop_assert_eq!(stored.id, before);
                        prop_assert_eq!(repo.next_id().get(), before.get() + 1);
                    } else {
                        prop_assert_eq!(stored.id.get(), raw);
                        prop_assert_eq!(repo.next_id().get(), before.get().max(raw + 1));
                    }
                    prop_assert_eq!(repo.get(stored.id).unwrap(), stored);
                }
            }

            /// Property: no sequence of adjustments leaves stored stock negative.
            #[test]
            fn stored_stock_never_goes_negative(
                deltas in prop::collection::vec(-30i64..30, 1..60)
            ) {
                let mut repo = InMemoryProductRepository::seeded();
                let id = ProductId::new(5);
                for delta in deltas {
                    let before = repo.get(id).unwrap().stock.quantity();
                    let result = repo.adjust_stock(id, StockDelta::new(delta));
                    let after = repo.get(id).unwrap().stock.quantity();
                    prop_assert!(after >= 0);
                    if before + delta < 0 {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(after, before);
                    } else {
                        prop_assert_eq!(after, before + delta);
                    }
                }
            }
        }
    }
}
