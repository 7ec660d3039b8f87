use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{Product, ProductInput};

/// The two recoverable outcomes a store operation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Product with ID {0} not found")]
    NotFound(i64),
    #[error("Product cannot be null")]
    InvalidInput,
}

pub type StoreResult<T> = Result<T, StoreError>;

// ── ProductStore ─────────────────────────────────────────────────────────────

/// Owns the in-memory product collection.
///
/// Backed by an `IndexMap` keyed on product id: iteration follows insertion
/// order, lookups are O(1) and `shift_remove` keeps the remaining records in
/// their original order. Holding records by key also makes duplicate ids
/// unrepresentable.
///
/// The store does no locking of its own; callers that share it across
/// requests wrap it in a single lock (see `AppState`).
#[derive(Debug, Default)]
pub struct ProductStore {
    products: IndexMap<i64, Product>,
}

impl ProductStore {
    /// A store holding the startup seed set.
    pub fn seeded() -> Self {
        Self::from_products(crate::seed::seed_products())
    }

    /// Builds a store from existing records. A later record with an id
    /// already present replaces the earlier one.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> StoreResult<&Product> {
        self.products.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Stores `candidate` under a freshly assigned id and returns the stored
    /// record.
    pub fn create(&mut self, candidate: Option<ProductInput>) -> StoreResult<Product> {
        let input = candidate.ok_or(StoreError::InvalidInput)?;
        let product = Product::from_input(self.next_id(), input);
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// Overwrites name, price and availability of an existing record. The
    /// record keeps its id and its position.
    pub fn update(&mut self, id: i64, fields: Option<ProductInput>) -> StoreResult<()> {
        let existing = self.products.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let input = fields.ok_or(StoreError::InvalidInput)?;
        existing.apply(input);
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        self.products
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Highest id currently held plus one; `1` when the store is empty.
    fn next_id(&self) -> i64 {
        match self.products.keys().max() {
            Some(max) => max + 1,
            None => 1,
        }
    }
}
