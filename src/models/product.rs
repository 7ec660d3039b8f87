use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Core product entity. `id` is assigned by the store and never changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Monetary amount; non-negative by convention, not enforced. Carried
    /// as a JSON number with every digit kept.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub in_stock: bool,
}

impl Product {
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            in_stock: input.in_stock,
        }
    }

    /// Overwrites the mutable fields in place. `id` is left untouched.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.in_stock = input.in_stock;
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body accepted by create and update. Missing fields fall back to their
/// defaults; an `id` key, if sent, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub in_stock: bool,
}
