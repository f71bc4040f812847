use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Authoritative product data returned by the catalog service.
///
/// A per-request snapshot: the catalog is the sole source of truth for
/// price, name, and existence, and snapshots are never cached across
/// requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
}

impl CatalogProduct {
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
