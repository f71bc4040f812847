use thiserror::Error;

/// Errors that can occur during product validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Products not found in catalog: {0:?}")]
    UnknownProducts(Vec<u32>),
    #[error("Catalog service unavailable: {0}")]
    Unavailable(String),
}
