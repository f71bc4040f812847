use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::CatalogError;
use crate::store::StoreError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid order request: {0}")]
    Validation(String),
    #[error("Product with id {0} not found in catalog")]
    ProductNotFound(u32),
    #[error("Order with id {0} not found")]
    OrderNotFound(Uuid),
    #[error("Order creation failed: {0}")]
    CreationFailed(#[source] CatalogError),
    #[error("Order persistence failed: {0}")]
    Persistence(#[source] StoreError),
    #[error("Downstream service unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    /// HTTP-style status code for the bus error envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::Validation(_)
            | OrderError::ProductNotFound(_)
            | OrderError::CreationFailed(_) => 400,
            OrderError::OrderNotFound(_) => 404,
            OrderError::Persistence(_) => 500,
            OrderError::Unavailable(_) => 503,
        }
    }
}

/// Error envelope returned to the command surface, preserving the
/// original message for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub status: u16,
    pub message: String,
}

impl From<&OrderError> for ErrorPayload {
    fn from(error: &OrderError) -> Self {
        Self {
            status: error.status_code(),
            message: error.to_string(),
        }
    }
}
