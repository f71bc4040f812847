use thiserror::Error;

/// Errors that can occur against the order aggregate store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Order store rejected the write: {0}")]
    Rejected(String),
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}
