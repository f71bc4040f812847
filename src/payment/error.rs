use thiserror::Error;

/// Errors that can occur while opening a payment session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment session rejected: {0}")]
    Rejected(String),
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}
