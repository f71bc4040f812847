//! Order aggregate store: durable home of orders and their line items.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
