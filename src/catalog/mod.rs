//! Product catalog collaborator: the sole source of truth for product
//! price, name, and existence.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
