//! Payment collaborator: opens payment sessions for persisted orders.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
