//! Order orchestration: the create/list/get/change-status operations and
//! their error envelope.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
