//! Typed clients for the service tasks. Thin wrappers around message
//! channels; all orchestration lives on the service side.

mod macros;

mod catalog;
mod orders;
mod payment;
mod store;

pub use catalog::CatalogClient;
pub use orders::OrdersClient;
pub use payment::PaymentClient;
pub use store::StoreClient;
