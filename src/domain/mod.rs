//! Business domain types. Pure data structures with no actor-specific concerns.

pub mod order;
pub mod payment;
pub mod product;

pub use order::*;
pub use payment::*;
pub use product::*;
