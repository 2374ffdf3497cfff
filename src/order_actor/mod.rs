//! Order-specific store logic and the order id scheme.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
