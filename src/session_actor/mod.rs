//! Session-specific store logic: cart mutations applied inside the session actor.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
