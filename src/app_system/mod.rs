//! System orchestration, startup, and shutdown logic.

pub mod bot_system;
pub mod config;
pub mod conversation;
pub mod tracing;

pub use bot_system::*;
pub use config::*;
pub use conversation::*;
pub use self::tracing::setup_tracing;
