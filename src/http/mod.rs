//! HTTP surface: the chat provider webhook, an admin order listing and
//! liveness checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
