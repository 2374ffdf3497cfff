mod macros;
pub mod order_client;
pub mod session_client;

pub use order_client::OrderClient;
pub use session_client::SessionClient;
