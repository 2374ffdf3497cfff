pub mod menu;
pub mod order;
pub mod price;
pub mod session;

pub use menu::*;
pub use order::*;
pub use price::*;
pub use session::*;
