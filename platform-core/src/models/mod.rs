pub mod ids;
pub mod session;
pub mod trade;
pub mod trader;

pub use ids::*;
pub use session::*;
pub use trade::*;
pub use trader::*;
