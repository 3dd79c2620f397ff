pub mod host;
pub mod session;

pub use host::*;
pub use session::*;
