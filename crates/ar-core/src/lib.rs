pub mod adjust;
pub mod anchor;
pub mod config;
pub mod constants;
pub mod placement;

pub use adjust::*;
pub use anchor::*;
pub use config::*;
pub use constants::*;
pub use placement::*;
