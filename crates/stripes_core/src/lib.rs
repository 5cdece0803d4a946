pub mod config;
pub mod constants;
pub mod types;

pub use config::StripesConfig;
pub use constants::*;
pub use types::*;
