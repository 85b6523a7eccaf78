pub(crate) mod defaults;
mod loader;
pub mod permalink;
mod types;
mod validation;

pub use loader::load_config;
pub use permalink::{PermalinkStyle, PermalinkTokens};
pub use types::*;
