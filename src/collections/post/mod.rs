mod converter;
pub mod excerpt;
pub mod filename;
mod model;
mod render;

pub use excerpt::Excerpt;
pub use filename::{is_valid_name, ParsedName};
pub use model::Post;
