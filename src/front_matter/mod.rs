pub mod extractor;
pub mod types;
pub mod utils;

// Re-export the most common items for convenience
pub use extractor::{extract_excerpt, DEFAULT_EXCERPT_SEPARATOR};
pub use types::FrontMatter;
pub use utils::{has_front_matter, split_document};
