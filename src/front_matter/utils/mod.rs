pub mod content;

pub use content::{has_front_matter, split_document};
