pub mod date;
pub mod error;
pub mod path;
pub mod value;

pub use error::{QuillError, QuillResult};
pub use value::{deep_merge, yaml_to_liquid};
