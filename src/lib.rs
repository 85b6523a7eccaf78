//! Dated blog posts with Jekyll-style permalinks.
//!
//! Posts live in `_posts` directories and are named
//! `YYYY-MM-DD-slug.ext`. Each becomes a [`Post`] whose URL is derived
//! from a permalink template, rendered through a [`Renderer`] with a
//! Liquid payload, and written under the destination directory.

pub mod cli;
pub mod collections;
pub mod config;
pub mod front_matter;
pub mod layout;
pub mod utils;

pub use collections::{MostRecentPosts, NoRelatedPosts, Post, RelatedPosts, Site};
pub use config::{load_config, Config, PermalinkStyle};
pub use front_matter::FrontMatter;
pub use layout::{Layout, Layouts, LiquidRenderer, Renderer};
pub use utils::{QuillError, QuillResult};
