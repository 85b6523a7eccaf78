pub mod ordering;
pub mod post;
pub mod reader;
pub mod related;
pub mod site;

pub use ordering::{render_posts, sort_posts};
pub use post::{Excerpt, Post};
pub use reader::read_posts;
pub use related::{MostRecentPosts, NoRelatedPosts, RelatedPosts};
pub use site::Site;
