use liquid::Object;
use log::info;

use crate::collections::post::Post;
use crate::collections::related::RelatedPosts;
use crate::layout::{Layouts, Renderer};
use crate::utils::error::QuillResult;

/// Sort oldest first; equal dates fall back to slug order
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort();
}

/// Render every post in `posts` against the site payload.
///
/// Each payload is built from the slice as it stands, so neighbours and
/// related posts see the raw content of posts not yet rendered. Stops at
/// the first failure.
pub fn render_posts(
    posts: &mut [Post],
    layouts: &Layouts,
    site_payload: &Object,
    related: &dyn RelatedPosts,
    renderer: &dyn Renderer,
) -> QuillResult<()> {
    for i in 0..posts.len() {
        let payload = posts[i].payload(site_payload, posts, related);
        posts[i].render(layouts, &payload, renderer)?;
    }

    info!("Rendered {} posts", posts.len());
    Ok(())
}
