use crate::collections::post::Post;
use crate::config::defaults::default_related_posts_limit;

/// Source of `site.related_posts` for a post
pub trait RelatedPosts {
    /// Posts related to `post`, drawn from `posts`
    fn related_posts<'a>(&self, post: &Post, posts: &'a [Post]) -> Vec<&'a Post>;
}

/// Never relates anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelatedPosts;

impl RelatedPosts for NoRelatedPosts {
    fn related_posts<'a>(&self, _post: &Post, _posts: &'a [Post]) -> Vec<&'a Post> {
        Vec::new()
    }
}

/// The most recent posts other than the post itself, newest first.
///
/// Expects `posts` sorted oldest first.
#[derive(Debug, Clone, Copy)]
pub struct MostRecentPosts {
    pub limit: usize,
}

impl MostRecentPosts {
    pub fn new(limit: usize) -> Self {
        MostRecentPosts { limit }
    }
}

impl Default for MostRecentPosts {
    fn default() -> Self {
        MostRecentPosts::new(default_related_posts_limit())
    }
}

impl RelatedPosts for MostRecentPosts {
    fn related_posts<'a>(&self, post: &Post, posts: &'a [Post]) -> Vec<&'a Post> {
        posts
            .iter()
            .rev()
            .filter(|other| !other.same_source(post))
            .take(self.limit)
            .collect()
    }
}
