use std::fs;
use std::path::Path;

use liquid::model::Value;
use liquid::Object;
use log::{debug, info};

use crate::collections::ordering::render_posts;
use crate::collections::post::Post;
use crate::collections::reader::read_posts;
use crate::collections::related::{MostRecentPosts, RelatedPosts};
use crate::config::Config;
use crate::layout::{load_layouts, Layouts, Renderer};
use crate::utils::error::QuillResult;

/// A loaded site: configuration, sorted posts and layouts
#[derive(Debug)]
pub struct Site {
    pub config: Config,
    pub posts: Vec<Post>,
    pub layouts: Layouts,
}

impl Site {
    /// Read posts and layouts from the configured source
    pub fn read(config: Config) -> QuillResult<Self> {
        let posts = read_posts(&config)?;
        let layouts = load_layouts(&config.layouts_path())?;
        info!("Loaded {} layouts", layouts.len());

        Ok(Site { config, posts, layouts })
    }

    /// `{"site": {...config, "posts": [...]}}`, posts newest first
    pub fn site_payload(&self) -> Object {
        let mut site = self.config.to_liquid();
        let posts: Vec<Value> = self
            .posts
            .iter()
            .rev()
            .map(|post| Value::Object(post.to_liquid_shallow()))
            .collect();
        site.insert("posts".into(), Value::Array(posts));

        let mut payload = Object::new();
        payload.insert("site".into(), Value::Object(site));
        payload
    }

    /// Related posts the way the configuration asks for them
    pub fn related_posts(&self) -> MostRecentPosts {
        MostRecentPosts::new(self.config.related_posts_limit)
    }

    /// Render every post
    pub fn render(&mut self, renderer: &dyn Renderer) -> QuillResult<()> {
        let payload = self.site_payload();
        let related = self.related_posts();
        self.render_with(renderer, &payload, &related)
    }

    /// Render every post with an explicit related-posts provider
    pub fn render_with(
        &mut self,
        renderer: &dyn Renderer,
        site_payload: &Object,
        related: &dyn RelatedPosts,
    ) -> QuillResult<()> {
        render_posts(&mut self.posts, &self.layouts, site_payload, related, renderer)
    }

    /// Write each post's output under `dest`, returning how many were written.
    ///
    /// Posts that were never rendered are written as their raw content.
    pub fn write(&self, dest: &Path) -> QuillResult<usize> {
        for post in &self.posts {
            let path = post.destination(dest);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            debug!("Writing {}", path.display());
            fs::write(&path, post.output().unwrap_or(post.content()))?;
        }

        info!("Wrote {} posts to {}", self.posts.len(), dest.display());
        Ok(self.posts.len())
    }
}
