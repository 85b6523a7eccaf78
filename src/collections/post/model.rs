use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use log::debug;
use once_cell::sync::OnceCell;

use crate::collections::post::excerpt::Excerpt;
use crate::collections::post::filename;
use crate::config::permalink::{self, PermalinkStyle, PermalinkTokens};
use crate::config::Config;
use crate::front_matter::FrontMatter;
use crate::utils::error::QuillResult;
use crate::utils::path::{join_url, uri_to_path, url_dirname};

/// A dated post read from a `_posts` directory
#[derive(Debug, Clone)]
pub struct Post {
    /// Directory the `_posts` folder sits in, relative to the source
    pub(crate) dir: String,

    /// Filename inside `_posts`
    pub(crate) name: String,

    pub(crate) date: DateTime<FixedOffset>,
    pub(crate) slug: String,
    pub(crate) extension: String,
    pub(crate) categories: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) published: bool,
    pub(crate) front_matter: FrontMatter,

    /// Raw body, front matter removed
    pub(crate) content: String,

    /// Rendered body, set by `render`
    pub(crate) output: Option<String>,

    pub(crate) permalink_style: PermalinkStyle,
    pub(crate) excerpt_separator: String,

    pub(crate) url: OnceCell<String>,
    pub(crate) excerpt: OnceCell<Excerpt>,
}

impl Post {
    /// Create a post from its location and already-split document.
    ///
    /// `dir` is the path between the site source and `_posts` (empty for
    /// the top level); its segments are the post's categories. Fails when
    /// `name` is not a post filename or when either the filename date or
    /// the front matter `date` is not a valid date.
    pub fn new(
        config: &Config,
        dir: &str,
        name: &str,
        front_matter: FrontMatter,
        content: impl Into<String>,
    ) -> QuillResult<Self> {
        let parsed = filename::parse(name)?;
        let date = front_matter.get_date(name)?.unwrap_or(parsed.date);

        let dir_categories: Vec<String> = dir
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        let categories = front_matter.get_categories(&dir_categories);
        let tags = front_matter.get_tags();
        let published = front_matter.is_published();

        debug!("Post {}/{}: date {}, categories {:?}", dir, name, date, categories);

        Ok(Post {
            dir: dir.to_string(),
            name: name.to_string(),
            date,
            slug: parsed.slug,
            extension: parsed.extension,
            categories,
            tags,
            published,
            front_matter,
            content: content.into(),
            output: None,
            permalink_style: config.permalink.clone(),
            excerpt_separator: config.excerpt_separator.clone(),
            url: OnceCell::new(),
            excerpt: OnceCell::new(),
        })
    }

    pub fn date(&self) -> &DateTime<FixedOffset> {
        &self.date
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `other` was read from the same file
    pub fn same_source(&self, other: &Post) -> bool {
        self.dir == other.dir && self.name == other.name
    }

    /// Front matter title, else the slug with each word capitalized
    pub fn title(&self) -> String {
        self.front_matter
            .title_override()
            .unwrap_or_else(|| titleize(&self.slug))
    }

    /// Source path relative to the site root
    pub fn path(&self) -> String {
        if let Some(path) = self.front_matter.path_override() {
            return path;
        }
        let joined = format!("{}/_posts/{}", self.dir.trim_end_matches('/'), self.name);
        joined.strip_prefix('/').unwrap_or(&joined).to_string()
    }

    /// Template the URL is built from: the front matter permalink if set,
    /// otherwise the site's style
    pub fn template(&self) -> String {
        self.front_matter
            .permalink_override()
            .unwrap_or_else(|| self.permalink_style.template().to_string())
    }

    /// Canonical URL, computed on first access
    pub fn url(&self) -> &str {
        self.url.get_or_init(|| {
            let url = match self.front_matter.permalink_override() {
                Some(permalink) => permalink::resolve_override(&permalink),
                None => permalink::resolve(&self.permalink_style, &self.tokens()),
            };
            debug!("URL for {}: {}", self.name, url);
            url
        })
    }

    /// Values for the permalink template
    pub fn tokens(&self) -> PermalinkTokens {
        PermalinkTokens::for_post(&self.date, &self.slug, &self.categories)
    }

    /// Output file under `dest`.
    ///
    /// The URL is percent-decoded back to literal characters and dot-only
    /// segments are dropped. Unless the resolved template (the URL) ends in
    /// `.html`, the file is `<url>/index.html`.
    pub fn destination(&self, dest: &Path) -> PathBuf {
        let url = self.url();
        let decoded = urlencoding::decode(url)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| url.to_string());

        let mut path = uri_to_path(dest, &decoded);
        if !url.ends_with(".html") {
            path.push("index.html");
        }
        path
    }

    /// Directory portion of the URL
    pub fn directory(&self) -> String {
        url_dirname(self.url())
    }

    /// Stable identifier: URL directory plus slug
    pub fn id(&self) -> String {
        join_url(&self.directory(), &self.slug)
    }

    /// The post's excerpt, extracted on first access
    pub fn excerpt(&self) -> &Excerpt {
        self.excerpt
            .get_or_init(|| Excerpt::for_post(&self.front_matter, &self.content, &self.excerpt_separator))
    }

    /// Post after this one in `posts`, located by source file
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        posts.get(pos + 1)
    }

    /// Post before this one in `posts`, located by source file
    pub fn previous<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        pos.checked_sub(1).and_then(|prev| posts.get(prev))
    }

    fn position_in(&self, posts: &[Post]) -> Option<usize> {
        posts.iter().position(|p| p.same_source(self))
    }
}

/// Date first, then slug
impl Ord for Post {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equal under the ordering: same date and slug
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Post {}

/// `my-awesome-post` -> `My Awesome Post`
fn titleize(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}
