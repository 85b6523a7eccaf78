use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::collections::ordering::sort_posts;
use crate::collections::post::{is_valid_name, Post};
use crate::config::Config;
use crate::front_matter::split_document;
use crate::utils::error::QuillResult;

const POSTS_DIR: &str = "_posts";

/// Read every post under the site source, sorted oldest first.
///
/// Any `_posts` directory below the source counts; the path leading to it
/// becomes the post's `dir` and so its categories. The destination and
/// dot directories are skipped. Posts with `published: false` are dropped
/// unless `unpublished` is set. The first unreadable or invalid post
/// aborts the read.
pub fn read_posts(config: &Config) -> QuillResult<Vec<Post>> {
    let source = &config.source;
    let destination = config.destination_path();
    let mut posts = Vec::new();

    let mut walker = WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry, &destination));

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() || entry.file_name() != POSTS_DIR {
            continue;
        }

        let dir = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(source).ok())
            .map(path_to_url_dir)
            .unwrap_or_default();

        read_posts_dir(config, &dir, entry.path(), &mut posts)?;
        // everything below was read by `read_posts_dir`
        walker.skip_current_dir();
    }

    sort_posts(&mut posts);
    info!("Read {} posts from {}", posts.len(), source.display());
    Ok(posts)
}

/// Read the files below one `_posts` directory
fn read_posts_dir(config: &Config, dir: &str, posts_dir: &Path, posts: &mut Vec<Post>) -> QuillResult<()> {
    debug!("Reading posts from {}", posts_dir.display());

    let walker = WalkDir::new(posts_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = match entry.path().strip_prefix(posts_dir) {
            Ok(relative) => path_to_url_dir(relative),
            Err(_) => continue,
        };
        if !is_valid_name(&name) {
            debug!("Skipping {}: not a post filename", entry.path().display());
            continue;
        }

        let raw = fs::read_to_string(entry.path())?;
        let (front_matter, body) = split_document(&raw, &name)?;
        let post = Post::new(config, dir, &name, front_matter, body)?;

        if !post.is_published() && !config.unpublished {
            debug!("Skipping unpublished post {}", post.path());
            continue;
        }
        posts.push(post);
    }

    Ok(())
}

fn is_skipped(entry: &DirEntry, destination: &Path) -> bool {
    is_hidden(entry) || entry.path() == destination
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Relative filesystem path as a `/`-separated string
fn path_to_url_dir(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
