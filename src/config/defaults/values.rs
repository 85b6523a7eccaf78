use std::path::PathBuf;

/// Configuration file names to look for, in load order
pub const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default layouts directory
pub fn default_layouts_dir() -> PathBuf {
    PathBuf::from("_layouts")
}

/// Default excerpt separator: the first blank line
pub fn default_excerpt_separator() -> String {
    "\n\n".to_string()
}

/// Default number of related posts
pub fn default_related_posts_limit() -> usize {
    10
}
