use std::path::{Path, PathBuf};

/// Convert a URL path to a filesystem path under `root`.
///
/// Empty and dot-only segments (`.`, `..`) are dropped, so the result
/// never leaves `root`.
pub fn uri_to_path<P: AsRef<Path>>(root: P, uri: &str) -> PathBuf {
    let mut path = PathBuf::from(root.as_ref());

    for segment in uri.split('/').filter(|s| !s.is_empty() && !s.chars().all(|c| c == '.')) {
        path.push(segment);
    }

    path
}

/// Directory portion of a URL path.
///
/// Trailing slashes are ignored, so `/2008/11/05/post/` and
/// `/2008/11/05/post.html` both yield `/2008/11/05`. A top-level entry
/// yields `/`.
pub fn url_dirname(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return if url.starts_with('/') { "/".to_string() } else { ".".to_string() };
    }

    match trimmed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].trim_end_matches('/').to_string(),
        None => ".".to_string(),
    }
}

/// Join two URL fragments with exactly one `/` between them
pub fn join_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name.trim_start_matches('/'))
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}
