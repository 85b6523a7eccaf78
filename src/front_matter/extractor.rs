/// Default separator between a post's excerpt and the rest of its body
pub const DEFAULT_EXCERPT_SEPARATOR: &str = "\n\n";

/// Extract the excerpt: everything before the first `separator`, or the
/// whole body when the separator never occurs.
pub fn extract_excerpt(content: &str, separator: &str) -> String {
    let content = content.trim_start();
    if separator.is_empty() {
        return content.to_string();
    }

    match content.find(separator) {
        Some(pos) => content[..pos].trim_end().to_string(),
        None => content.trim_end().to_string(),
    }
}
