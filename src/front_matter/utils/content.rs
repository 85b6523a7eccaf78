use crate::front_matter::types::FrontMatter;
use crate::utils::error::{QuillError, QuillResult};

/// Check if content has a front matter block
pub fn has_front_matter(content: &str) -> bool {
    content.starts_with("---\n") || content.starts_with("---\r\n")
}

/// Split a document into its front matter and body.
///
/// A document without a leading `---` block has empty front matter and
/// the whole text as body. `file` is only used in error messages.
pub fn split_document(content: &str, file: &str) -> QuillResult<(FrontMatter, String)> {
    if !has_front_matter(content) {
        return Ok((FrontMatter::default(), content.to_string()));
    }

    let header_start = content.find('\n').map_or(content.len(), |i| i + 1);
    let rest = &content[header_start..];

    let (yaml, body) = match find_closing_fence(rest) {
        Some((yaml_end, body_start)) => (&rest[..yaml_end], &rest[body_start..]),
        None => {
            return Err(QuillError::FrontMatter {
                file: file.to_string(),
                message: "missing closing delimiter".to_string(),
            })
        }
    };

    let front_matter = FrontMatter::from_yaml(yaml).map_err(|e| QuillError::FrontMatter {
        file: file.to_string(),
        message: e.to_string(),
    })?;

    Ok((front_matter, body.trim_start_matches(['\r', '\n']).to_string()))
}

/// Locate a line consisting of `---`; returns (end of YAML, start of body)
fn find_closing_fence(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}
