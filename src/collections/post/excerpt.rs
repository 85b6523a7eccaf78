use liquid::Object;

use crate::front_matter::{extract_excerpt, FrontMatter};
use crate::layout::{Layouts, Renderer};
use crate::utils::error::QuillResult;

/// Summary fragment of a post: either the front matter `excerpt` or the
/// body up to the excerpt separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    content: String,
    output: Option<String>,
}

impl Excerpt {
    /// Build the excerpt for a post body. An explicit `excerpt` key skips
    /// extraction entirely.
    pub fn for_post(front_matter: &FrontMatter, body: &str, default_separator: &str) -> Self {
        let content = match front_matter.excerpt_override() {
            Some(excerpt) => excerpt,
            None => {
                let separator = front_matter
                    .excerpt_separator()
                    .unwrap_or_else(|| default_separator.to_string());
                extract_excerpt(body, &separator)
            }
        };

        Excerpt { content, output: None }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Rendered output when available, raw text otherwise
    pub fn text(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.content)
    }

    pub fn render(&mut self, layouts: &Layouts, payload: &Object, renderer: &dyn Renderer) -> QuillResult<()> {
        self.output = Some(renderer.render(&self.content, payload, layouts)?);
        Ok(())
    }
}
