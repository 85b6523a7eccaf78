use std::collections::{HashMap, HashSet};
use std::path::Path;

use liquid::model::{Value, ValueView};
use liquid::{Object, Parser};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::front_matter::{split_document, FrontMatter};
use crate::utils::error::{QuillError, QuillResult};
use crate::utils::path::get_stem;

/// A named layout: a template body plus its own front matter, which may
/// name a parent layout
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub name: String,
    pub content: String,
    pub front_matter: FrontMatter,
}

/// Layouts by name
pub type Layouts = HashMap<String, Layout>;

/// Turns content plus a payload into output text.
///
/// `layouts` is the set the page's `layout` key (and each layout's own
/// `layout` key) is looked up in. An empty set renders the content alone.
pub trait Renderer {
    fn render(&self, content: &str, payload: &Object, layouts: &Layouts) -> QuillResult<String>;
}

/// Layout renderer for Jekyll-style layouts, backed by Liquid
pub struct LiquidRenderer {
    parser: Parser,
}

impl LiquidRenderer {
    /// Create a new renderer with the Liquid standard library
    pub fn new() -> QuillResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| QuillError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        Ok(LiquidRenderer { parser })
    }

    fn render_template(&self, source: &str, globals: &Object, name: &str) -> QuillResult<String> {
        let template = self
            .parser
            .parse(source)
            .map_err(|e| QuillError::Template(format!("Failed to parse {}: {}", name, e)))?;

        template
            .render(globals)
            .map_err(|e| QuillError::Template(format!("Failed to render {}: {}", name, e)))
    }
}

impl Renderer for LiquidRenderer {
    fn render(&self, content: &str, payload: &Object, layouts: &Layouts) -> QuillResult<String> {
        let mut output = self.render_template(content, payload, "content")?;
        if layouts.is_empty() {
            return Ok(output);
        }

        let mut seen = HashSet::new();
        let mut next = page_layout(payload);

        while let Some(name) = next {
            if !seen.insert(name.clone()) {
                warn!("Layout cycle detected at '{}', stopping", name);
                break;
            }

            let layout = layouts
                .get(&name)
                .ok_or_else(|| QuillError::Template(format!("Layout not found: {}", name)))?;
            debug!("Using layout: {}", name);

            let mut globals = payload.clone();
            globals.insert("content".into(), Value::scalar(output));
            globals.insert("layout".into(), Value::Object(layout.front_matter.to_liquid_object()));

            output = self.render_template(&layout.content, &globals, &name)?;
            next = layout.front_matter.layout();
        }

        Ok(output)
    }
}

/// `page.layout` from a payload, if set
fn page_layout(payload: &Object) -> Option<String> {
    let page = payload.get("page")?.as_object()?;
    let layout = page.get("layout")?;
    if layout.is_nil() {
        return None;
    }
    Some(layout.to_kstr().to_string())
}

/// Load every layout file directly inside `dir`, keyed by file stem.
///
/// A missing directory yields no layouts.
pub fn load_layouts(dir: &Path) -> QuillResult<Layouts> {
    let mut layouts = Layouts::new();
    if !dir.is_dir() {
        debug!("Layouts directory does not exist: {}", dir.display());
        return Ok(layouts);
    }

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| QuillError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(name) = get_stem(path) else {
            continue;
        };

        let text = std::fs::read_to_string(path)?;
        let (front_matter, content) = split_document(&text, &path.display().to_string())?;
        debug!("Loaded layout: {}", name);

        layouts.insert(
            name.clone(),
            Layout {
                name,
                content,
                front_matter,
            },
        );
    }

    Ok(layouts)
}
