use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// `:name` placeholders inside a permalink template
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r":([a-z_]+)").expect("valid token regex"));

/// Runs of two or more slashes
static SLASHES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/{2,}").expect("valid slash regex"));

/// Extension substituted for `:output_ext`
pub const OUTPUT_EXT: &str = ".html";

/// Permalink template patterns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermalinkStyle {
    /// Date style: /:categories/:year/:month/:day/:title.html
    #[default]
    Date,
    /// Pretty style: /:categories/:year/:month/:day/:title/
    Pretty,
    /// Ordinal style: /:categories/:year/:y_day/:title.html
    Ordinal,
    /// None style: /:categories/:title.html
    None,
    /// Custom pattern
    Custom(String),
}

impl From<&str> for PermalinkStyle {
    fn from(s: &str) -> Self {
        match s {
            "date" => PermalinkStyle::Date,
            "pretty" => PermalinkStyle::Pretty,
            "ordinal" => PermalinkStyle::Ordinal,
            "none" => PermalinkStyle::None,
            _ => PermalinkStyle::Custom(s.to_string()),
        }
    }
}

impl From<String> for PermalinkStyle {
    fn from(s: String) -> Self {
        PermalinkStyle::from(s.as_str())
    }
}

impl From<PermalinkStyle> for String {
    fn from(style: PermalinkStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for PermalinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermalinkStyle::Date => f.write_str("date"),
            PermalinkStyle::Pretty => f.write_str("pretty"),
            PermalinkStyle::Ordinal => f.write_str("ordinal"),
            PermalinkStyle::None => f.write_str("none"),
            PermalinkStyle::Custom(pattern) => f.write_str(pattern),
        }
    }
}

impl PermalinkStyle {
    /// Get the template string for this permalink style
    pub fn template(&self) -> &str {
        match self {
            PermalinkStyle::Date => "/:categories/:year/:month/:day/:title.html",
            PermalinkStyle::Pretty => "/:categories/:year/:month/:day/:title/",
            PermalinkStyle::Ordinal => "/:categories/:year/:y_day/:title.html",
            PermalinkStyle::None => "/:categories/:title.html",
            PermalinkStyle::Custom(pattern) => pattern,
        }
    }
}

/// Values substituted into a permalink template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermalinkTokens {
    values: HashMap<String, String>,
}

impl PermalinkTokens {
    pub fn new() -> Self {
        PermalinkTokens::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Token set for a post.
    ///
    /// The slug and each category are percent-encoded; categories are
    /// joined with `/`.
    pub fn for_post(date: &DateTime<FixedOffset>, slug: &str, categories: &[String]) -> Self {
        let categories = categories
            .iter()
            .map(|c| urlencoding::encode(c).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        PermalinkTokens::new()
            .with("year", date.format("%Y").to_string())
            .with("month", date.format("%m").to_string())
            .with("day", date.format("%d").to_string())
            .with("i_month", date.format("%-m").to_string())
            .with("i_day", date.format("%-d").to_string())
            .with("short_month", date.format("%b").to_string())
            .with("y_day", date.format("%j").to_string())
            .with("title", urlencoding::encode(slug).into_owned())
            .with("categories", categories)
            .with("output_ext", OUTPUT_EXT)
    }
}

/// Replace every known `:token` in `template`.
///
/// A single left-to-right pass: substituted text is never rescanned, and
/// unknown names are left as written.
pub fn substitute(template: &str, tokens: &PermalinkTokens) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| match tokens.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Normalize a URL path.
///
/// Repeated slashes collapse, dot-only segments are dropped, a trailing
/// slash on the input is kept, and the result always starts with one `/`.
pub fn sanitize(url: &str) -> String {
    let collapsed = SLASHES_RE.replace_all(url, "/");
    let segments: Vec<&str> = collapsed
        .split('/')
        .filter(|segment| !segment.is_empty() && !segment.chars().all(|c| c == '.'))
        .collect();

    let mut sanitized = format!("/{}", segments.join("/"));
    if url.ends_with('/') && !sanitized.ends_with('/') {
        sanitized.push('/');
    }
    sanitized
}

/// Resolve the URL for `style` from `tokens`
pub fn resolve(style: &PermalinkStyle, tokens: &PermalinkTokens) -> String {
    sanitize(&substitute(style.template(), tokens))
}

/// Resolve a front matter permalink: no substitution, only sanitization
pub fn resolve_override(permalink: &str) -> String {
    sanitize(permalink)
}
