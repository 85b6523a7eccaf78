use chrono::{DateTime, FixedOffset};
use liquid::Object;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::utils::date::parse_timestamp;
use crate::utils::error::{QuillError, QuillResult};
use crate::utils::value::{yaml_mapping_to_liquid, yaml_scalar_to_string};

/// Front matter of a post: an opaque YAML mapping with typed accessors
/// for the keys the post model cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    data: Mapping,
}

impl From<Mapping> for FrontMatter {
    fn from(data: Mapping) -> Self {
        FrontMatter { data }
    }
}

impl FrontMatter {
    /// Create a new empty front matter
    pub fn new() -> Self {
        FrontMatter::default()
    }

    /// Parse a YAML mapping. Empty input yields an empty front matter.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Ok(FrontMatter::default()),
            value => serde_yaml::from_value(value),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.data.insert(Value::String(key.to_string()), value);
    }

    /// String value of a key; non-string scalars are stringified
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(yaml_scalar_to_string)
    }

    /// Date override, if the document sets one.
    ///
    /// A present but unparseable date is an error naming `file`.
    pub fn get_date(&self, file: &str) -> QuillResult<Option<DateTime<FixedOffset>>> {
        let raw = match self.get("date") {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => yaml_scalar_to_string(value)
                .unwrap_or_else(|| format!("{:?}", value)),
        };

        parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| QuillError::invalid_date(file, raw))
    }

    /// False only when `published` is explicitly the boolean `false`
    pub fn is_published(&self) -> bool {
        !matches!(self.get("published"), Some(Value::Bool(false)))
    }

    /// Values of a field that may be written singular or plural.
    ///
    /// The singular key wins when present (a single value, unless null).
    /// Otherwise a plural string is split on whitespace and a plural
    /// sequence is used as-is minus nulls.
    pub fn pluralized_array(&self, singular: &str, plural: &str) -> Vec<Value> {
        if let Some(value) = self.get(singular) {
            return match value {
                Value::Null => Vec::new(),
                other => vec![other.clone()],
            };
        }

        match self.get(plural) {
            Some(Value::String(s)) => s
                .split_whitespace()
                .map(|part| Value::String(part.to_string()))
                .collect(),
            Some(Value::Sequence(seq)) => seq.iter().filter(|v| !v.is_null()).cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Categories for a post.
    ///
    /// Directory categories win outright when there are any; the
    /// `category`/`categories` fields are only read otherwise. Either
    /// source is lowercased, with empty and repeated entries dropped.
    pub fn get_categories(&self, dir_categories: &[String]) -> Vec<String> {
        let raw: Vec<String> = if dir_categories.iter().any(|c| !c.is_empty()) {
            dir_categories.to_vec()
        } else {
            flatten_strings(&self.pluralized_array("category", "categories"))
        };

        let mut categories: Vec<String> = Vec::new();
        for category in raw.into_iter().map(|c| c.to_lowercase()) {
            if !category.is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Tags from `tag`/`tags`, flattened, order and case preserved
    pub fn get_tags(&self) -> Vec<String> {
        flatten_strings(&self.pluralized_array("tag", "tags"))
    }

    pub fn excerpt_override(&self) -> Option<String> {
        self.get_string("excerpt")
    }

    pub fn title_override(&self) -> Option<String> {
        self.get_string("title")
    }

    pub fn permalink_override(&self) -> Option<String> {
        self.get_string("permalink")
    }

    pub fn path_override(&self) -> Option<String> {
        self.get_string("path")
    }

    pub fn layout(&self) -> Option<String> {
        self.get_string("layout")
    }

    pub fn excerpt_separator(&self) -> Option<String> {
        self.get_string("excerpt_separator")
    }

    /// Convert front matter to a Liquid object for templates
    pub fn to_liquid_object(&self) -> Object {
        yaml_mapping_to_liquid(&self.data)
    }
}

/// Flatten nested sequences into their scalar string values
fn flatten_strings(values: &[Value]) -> Vec<String> {
    let mut out = Vec::new();
    for value in values {
        match value {
            Value::Sequence(seq) => out.extend(flatten_strings(seq)),
            other => out.extend(yaml_scalar_to_string(other)),
        }
    }
    out
}
