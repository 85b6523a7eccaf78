use std::collections::HashMap;
use std::path::PathBuf;

use liquid::model::Value;
use liquid::Object;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::config::permalink::PermalinkStyle;
use crate::utils::value::yaml_to_liquid;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source directory for the site
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory for generated output, relative to `source`
    /// unless absolute
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Layouts directory, relative to `source` unless absolute
    #[serde(default = "defaults::default_layouts_dir")]
    pub layouts_dir: PathBuf,

    /// Permalink style or custom template
    #[serde(default)]
    pub permalink: PermalinkStyle,

    /// Separator between excerpt and body when a post sets none
    #[serde(default = "defaults::default_excerpt_separator")]
    pub excerpt_separator: String,

    /// How many posts `site.related_posts` holds
    #[serde(default = "defaults::default_related_posts_limit")]
    pub related_posts_limit: usize,

    /// Keep posts marked `published: false`
    #[serde(default)]
    pub unpublished: bool,

    /// Every other top-level key, exposed to templates under `site`
    #[serde(flatten)]
    pub site_data: HashMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            layouts_dir: defaults::default_layouts_dir(),
            permalink: PermalinkStyle::default(),
            excerpt_separator: defaults::default_excerpt_separator(),
            related_posts_limit: defaults::default_related_posts_limit(),
            unpublished: false,
            site_data: HashMap::new(),
        }
    }
}

impl Config {
    /// Destination directory resolved against the source
    pub fn destination_path(&self) -> PathBuf {
        self.source.join(&self.destination)
    }

    /// Layouts directory resolved against the source
    pub fn layouts_path(&self) -> PathBuf {
        self.source.join(&self.layouts_dir)
    }

    /// Convert config to a Liquid object for use in templates
    pub fn to_liquid(&self) -> Object {
        let mut obj = Object::new();

        for (key, value) in &self.site_data {
            obj.insert(key.clone().into(), yaml_to_liquid(value));
        }

        obj.insert("permalink".into(), Value::scalar(self.permalink.to_string()));
        obj.insert("excerpt_separator".into(), Value::scalar(self.excerpt_separator.clone()));

        obj
    }
}
