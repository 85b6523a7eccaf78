use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{QuillError, QuillResult};

/// Load site configuration.
///
/// Reads `config_files` when given, otherwise every default config file
/// present in `source_dir`. Later files override earlier ones key by key.
/// Relative `source` settings are resolved against `source_dir`.
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_files: Option<Vec<PathBuf>>) -> QuillResult<Config> {
    let source_dir = source_dir.as_ref();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(source_dir),
    };

    let mut merged = Mapping::new();
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    }
    for path in &config_paths {
        debug!("Loading configuration from {}", path.display());
        for (key, value) in read_config_file(path)? {
            merged.insert(key, value);
        }
    }

    let mut config: Config = serde_yaml::from_value(Value::Mapping(merged))
        .map_err(|e| QuillError::Config(format!("Invalid configuration: {}", e)))?;
    config.source = source_dir.join(&config.source);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files(source_dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a mapping, parsed by extension
fn read_config_file(path: &Path) -> QuillResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|e| {
        QuillError::Config(format!("Failed to read configuration file {}: {}", path.display(), e))
    })?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let value: Value = match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| parse_error(path, e))?,
        "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, e))?,
        // YAML is the default, with or without an extension
        "yml" | "yaml" | "" => serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))?,
        other => {
            return Err(QuillError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )))
        }
    };

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(QuillError::Config(format!(
            "Configuration file {} must contain a mapping",
            path.display()
        ))),
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> QuillError {
    QuillError::Config(format!("Failed to parse configuration ({}): {}", path.display(), err))
}
