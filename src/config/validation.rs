use log::{info, warn};

use crate::config::permalink::PermalinkStyle;
use crate::config::Config;
use crate::utils::error::{QuillError, QuillResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> QuillResult<()> {
    validate_source_directory(config)?;
    validate_permalink(config)?;
    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> QuillResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(QuillError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !source.is_dir() {
        return Err(QuillError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Custom permalinks must be non-empty; one without any `:token` is legal
/// but makes every post share a URL
fn validate_permalink(config: &Config) -> QuillResult<()> {
    if let PermalinkStyle::Custom(pattern) = &config.permalink {
        if pattern.trim().is_empty() {
            return Err(QuillError::Config("Permalink pattern is empty".to_string()));
        }

        if !pattern.contains(':') {
            warn!("Permalink pattern has no placeholders: {}", pattern);
        }
    }

    Ok(())
}
