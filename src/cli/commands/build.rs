use std::path::PathBuf;

use log::info;

use crate::collections::Site;
use crate::config::Config;
use crate::layout::LiquidRenderer;
use crate::utils::error::QuillResult;

/// Render every post and write it under the destination.
///
/// A `--destination` flag is taken as given; the configured destination
/// is resolved against the source.
pub fn handle_build_command(config: Config, destination: Option<&PathBuf>) -> QuillResult<()> {
    let dest = match destination {
        Some(dir) => dir.clone(),
        None => config.destination_path(),
    };

    info!("Building site...");
    let mut site = Site::read(config)?;
    let renderer = LiquidRenderer::new()?;
    site.render(&renderer)?;

    let written = site.write(&dest)?;
    info!("Site built successfully: {} posts at {}", written, dest.display());
    Ok(())
}
