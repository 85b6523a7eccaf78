pub mod commands;
pub mod logging;
pub mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::config::{self, Config};
use crate::utils::error::QuillResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);

    let result = match &cli.command {
        types::Commands::List { unpublished } => {
            load(&cli, *unpublished).and_then(commands::handle_list_command)
        }
        types::Commands::Build { destination, unpublished } => load(&cli, *unpublished)
            .and_then(|config| commands::handle_build_command(config, destination.as_ref())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration for the chosen source and apply command line overrides
fn load(cli: &types::Cli, unpublished: bool) -> QuillResult<Config> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source, cli.config.clone())?;

    if unpublished {
        config.unpublished = true;
    }
    Ok(config)
}
