use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "quillpress")]
#[command(about = "Dated blog posts with Jekyll-style permalinks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file, may be repeated
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts with their dates and URLs
    #[command(alias = "ls")]
    List {
        /// Include posts marked as unpublished
        #[arg(long, default_value_t = false)]
        unpublished: bool,
    },

    /// Render every post into the destination
    #[command(alias = "b")]
    Build {
        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Render posts that were marked as unpublished
        #[arg(long, default_value_t = false)]
        unpublished: bool,
    },
}
