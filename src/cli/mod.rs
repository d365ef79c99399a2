//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{HttpUrl, OutputFormat};

use crate::config::Overrides;

/// Where to fetch from, shared between commands.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Stats endpoint URL (or set `UNDERRATED_MLB_ENDPOINT`).
    #[clap(long)]
    pub endpoint: Option<HttpUrl>,

    /// Host serving `/plots/player_<id>.png` (or set `UNDERRATED_MLB_IMAGE_BASE`).
    #[clap(long)]
    pub image_base: Option<HttpUrl>,

    /// Request timeout in seconds (or set `UNDERRATED_MLB_TIMEOUT_SECS`).
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            image_base: self.image_base.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the underestimated-player list and render it as cards.
    Show {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Check each player plot and leave out the ones that fail to load.
        #[clap(long)]
        check_images: bool,

        /// Write the rendered view to a file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the resolved settings and where each one came from.
    Config {
        #[clap(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "underrated-mlb",
    about = "Show MLB hitters whose expected wOBA outpaces their results"
)]
pub struct Cli {
    /// Config file (default: `<config dir>/underrated-mlb/config.toml`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log the fetch path at debug level.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
