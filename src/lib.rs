//! MLB Underestimated Players Viewer
//!
//! Fetches the daily list of MLB hitters whose expected wOBA has outpaced
//! their actual wOBA, and renders it as player cards for the terminal, as
//! JSON, or as a standalone HTML page.
//!
//! ## Features
//!
//! - **Single fetch**: one GET to a configurable endpoint per run
//! - **Validation**: HTTP status, JSON, `players` shape and server-reported errors
//! - **Explicit state**: loading, error, or ready, with one-way transitions
//! - **Cards**: rank, name, formatted stats, and an optional plot image per player
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use underrated_mlb::{stats::StatsClient, view::{render_text, ImageSource, StatsView}};
//!
//! # async fn example() -> underrated_mlb::Result<()> {
//! let client = StatsClient::new(
//!     "http://localhost:8000/api/baseball-stats".parse()?,
//!     Duration::from_secs(10),
//! )?;
//! let mut view = StatsView::new(client, ImageSource::new("http://localhost:8000".parse()?));
//!
//! view.mount().await;
//! println!("{}", render_text(&view.page()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the viewer at a local backend instead of the published one:
//! ```bash
//! export UNDERRATED_MLB_ENDPOINT=http://localhost:8000/api/baseball-stats
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use cli::types::{HttpUrl, OutputFormat};
pub use error::{Result, StatsError};
pub use stats::{PlayerId, PlayerStat};
pub use view::{FetchState, StatsView};

pub const ENDPOINT_ENV_VAR: &str = "UNDERRATED_MLB_ENDPOINT";
pub const IMAGE_BASE_ENV_VAR: &str = "UNDERRATED_MLB_IMAGE_BASE";
pub const TIMEOUT_ENV_VAR: &str = "UNDERRATED_MLB_TIMEOUT_SECS";
pub const LOG_ENV_VAR: &str = "UNDERRATED_MLB_LOG";
