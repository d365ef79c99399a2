//! Error types for the underrated-mlb viewer

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    /// The request could not complete (connect, timeout, body read).
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. Displays as e.g. `Failed to fetch data: 500 Internal Server Error`.
    #[error("Failed to fetch data: {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("Response body is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid data format received: {detail}")]
    InvalidFormat { detail: String },

    /// The server answered successfully but put an `error` string in the body.
    #[error("{message}")]
    ServerReported { message: String },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidSetting { name: String, value: String },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl StatsError {
    /// True for the failures a stats fetch can end in, as opposed to local
    /// configuration or output problems.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            StatsError::Network(_)
                | StatsError::HttpStatus { .. }
                | StatsError::Parse(_)
                | StatsError::InvalidFormat { .. }
                | StatsError::ServerReported { .. }
        )
    }
}
