//! Output format selection for rendered views.

use std::fmt;

/// How a view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain-text cards for the terminal
    #[default]
    Text,
    /// The fetch state as a tagged JSON object
    Json,
    /// A standalone HTML page
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        };
        write!(f, "{}", s)
    }
}
