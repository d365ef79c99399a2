//! Type-safe wrappers for command-line values.

pub mod format;
pub mod http_url;

pub use format::OutputFormat;
pub use http_url::HttpUrl;
