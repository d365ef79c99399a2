//! Validated HTTP(S) URL type used for the stats endpoint and image host.

use crate::error::{Result, StatsError};
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An absolute `http` or `https` URL.
///
/// Parsed once at the configuration boundary so the rest of the crate never
/// has to re-validate endpoint strings.
///
/// # Examples
///
/// ```rust
/// use underrated_mlb::HttpUrl;
///
/// let url: HttpUrl = "http://localhost:8000/api/baseball-stats".parse().unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8000/api/baseball-stats");
/// assert!("ftp://localhost/file".parse::<HttpUrl>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpUrl(Url);

impl HttpUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The URL text without any trailing slash, for joining path segments.
    pub fn trimmed(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HttpUrl {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let url = Url::parse(s.trim()).map_err(|e| StatsError::InvalidEndpoint {
            url: s.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(StatsError::InvalidEndpoint {
                url: s.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

impl Serialize for HttpUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HttpUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
