//! Settings resolution: CLI flag, then environment variable, then config
//! file, then built-in default.
//!
//! The config file is TOML and optional:
//!
//! ```toml
//! [source]
//! endpoint = "http://localhost:8000/api/baseball-stats"
//! image_base = "http://localhost:8000"
//! timeout_secs = 10
//!
//! [logging]
//! filter = "underrated_mlb=debug"
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::{
    cli::types::HttpUrl,
    error::{Result, StatsError},
    ENDPOINT_ENV_VAR, IMAGE_BASE_ENV_VAR, LOG_ENV_VAR, TIMEOUT_ENV_VAR,
};

pub const DEFAULT_ENDPOINT: &str =
    "https://lch99310.github.io/underestimated_MLBplayer_ranking/api/baseball-stats";
pub const DEFAULT_IMAGE_BASE: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "underrated_mlb=warn";

/// Contents of the optional config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub source: SourceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: Option<HttpUrl>,
    pub image_base: Option<HttpUrl>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: Option<String>,
}

impl ConfigFile {
    /// `<config dir>/underrated-mlb/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("underrated-mlb").join("config.toml"))
    }

    /// Read and parse `path`. A missing file yields the empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| StatsError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(StatsError::Io(err)),
        }
    }

    /// Load the explicit path if given, else the default location.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = explicit.map(Path::to_path_buf).or_else(Self::default_path);
        match path {
            Some(path) => {
                tracing::debug!("Reading config from {}", path.display());
                Ok((Self::load(&path)?, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<HttpUrl>,
    pub image_base: Option<HttpUrl>,
    pub timeout_secs: Option<u64>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Flag,
    Env,
    File,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Origin::Flag => "command line",
            Origin::Env => "environment",
            Origin::File => "config file",
            Origin::Default => "default",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Setting<T> {
    fn new(value: T, origin: Origin) -> Self {
        Self { value, origin }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Setting<HttpUrl>,
    pub image_base: Setting<HttpUrl>,
    pub timeout: Setting<Duration>,
    pub log_filter: Setting<String>,
}

impl Settings {
    /// Resolve against the process environment.
    pub fn resolve(flags: &Overrides, file: &ConfigFile) -> Result<Self> {
        Self::resolve_with(flags, file, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with<F>(flags: &Overrides, file: &ConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = pick_url(
            flags.endpoint.as_ref(),
            env(ENDPOINT_ENV_VAR),
            file.source.endpoint.as_ref(),
            DEFAULT_ENDPOINT,
        )?;
        let image_base = pick_url(
            flags.image_base.as_ref(),
            env(IMAGE_BASE_ENV_VAR),
            file.source.image_base.as_ref(),
            DEFAULT_IMAGE_BASE,
        )?;

        let env_timeout = env(TIMEOUT_ENV_VAR)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| StatsError::InvalidSetting {
                    name: TIMEOUT_ENV_VAR.to_string(),
                    value: raw.clone(),
                })
            })
            .transpose()?;
        let timeout = match (flags.timeout_secs, env_timeout, file.source.timeout_secs) {
            (Some(secs), _, _) => Setting::new(secs, Origin::Flag),
            (None, Some(secs), _) => Setting::new(secs, Origin::Env),
            (None, None, Some(secs)) => Setting::new(secs, Origin::File),
            (None, None, None) => Setting::new(DEFAULT_TIMEOUT_SECS, Origin::Default),
        };
        if timeout.value == 0 {
            return Err(StatsError::InvalidSetting {
                name: "timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }

        let log_filter = if let Some(filter) = env(LOG_ENV_VAR) {
            Setting::new(filter, Origin::Env)
        } else if let Some(filter) = env("RUST_LOG") {
            Setting::new(filter, Origin::Env)
        } else if let Some(filter) = &file.logging.filter {
            Setting::new(filter.clone(), Origin::File)
        } else {
            Setting::new(DEFAULT_LOG_FILTER.to_string(), Origin::Default)
        };

        Ok(Self {
            endpoint,
            image_base,
            timeout: Setting::new(Duration::from_secs(timeout.value), timeout.origin),
            log_filter,
        })
    }
}

fn pick_url(
    flag: Option<&HttpUrl>,
    env: Option<String>,
    file: Option<&HttpUrl>,
    default: &str,
) -> Result<Setting<HttpUrl>> {
    if let Some(url) = flag {
        return Ok(Setting::new(url.clone(), Origin::Flag));
    }
    if let Some(raw) = env {
        return Ok(Setting::new(raw.parse()?, Origin::Env));
    }
    if let Some(url) = file {
        return Ok(Setting::new(url.clone(), Origin::File));
    }
    Ok(Setting::new(default.parse()?, Origin::Default))
}
