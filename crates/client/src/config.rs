//! Client configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then the
//! environment. Later layers win.
//!
//! # Example
//!
//! ```toml
//! [api]
//! base_url = "https://restcountries.com/v2"
//! timeout_secs = 10
//!
//! [search]
//! suggestion_limit = 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Environment variable overriding `[api] base_url`.
pub const ENV_API_URL: &str = "ATLAS_API_URL";
/// Environment variable overriding `[api] timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "ATLAS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the v2 API; endpoint paths are appended to it.
    pub base_url: Url,
    /// Whole-request timeout for every HTTP call.
    pub timeout_secs: u64,
    /// How many name matches the suggestion list shows.
    pub suggestion_limit: usize,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

// ── File format ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api: ApiSection,
    search: SearchSection,
}

/// `[api]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// `[search]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SearchSection {
    suggestion_limit: Option<usize>,
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
        ClientConfig::resolve(path, |var| std::env::var(var).ok())
    }

    /// Like [`ClientConfig::load`] with an explicit environment lookup.
    pub fn resolve<F>(path: Option<&Path>, env: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match path {
            Some(path) => read_config_file(path)?,
            None => ConfigFile::default(),
        };

        let base_url = match env(ENV_API_URL) {
            Some(raw) => parse_base_url(ENV_API_URL, &raw)?,
            None => parse_base_url(
                "[api] base_url",
                file.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            )?,
        };

        let timeout_secs = match env(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue(ENV_TIMEOUT_SECS.to_string(), format!("{raw:?}: {e}"))
            })?,
            None => file.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "timeout_secs".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(ClientConfig {
            base_url,
            timeout_secs,
            suggestion_limit: file
                .search
                .suggestion_limit
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a base URL that endpoint segments can be appended to.
fn parse_base_url(origin: &str, raw: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(origin.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            origin.to_string(),
            format!("{raw} is not an http(s) base URL"),
        ));
    }
    Ok(url)
}
