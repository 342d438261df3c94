//! Shared configuration for the storelight tools.
//!
//! Configuration lives in a TOML file (`~/.config/storelight/config.toml`
//! on Linux) merged with `STORELIGHT_`-prefixed environment variables, via
//! figment. The file is optional: a missing file resolves to the default
//! (unconfigured) config, which downstream consumers treat as demo mode.
//!
//! ```toml
//! [backend]
//! url = "https://catalog.example.com"
//! api_key = "sk_live_..."
//! project_id = "storefront-prod"
//! ```

mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

pub use error::ConfigError;

/// Request timeout applied when the profile doesn't set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_PREFIX: &str = "STORELIGHT_";

// ── Types ───────────────────────────────────────────────────────────

/// Top-level configuration file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Hosted backend connection profile. Absent means demo mode.
    pub backend: Option<BackendProfile>,
}

/// Connection profile for the hosted catalog backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendProfile {
    /// Service root URL.
    pub url: String,
    /// Bearer API key.
    pub api_key: Option<String>,
    /// Backend project identifier (informational).
    pub project_id: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// A validated, ready-to-use backend connection.
#[derive(Debug, Clone)]
pub struct ResolvedBackend {
    pub url: Url,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl Config {
    /// Whether connection credentials are present: a backend profile with a
    /// non-blank URL and API key.
    pub fn is_configured(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| {
            !b.url.trim().is_empty() && b.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
        })
    }
}

impl BackendProfile {
    /// Validate the profile into a [`ResolvedBackend`].
    pub fn resolve(&self) -> Result<ResolvedBackend, ConfigError> {
        let url: Url = self.url.parse().map_err(|_| ConfigError::Validation {
            field: "backend.url".into(),
            reason: format!("invalid URL: {}", self.url),
        })?;

        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::Validation {
                field: "backend.api_key".into(),
                reason: "missing or blank".into(),
            })?;

        Ok(ResolvedBackend {
            url,
            api_key: SecretString::from(api_key.to_owned()),
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Path of the config file (`<config dir>/storelight/config.toml`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", "storelight").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Load configuration from an explicit file path, with `STORELIGHT_` env
/// vars layered on top (`STORELIGHT_BACKEND__URL` → `backend.url`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::Figment(Box::new(e)))
}

/// Load configuration from the default path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path()?)
}

/// Load configuration, falling back to the default (unconfigured) config
/// when the file is missing or unreadable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Tests ───────────────────────────────────────────────────────────
