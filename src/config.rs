//! Server configuration
//!
//! Loaded from an optional YAML file named by `WEBWORKER_CONFIG`, with the
//! listen address overridable through `LISTEN`. Every field has a default, so
//! an empty (or absent) file yields a working configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_ENV: &str = "WEBWORKER_CONFIG";
const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid YAML for [`Config`]
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Per-connection settings, shared read-only by every handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory request targets are resolved against
    pub document_root: PathBuf,
    /// Value of the `Server` response header
    pub server_header: String,
    /// Text appended to lines carrying the `<cs371server>` marker
    pub marker_server_name: String,
    /// Upper bound on waiting for each request line; unset means block
    pub read_timeout_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("."),
            server_header: "Jon's very own server".to_string(),
            marker_server_name: "Geralds Server".to_string(),
            read_timeout_secs: None,
        }
    }
}

impl SiteConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Build the configuration from the environment.
    ///
    /// A config file that cannot be used is reported and replaced by defaults.
    pub fn load() -> Self {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path, error = %e, "Falling back to default configuration");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        cfg
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty document deserialises to unit, not to a mapping
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(ConfigError::Parse)
    }
}
