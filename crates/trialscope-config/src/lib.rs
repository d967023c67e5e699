//! Configuration loading for TrialScope.
//! Reads trialscope.toml from the current directory or the path in the
//! TRIALSCOPE_CONFIG env var. A missing file means "all defaults".

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "trialscope.toml";
pub const DEFAULT_API_URL: &str = "https://clinicaltrials.gov/api/v2/studies";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Registry access settings. Fixed at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Records requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Hard ceiling on trials returned to the caller.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url()      -> String { DEFAULT_API_URL.to_string() }
fn default_page_size()    -> usize  { 100 }
fn default_max_results()  -> usize  { 500 }
fn default_timeout_secs() -> u64    { 30 }

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            page_size: default_page_size(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per page in the results table widget.
    #[serde(default = "default_table_page_size")]
    pub table_page_size: usize,
}

fn default_table_page_size() -> usize { 25 }

impl Default for UiConfig {
    fn default() -> Self {
        Self { table_page_size: default_table_page_size() }
    }
}


impl Config {
    /// Load configuration from trialscope.toml, then apply environment
    /// overrides. Checks TRIALSCOPE_CONFIG env var first, then the current
    /// directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("TRIALSCOPE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply TRIALSCOPE_HOST / TRIALSCOPE_PORT / TRIALSCOPE_API_URL.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TRIALSCOPE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TRIALSCOPE_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "TRIALSCOPE_PORT".to_string(),
                message: format!("not a port number: {}", port),
            })?;
        }
        if let Some(url) = lookup("TRIALSCOPE_API_URL") {
            self.registry.base_url = url;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::Invalid {
            key: key.to_string(),
            message: message.to_string(),
        };

        if url::Url::parse(&self.registry.base_url).is_err() {
            return Err(invalid("registry.base_url", "not an absolute URL"));
        }
        if self.registry.page_size == 0 {
            return Err(invalid("registry.page_size", "must be greater than zero"));
        }
        if self.registry.max_results == 0 {
            return Err(invalid("registry.max_results", "must be greater than zero"));
        }
        if self.registry.timeout_secs == 0 {
            return Err(invalid("registry.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
