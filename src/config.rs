//! Configuration System
//!
//! Loads client configuration from a TOML file and environment variables.
//! Environment variables win over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::panel::{PanelConfig, DEFAULT_NOTICE_HIDE_MS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub panel: PanelSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Panel behaviour settings
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSection {
    #[serde(default = "default_notice_hide_ms")]
    pub notice_hide_ms: u64,
}

fn default_notice_hide_ms() -> u64 {
    DEFAULT_NOTICE_HIDE_MS
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            notice_hide_ms: default_notice_hide_ms(),
        }
    }
}

impl PanelSection {
    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig {
            notice_hide_after: Duration::from_millis(self.notice_hide_ms),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mergington").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MERGINGTON_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("MERGINGTON_REQUEST_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }
        if let Some(ms) = lookup("MERGINGTON_NOTICE_MS") {
            if let Ok(ms) = ms.parse() {
                self.panel.notice_hide_ms = ms;
            }
        }
        if let Some(level) = lookup("MERGINGTON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MERGINGTON_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mergington Activities Configuration
#
# Environment variables override these settings:
# - MERGINGTON_API_URL
# - MERGINGTON_REQUEST_TIMEOUT
# - MERGINGTON_NOTICE_MS
# - MERGINGTON_LOG_LEVEL
# - MERGINGTON_LOG_FORMAT

[api]
# Activities backend URL
base_url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 30

[panel]
# How long a success or error message stays visible (ms)
notice_hide_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.panel.panel_config(), PanelConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.panel.notice_hide_ms, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://school.example:9000\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://school.example:9000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.panel.notice_hide_ms, 5000);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = 1").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MERGINGTON_API_URL", "http://override:1234"),
            ("MERGINGTON_NOTICE_MS", "250"),
            ("MERGINGTON_REQUEST_TIMEOUT", "not-a-number"),
            ("MERGINGTON_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://override:1234");
        assert_eq!(config.panel.notice_hide_ms, 250);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
