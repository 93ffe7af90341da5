//! Configuration management for practice-feed.
//!
//! Configuration is read from `~/.config/practice-feed/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::controller::{FailureAction, FailurePolicy, FeedOptions};
use crate::domain::DEFAULT_PAGE_SIZE;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub feed: FeedConfig,
    pub connectivity: ConnectivityConfig,
}

/// Backend location and HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/practicelog` endpoint hangs off
    pub base_url: String,

    /// Whole-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Pagination behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Items per page (default: 10)
    pub page_size: u32,

    /// What a transport failure on the first page does (default: log_only)
    pub first_page_failure: FailureAction,

    /// What a transport failure on a later page does (default: clear_items)
    pub next_page_failure: FailureAction,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let policy = FailurePolicy::default();
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            first_page_failure: policy.first_page,
            next_page_failure: policy.next_page,
        }
    }
}

impl FeedConfig {
    pub fn options(&self) -> FeedOptions {
        FeedOptions {
            page_size: self.page_size.max(1),
            failure_policy: FailurePolicy {
                first_page: self.first_page_failure,
                next_page: self.next_page_failure,
            },
        }
    }
}

/// Reachability probe settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    /// `host:port` to probe; the API host when unset
    pub probe_addr: Option<String>,

    /// Probe timeout in milliseconds (default: 2000)
    pub probe_timeout_ms: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_addr: None,
            probe_timeout_ms: 2000,
        }
    }
}

impl ConnectivityConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/practice-feed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("practice-feed").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> &'static str {
        r##"# practice-feed configuration

[api]
# Server hosting the /practicelog endpoint
base_url = "http://localhost:8080"

# Whole-request timeout in seconds
request_timeout_secs = 10

[feed]
# Items requested per page
page_size = 10

# What a transport failure does, per load path:
# - "log_only"     log it, keep the feed, show nothing
# - "report_error" show "request failed, please retry", keep the feed
# - "clear_items"  empty the feed
first_page_failure = "log_only"
next_page_failure = "clear_items"

[connectivity]
# Host probed before each request (defaults to the api host)
# probe_addr = "example.com:443"

# Probe timeout in milliseconds
probe_timeout_ms = 2000
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(content).expect("Default config should be valid TOML");

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.feed.page_size, 10);
        assert_eq!(config.feed.first_page_failure, FailureAction::LogOnly);
        assert_eq!(config.feed.next_page_failure, FailureAction::ClearItems);
        assert_eq!(config.connectivity.probe_addr, None);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feed]
page_size = 25
next_page_failure = "report_error"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom values
        assert_eq!(config.feed.page_size, 25);
        assert_eq!(config.feed.next_page_failure, FailureAction::ReportError);
        // Default values
        assert_eq!(config.feed.first_page_failure, FailureAction::LogOnly);
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.connectivity.probe_timeout(), Duration::from_millis(2000));
        assert_eq!(config.feed.options(), FeedOptions::default());
    }

    #[test]
    fn test_unknown_failure_action_is_rejected() {
        let content = r##"
[feed]
first_page_failure = "retry_forever"
"##;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let feed = FeedConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(feed.options().page_size, 1);
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.feed.page_size, 10);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[connectivity]"));
    }

    #[test]
    fn test_load_from_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"https://api.example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
