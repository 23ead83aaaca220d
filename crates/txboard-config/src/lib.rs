//! Configuration management for txboard
//!
//! This module handles loading, validation, and management of
//! txboard configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

/// Upper bound for generated mock records
pub const MAX_MOCK_RECORDS: usize = 10_000;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Where the record set comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Generated mock transactions
    #[default]
    Mock,
    /// Fetched from a remote transactions endpoint
    Remote,
}

impl std::str::FromStr for SourceKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SourceKind::Mock),
            "remote" => Ok(SourceKind::Remote),
            _ => Err(format!("Invalid data source: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Mock => write!(f, "mock"),
            SourceKind::Remote => write!(f, "remote"),
        }
    }
}

/// Mock generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Number of records to generate
    #[serde(default = "default_mock_count")]
    pub count: usize,
    /// Fixed RNG seed for reproducible data
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            count: default_mock_count(),
            seed: None,
        }
    }
}

fn default_mock_count() -> usize {
    100
}

/// Remote endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL; transactions are read from `{base_url}/api/transactions`
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Source of the record set
    #[serde(default)]
    pub source: SourceKind,
    /// Periodic refresh interval in seconds (0 disables refresh)
    #[serde(default)]
    pub refresh_interval_secs: u64,
    /// Mock generator settings
    #[serde(default)]
    pub mock: MockConfig,
    /// Remote endpoint settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Records per page on first load
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Choices offered by the per-page selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

impl PaginationConfig {
    /// Check whether a page size is one of the offered choices
    pub fn is_allowed(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}

/// A single headline figure in the statistics panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

/// Statistics panel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Static lookup table of headline figures
    #[serde(default = "default_headline_stats")]
    pub headline: Vec<StatEntry>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            headline: default_headline_stats(),
        }
    }
}

fn default_headline_stats() -> Vec<StatEntry> {
    [
        ("Total Volume", "$2.4M+"),
        ("Transactions", "150K+"),
        ("Active Merchants", "1,200+"),
        ("Avg. Settlement", "< 3s"),
    ]
    .iter()
    .map(|(label, value)| StatEntry {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Statistics panel settings
    #[serde(default)]
    pub stats: StatsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        let pagination = &self.pagination;
        if pagination.page_size_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_size_options".to_string(),
                reason: "At least one page size option is required".to_string(),
            });
        }
        if pagination.page_size_options.iter().any(|&n| n == 0) {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_size_options".to_string(),
                reason: "Page sizes must be greater than 0".to_string(),
            });
        }
        if !pagination.is_allowed(pagination.default_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "pagination.default_page_size".to_string(),
                reason: format!(
                    "Default page size must be one of {:?}",
                    pagination.page_size_options
                ),
            });
        }

        if self.data.source == SourceKind::Remote && self.data.remote.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.remote.base_url".to_string(),
                reason: "A base URL is required when the data source is remote".to_string(),
            });
        }

        if self.data.mock.count > MAX_MOCK_RECORDS {
            return Err(ConfigError::InvalidValue {
                field: "data.mock.count".to_string(),
                reason: format!("Mock record count must be at most {}", MAX_MOCK_RECORDS),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Periodic refresh interval, if enabled
    pub fn refresh_interval(&self) -> Option<std::time::Duration> {
        match self.data.refresh_interval_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}
