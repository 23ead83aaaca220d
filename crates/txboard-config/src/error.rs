//! Error types for txboard-config

use serde::Serialize;
use thiserror::Error;

/// Stable codes for configuration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigErrorCode {
    FileNotFound,
    InvalidYaml,
    InvalidValue,
    IoError,
}

impl ConfigErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ConfigErrorCode::InvalidYaml => "INVALID_YAML",
            ConfigErrorCode::InvalidValue => "INVALID_VALUE",
            ConfigErrorCode::IoError => "IO_ERROR",
        }
    }
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the binary prints when a config file cannot be used
#[derive(Debug, Clone, Serialize)]
pub struct ConfigErrorDetails {
    pub code: ConfigErrorCode,
    pub message: String,
    /// Dotted path of the offending key, e.g. `pagination.default_page_size`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl std::fmt::Display for ConfigErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        for suggestion in &self.suggestions {
            write!(f, "; hint: {}", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("IO error occurred")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    pub fn code(&self) -> ConfigErrorCode {
        match self {
            ConfigError::FileNotFound { .. } => ConfigErrorCode::FileNotFound,
            ConfigError::InvalidYaml { .. } => ConfigErrorCode::InvalidYaml,
            ConfigError::InvalidValue { .. } => ConfigErrorCode::InvalidValue,
            ConfigError::IoError(_) => ConfigErrorCode::IoError,
        }
    }

    /// A missing file starts the server on built-in defaults; anything else aborts start-up
    pub fn falls_back_to_defaults(&self) -> bool {
        matches!(self, ConfigError::FileNotFound { .. })
    }

    pub fn to_details(&self) -> ConfigErrorDetails {
        let (field, suggestions) = match self {
            ConfigError::FileNotFound { .. } => (
                None,
                vec!["run with --print-default-config > config.yaml to create one".to_string()],
            ),
            ConfigError::InvalidYaml { .. } => (
                None,
                vec!["compare the file with the output of --print-default-config".to_string()],
            ),
            ConfigError::InvalidValue { field, .. } => (Some(field.clone()), Vec::new()),
            ConfigError::IoError(_) => (None, Vec::new()),
        };
        ConfigErrorDetails {
            code: self.code(),
            message: self.to_string(),
            field,
            suggestions,
        }
    }
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
