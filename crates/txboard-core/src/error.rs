//! Error types for txboard-core
//!
//! Error codes, severities and detailed messages for the record sources
//! and the list pipeline. Nothing in the pipeline performs I/O, so most
//! variants come from fetching or decoding the record set.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Remote request failed
    FetchFailed,
    /// Remote response could not be decoded
    InvalidResponse,
    /// A record carried an invalid field
    InvalidRecord,
    /// Page size must be positive
    InvalidPageSize,
    /// Source could not be constructed from the configuration
    ConfigError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::FetchFailed => write!(f, "FETCH_FAILED"),
            ErrorCode::InvalidResponse => write!(f, "INVALID_RESPONSE"),
            ErrorCode::InvalidRecord => write!(f, "INVALID_RECORD"),
            ErrorCode::InvalidPageSize => write!(f, "INVALID_PAGE_SIZE"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application may be unstable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for txboard-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid record field {field}: {reason}")]
    InvalidRecord { field: String, reason: String },

    #[error("Invalid page size: {size}")]
    InvalidPageSize { size: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::FetchFailed { .. } => ErrorCode::FetchFailed,
            CoreError::InvalidResponse { .. } => ErrorCode::InvalidResponse,
            CoreError::InvalidRecord { .. } => ErrorCode::InvalidRecord,
            CoreError::InvalidPageSize { .. } => ErrorCode::InvalidPageSize,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::FetchFailed { .. } => ErrorSeverity::Error,
            CoreError::InvalidResponse { .. } => ErrorSeverity::Error,
            CoreError::InvalidRecord { .. } => ErrorSeverity::Warning,
            CoreError::InvalidPageSize { .. } => ErrorSeverity::Info,
            CoreError::ConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::FetchFailed { .. } => {
                details = details.with_suggestion(
                    "Check that data.remote.base_url points at a reachable server.".to_string()
                );
                details = details.with_suggestion(
                    "The list stays empty until the next successful reload.".to_string()
                );
            }
            CoreError::InvalidResponse { message } => {
                details = details.with_detail(serde_json::json!({ "decode_message": message }));
                details = details.with_suggestion(
                    "The endpoint must return {\"transactions\": [...]}.".to_string()
                );
            }
            CoreError::InvalidRecord { field, .. } => {
                details = details.with_detail(serde_json::json!({ "field": field }));
            }
            CoreError::InvalidPageSize { .. } => {
                details = details.with_suggestion(
                    "Page size must be a positive integer.".to_string()
                );
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<reqwest::Error> for CoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            CoreError::InvalidResponse { message: error.to_string() }
        } else {
            CoreError::FetchFailed { message: error.to_string() }
        }
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Record source involved, if any
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: String) -> Self {
        Self {
            operation,
            source: None,
        }
    }

    pub fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
    /// Log a warning
    fn log_warning(&self, message: &str, context: &ErrorContext);
}

/// Log level an error of this severity is reported at
pub fn log_level(severity: ErrorSeverity) -> log::Level {
    match severity {
        ErrorSeverity::Info => log::Level::Info,
        ErrorSeverity::Warning => log::Level::Warn,
        ErrorSeverity::Error | ErrorSeverity::Critical => log::Level::Error,
    }
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        let severity = error.severity();
        log::log!(
            target: "txboard::error",
            log_level(severity),
            "{} [{}] {} - Operation: {} - Source: {:?}",
            severity.to_string().to_uppercase(),
            error.code(),
            error.to_details(),
            context.operation,
            context.source
        );
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "txboard::error",
            "WARNING: {} - Operation: {} - Source: {:?}",
            message,
            context.operation,
            context.source
        );
    }
}

// ==================== Tests ====================
