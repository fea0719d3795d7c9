//! Error types for the monitoring engine

use thiserror::Error;

/// Result type alias for the monitoring engine
pub type Result<T> = std::result::Result<T, MonitoringError>;

/// Main error type for the monitoring engine
#[derive(Error, Debug)]
pub enum MonitoringError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors reported by an alert listener
    #[error("Listener error: {0}")]
    Listener(String),

    /// Background scheduler errors
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}
