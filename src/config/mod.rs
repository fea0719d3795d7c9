//! Configuration management for the monitoring engine
//!
//! This module handles loading, validation, and management of monitoring configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitoringError, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct for the monitoring engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Monitoring configuration
    pub monitoring: MonitoringConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// Read failures surface as [`MonitoringError::Io`], malformed YAML as
    /// [`MonitoringError::Yaml`] and out-of-range values as
    /// [`MonitoringError::Config`].
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let monitoring: MonitoringConfig = serde_yaml::from_str(&content)?;

        let config = Self { monitoring };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from `MONITOR_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; a variable that is set but does
    /// not parse is a configuration error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut monitoring = MonitoringConfig::default();

        if let Some(v) = parse_var(&lookup, "MONITOR_ERROR_RATE_PERCENT")? {
            monitoring.alerts.error_rate_percent = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_RESPONSE_TIME_MS")? {
            monitoring.alerts.response_time_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_SLOW_REQUEST_MS")? {
            monitoring.alerts.slow_request_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_CRITICAL_STATUS_CODE")? {
            monitoring.alerts.critical_status_code = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_RETENTION_HOURS")? {
            monitoring.retention.max_age_hours = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_MAX_ALERT_HISTORY")? {
            monitoring.retention.max_alert_history = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_SCHEDULER_ENABLED")? {
            monitoring.scheduler.enabled = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_EVALUATION_INTERVAL_SECS")? {
            monitoring.scheduler.evaluation_interval_secs = v;
        }
        if let Some(v) = parse_var(&lookup, "MONITOR_CLEANUP_INTERVAL_SECS")? {
            monitoring.scheduler.cleanup_interval_secs = v;
        }

        let config = Self { monitoring };
        config.validate()?;
        Ok(config)
    }

    /// Get monitoring configuration
    pub fn monitoring(&self) -> &MonitoringConfig {
        &self.monitoring
    }

    /// Get scheduler configuration
    pub fn scheduler(&self) -> &SchedulerConfig {
        &self.monitoring.scheduler
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.monitoring
            .validate()
            .map_err(|e| MonitoringError::Config(format!("Monitoring config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.monitoring = self.monitoring.merge(other.monitoring);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.monitoring)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.monitoring)?)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| MonitoringError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(None),
    }
}
