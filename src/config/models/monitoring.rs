//! Monitoring configuration

use super::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root configuration for the monitoring engine
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MonitoringConfig {
    /// Alert thresholds
    #[serde(default)]
    pub alerts: AlertThresholds,
    /// Health classification thresholds
    #[serde(default)]
    pub health: HealthThresholds,
    /// Retention configuration
    #[serde(default)]
    pub retention: RetentionConfig,
    /// Periodic driver configuration
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl MonitoringConfig {
    /// Merge monitoring configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.alerts = self.alerts.merge(other.alerts);
        self.health = self.health.merge(other.health);
        self.retention = self.retention.merge(other.retention);
        self.scheduler = self.scheduler.merge(other.scheduler);
        self
    }
}

/// Observation and alert retention
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetentionConfig {
    /// Maximum age of an observation before it is eligible for pruning
    #[serde(default = "default_retention_hours")]
    pub max_age_hours: u64,
    /// Maximum number of alert records kept in history
    #[serde(default = "default_max_alert_history")]
    pub max_alert_history: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_age_hours: default_retention_hours(),
            max_alert_history: default_max_alert_history(),
        }
    }
}

impl RetentionConfig {
    /// Merge retention configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_age_hours != default_retention_hours() {
            self.max_age_hours = other.max_age_hours;
        }
        if other.max_alert_history != default_max_alert_history() {
            self.max_alert_history = other.max_alert_history;
        }
        self
    }

    /// Retention window as a chrono duration, capped at
    /// [`MAX_RETENTION_HOURS`]
    pub fn max_age(&self) -> chrono::Duration {
        let hours = i64::try_from(self.max_age_hours.min(MAX_RETENTION_HOURS))
            .unwrap_or(MAX_RETENTION_HOURS as i64);
        chrono::Duration::hours(hours)
    }

    /// Oldest timestamp still inside the retention window, or `None` when
    /// the window reaches past the earliest representable time
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        now.checked_sub_signed(self.max_age())
    }
}

/// Scheduler configuration for periodic evaluation and cleanup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulerConfig {
    /// Enable the periodic driver
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between threshold evaluations
    #[serde(default = "default_evaluation_interval_secs")]
    pub evaluation_interval_secs: u64,
    /// Seconds between retention sweeps
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            evaluation_interval_secs: default_evaluation_interval_secs(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

impl SchedulerConfig {
    /// Merge scheduler configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.evaluation_interval_secs != default_evaluation_interval_secs() {
            self.evaluation_interval_secs = other.evaluation_interval_secs;
        }
        if other.cleanup_interval_secs != default_cleanup_interval_secs() {
            self.cleanup_interval_secs = other.cleanup_interval_secs;
        }
        self
    }

    pub fn evaluation_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.evaluation_interval_secs)
    }

    pub fn cleanup_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cleanup_interval_secs)
    }
}

fn default_true() -> bool {
    true
}
