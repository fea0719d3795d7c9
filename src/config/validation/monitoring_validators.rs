//! Monitoring configuration validators
//!
//! This module provides validation implementations for MonitoringConfig,
//! AlertThresholds, HealthThresholds, RetentionConfig and SchedulerConfig.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

fn non_negative(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be a finite number", name));
    }
    if value < 0.0 {
        return Err(format!("{} must not be negative (got {})", name, value));
    }
    Ok(())
}

fn percentage(name: &str, value: f64) -> Result<(), String> {
    non_negative(name, value)?;
    if value > 100.0 {
        return Err(format!("{} must be at most 100 (got {})", name, value));
    }
    Ok(())
}

impl Validate for MonitoringConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating monitoring configuration");

        self.alerts.validate()?;
        self.health.validate()?;
        self.retention.validate()?;
        self.scheduler.validate()?;

        Ok(())
    }
}

impl Validate for AlertThresholds {
    fn validate(&self) -> Result<(), String> {
        percentage("error_rate_percent", self.error_rate_percent)?;
        non_negative("response_time_ms", self.response_time_ms)?;
        non_negative("slow_request_ms", self.slow_request_ms)?;

        if !(100..=599).contains(&self.critical_status_code) {
            return Err(format!(
                "critical_status_code must be a valid HTTP status (got {})",
                self.critical_status_code
            ));
        }

        Ok(())
    }
}

impl Validate for HealthThresholds {
    fn validate(&self) -> Result<(), String> {
        percentage(
            "unhealthy_error_rate_percent",
            self.unhealthy_error_rate_percent,
        )?;
        percentage("critical_memory_percent", self.critical_memory_percent)?;
        non_negative("degraded_response_time_ms", self.degraded_response_time_ms)?;
        percentage(
            "degraded_error_rate_percent",
            self.degraded_error_rate_percent,
        )?;

        if self.degraded_error_rate_percent > self.unhealthy_error_rate_percent {
            return Err(
                "degraded_error_rate_percent cannot exceed unhealthy_error_rate_percent"
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Validate for RetentionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_age_hours == 0 {
            return Err("Retention max_age_hours must be greater than 0".to_string());
        }

        if self.max_age_hours > MAX_RETENTION_HOURS {
            return Err(format!(
                "Retention max_age_hours must be at most {} (got {})",
                MAX_RETENTION_HOURS, self.max_age_hours
            ));
        }

        if self.max_alert_history == 0 {
            return Err("Retention max_alert_history must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for SchedulerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.evaluation_interval_secs == 0 {
            return Err(
                "Scheduler evaluation_interval_secs must be greater than 0 when enabled"
                    .to_string(),
            );
        }

        if self.enabled && self.cleanup_interval_secs == 0 {
            return Err(
                "Scheduler cleanup_interval_secs must be greater than 0 when enabled".to_string(),
            );
        }

        Ok(())
    }
}
