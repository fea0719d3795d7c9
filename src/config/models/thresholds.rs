//! Alert and health threshold configuration
//!
//! Both threshold sets accept typed partial updates: fields left as `None`
//! keep whatever value is currently configured.

use serde::{Deserialize, Serialize};

fn default_error_rate_percent() -> f64 {
    5.0
}

fn default_response_time_ms() -> f64 {
    2000.0
}

fn default_slow_request_ms() -> f64 {
    5000.0
}

fn default_critical_status_code() -> u16 {
    500
}

/// Thresholds driving alert emission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertThresholds {
    /// Error rate (percent) above which `highErrorRate` fires
    #[serde(default = "default_error_rate_percent")]
    pub error_rate_percent: f64,
    /// Average response time above which `highResponseTime` fires
    #[serde(default = "default_response_time_ms")]
    pub response_time_ms: f64,
    /// Single request duration above which `slowRequest` fires
    #[serde(default = "default_slow_request_ms")]
    pub slow_request_ms: f64,
    /// Status code at or above which an error is critical.
    ///
    /// This is the only cutoff: raising it to 503 stops plain 500s from
    /// alerting, lowering it to 400 makes client errors critical. Errors
    /// without a status code are never critical.
    #[serde(default = "default_critical_status_code")]
    pub critical_status_code: u16,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            error_rate_percent: default_error_rate_percent(),
            response_time_ms: default_response_time_ms(),
            slow_request_ms: default_slow_request_ms(),
            critical_status_code: default_critical_status_code(),
        }
    }
}

impl AlertThresholds {
    /// Merge alert thresholds, non-default values from other win
    pub fn merge(mut self, other: Self) -> Self {
        if other.error_rate_percent != default_error_rate_percent() {
            self.error_rate_percent = other.error_rate_percent;
        }
        if other.response_time_ms != default_response_time_ms() {
            self.response_time_ms = other.response_time_ms;
        }
        if other.slow_request_ms != default_slow_request_ms() {
            self.slow_request_ms = other.slow_request_ms;
        }
        if other.critical_status_code != default_critical_status_code() {
            self.critical_status_code = other.critical_status_code;
        }
        self
    }

    /// Apply a partial update on top of the current values
    pub fn merged(&self, update: &AlertThresholdsUpdate) -> Self {
        Self {
            error_rate_percent: update.error_rate_percent.unwrap_or(self.error_rate_percent),
            response_time_ms: update.response_time_ms.unwrap_or(self.response_time_ms),
            slow_request_ms: update.slow_request_ms.unwrap_or(self.slow_request_ms),
            critical_status_code: update
                .critical_status_code
                .unwrap_or(self.critical_status_code),
        }
    }
}

/// Partial update for [`AlertThresholds`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlertThresholdsUpdate {
    #[serde(default)]
    pub error_rate_percent: Option<f64>,
    #[serde(default)]
    pub response_time_ms: Option<f64>,
    #[serde(default)]
    pub slow_request_ms: Option<f64>,
    #[serde(default)]
    pub critical_status_code: Option<u16>,
}

impl AlertThresholdsUpdate {
    pub fn error_rate_percent(mut self, value: f64) -> Self {
        self.error_rate_percent = Some(value);
        self
    }

    pub fn response_time_ms(mut self, value: f64) -> Self {
        self.response_time_ms = Some(value);
        self
    }

    pub fn slow_request_ms(mut self, value: f64) -> Self {
        self.slow_request_ms = Some(value);
        self
    }

    pub fn critical_status_code(mut self, value: u16) -> Self {
        self.critical_status_code = Some(value);
        self
    }
}

fn default_unhealthy_error_rate_percent() -> f64 {
    50.0
}

fn default_critical_memory_percent() -> f64 {
    90.0
}

fn default_degraded_response_time_ms() -> f64 {
    2000.0
}

fn default_degraded_error_rate_percent() -> f64 {
    10.0
}

/// Cutoffs used by the health classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthThresholds {
    #[serde(default = "default_unhealthy_error_rate_percent")]
    pub unhealthy_error_rate_percent: f64,
    #[serde(default = "default_critical_memory_percent")]
    pub critical_memory_percent: f64,
    #[serde(default = "default_degraded_response_time_ms")]
    pub degraded_response_time_ms: f64,
    #[serde(default = "default_degraded_error_rate_percent")]
    pub degraded_error_rate_percent: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            unhealthy_error_rate_percent: default_unhealthy_error_rate_percent(),
            critical_memory_percent: default_critical_memory_percent(),
            degraded_response_time_ms: default_degraded_response_time_ms(),
            degraded_error_rate_percent: default_degraded_error_rate_percent(),
        }
    }
}

impl HealthThresholds {
    /// Merge health thresholds, non-default values from other win
    pub fn merge(mut self, other: Self) -> Self {
        if other.unhealthy_error_rate_percent != default_unhealthy_error_rate_percent() {
            self.unhealthy_error_rate_percent = other.unhealthy_error_rate_percent;
        }
        if other.critical_memory_percent != default_critical_memory_percent() {
            self.critical_memory_percent = other.critical_memory_percent;
        }
        if other.degraded_response_time_ms != default_degraded_response_time_ms() {
            self.degraded_response_time_ms = other.degraded_response_time_ms;
        }
        if other.degraded_error_rate_percent != default_degraded_error_rate_percent() {
            self.degraded_error_rate_percent = other.degraded_error_rate_percent;
        }
        self
    }

    /// Apply a partial update on top of the current values
    pub fn merged(&self, update: &HealthThresholdsUpdate) -> Self {
        Self {
            unhealthy_error_rate_percent: update
                .unhealthy_error_rate_percent
                .unwrap_or(self.unhealthy_error_rate_percent),
            critical_memory_percent: update
                .critical_memory_percent
                .unwrap_or(self.critical_memory_percent),
            degraded_response_time_ms: update
                .degraded_response_time_ms
                .unwrap_or(self.degraded_response_time_ms),
            degraded_error_rate_percent: update
                .degraded_error_rate_percent
                .unwrap_or(self.degraded_error_rate_percent),
        }
    }
}

/// Partial update for [`HealthThresholds`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthThresholdsUpdate {
    #[serde(default)]
    pub unhealthy_error_rate_percent: Option<f64>,
    #[serde(default)]
    pub critical_memory_percent: Option<f64>,
    #[serde(default)]
    pub degraded_response_time_ms: Option<f64>,
    #[serde(default)]
    pub degraded_error_rate_percent: Option<f64>,
}

impl HealthThresholdsUpdate {
    pub fn unhealthy_error_rate_percent(mut self, value: f64) -> Self {
        self.unhealthy_error_rate_percent = Some(value);
        self
    }

    pub fn critical_memory_percent(mut self, value: f64) -> Self {
        self.critical_memory_percent = Some(value);
        self
    }

    pub fn degraded_response_time_ms(mut self, value: f64) -> Self {
        self.degraded_response_time_ms = Some(value);
        self
    }

    pub fn degraded_error_rate_percent(mut self, value: f64) -> Self {
        self.degraded_error_rate_percent = Some(value);
        self
    }
}
