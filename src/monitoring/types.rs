//! Type definitions for observations, derived metrics and alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single completed HTTP request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestObservation {
    /// When the request completed
    pub timestamp: DateTime<Utc>,
    /// HTTP method
    pub method: String,
    /// Request URL or route
    pub url: String,
    /// Response status code
    pub status_code: u16,
    /// Response time in milliseconds
    pub response_time_ms: f64,
    /// Correlation id, expected to be unique but not enforced
    pub request_id: String,
    /// Authenticated user, if any
    pub user_id: Option<String>,
}

impl RequestObservation {
    /// Create an observation stamped with the current wall-clock time
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        status_code: u16,
        response_time_ms: f64,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            method: method.into(),
            url: url.into(),
            status_code,
            response_time_ms,
            request_id: request_id.into(),
            user_id: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Whether this request counts towards the error rate
    #[inline]
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    /// `"METHOD url"` key used for endpoint breakdowns
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// A single handled error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObservation {
    /// When the error was handled
    pub timestamp: DateTime<Utc>,
    /// Free-form category tag
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
    /// Correlation id of the failing request
    pub request_id: String,
    /// Request URL, if known
    pub url: Option<String>,
    /// Response status code, if one was produced
    pub status_code: Option<u16>,
}

impl ErrorObservation {
    /// Create an observation stamped with the current wall-clock time
    pub fn new(
        error_type: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            error_type: error_type.into(),
            message: message.into(),
            request_id: request_id.into(),
            url: None,
            status_code: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

/// Inclusive time range; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Unbounded range
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Whether `timestamp` falls inside `[start, end]`
    #[inline]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| timestamp >= start)
            && self.end.is_none_or(|end| timestamp <= end)
    }

    /// Length of the range when both bounds are known
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}

/// Circuit breaker state as reported by an external breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CircuitState {
    /// Requests flow normally
    Closed,
    /// Requests are rejected
    Open,
    /// Trial requests are allowed through
    HalfOpen,
}

impl std::fmt::Display for CircuitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitState::Closed => write!(f, "CLOSED"),
            CircuitState::Open => write!(f, "OPEN"),
            CircuitState::HalfOpen => write!(f, "HALF_OPEN"),
        }
    }
}

/// Latest reported stats of one circuit breaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitBreakerStats {
    pub state: CircuitState,
    pub failure_count: u64,
    pub success_count: u64,
}

impl CircuitBreakerStats {
    pub fn new(state: CircuitState, failure_count: u64, success_count: u64) -> Self {
        Self {
            state,
            failure_count,
            success_count,
        }
    }
}

/// Aggregated request performance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub average_response_time_ms: f64,
    pub error_rate_percent: f64,
    pub requests_per_minute: f64,
    pub p95_response_time_ms: f64,
    pub p99_response_time_ms: f64,
}

/// Memory usage snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Bytes in use
    pub used_bytes: u64,
    /// Bytes available in total
    pub total_bytes: u64,
    /// `used / total` as a percentage
    pub usage_percent: f64,
}

impl MemoryUsage {
    pub fn new(used_bytes: u64, total_bytes: u64) -> Self {
        let usage_percent = if total_bytes > 0 {
            used_bytes as f64 / total_bytes as f64 * 100.0
        } else {
            0.0
        };

        Self {
            used_bytes,
            total_bytes,
            usage_percent,
        }
    }
}

/// Request aggregates for a system snapshot
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestAggregates {
    /// Requests currently retained
    pub total_requests: u64,
    /// Retained requests with status >= 400
    pub error_requests: u64,
    /// Requests by status code
    pub status_codes: HashMap<u16, u64>,
    /// Requests by `"METHOD url"`
    pub endpoints: HashMap<String, u64>,
    /// Derived performance statistics
    pub performance: PerformanceStats,
}

/// Error aggregates for a system snapshot
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorAggregates {
    /// Errors currently retained
    pub total_errors: u64,
    /// Errors at or above the critical status code
    pub critical_errors: u64,
    /// Errors by category tag
    pub error_types: HashMap<String, u64>,
}

/// Point-in-time system view
#[derive(Debug, Clone, Serialize)]
pub struct SystemSnapshot {
    /// Timestamp of the snapshot
    pub timestamp: DateTime<Utc>,
    /// Memory usage
    pub memory: MemoryUsage,
    /// CPU usage percentage
    pub cpu_usage_percent: f64,
    /// Engine uptime in seconds
    pub uptime_seconds: u64,
    /// Request aggregates
    pub requests: RequestAggregates,
    /// Error aggregates
    pub errors: ErrorAggregates,
    /// Circuit breakers by name
    pub circuit_breakers: HashMap<String, CircuitBreakerStats>,
}

/// Result of a retention sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub requests_removed: usize,
    pub errors_removed: usize,
}

impl PruneReport {
    pub fn total(&self) -> usize {
        self.requests_removed + self.errors_removed
    }
}

/// Alert severity levels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "INFO"),
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Alert record kept in the engine's alert history
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Alert title
    pub title: String,
    /// Alert description
    pub description: String,
    /// Alert timestamp
    pub timestamp: DateTime<Utc>,
    /// Event name that produced the alert
    pub source: String,
    /// Full event payload
    pub metadata: serde_json::Value,
}
