//! Alert event vocabulary and alert history storage

use crate::monitoring::bounded::BoundedPush;
use crate::monitoring::types::{
    Alert, AlertSeverity, CircuitBreakerStats, ErrorObservation, RequestObservation,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// Names of the events the engine emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    SlowRequest,
    CriticalError,
    CircuitBreakerOpen,
    HighErrorRate,
    HighResponseTime,
}

impl AlertKind {
    pub const ALL: [AlertKind; 5] = [
        AlertKind::SlowRequest,
        AlertKind::CriticalError,
        AlertKind::CircuitBreakerOpen,
        AlertKind::HighErrorRate,
        AlertKind::HighResponseTime,
    ];

    /// Event name as seen by listeners
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::SlowRequest => "slowRequest",
            AlertKind::CriticalError => "criticalError",
            AlertKind::CircuitBreakerOpen => "circuitBreakerOpen",
            AlertKind::HighErrorRate => "highErrorRate",
            AlertKind::HighResponseTime => "highResponseTime",
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        match self {
            AlertKind::SlowRequest | AlertKind::HighResponseTime => AlertSeverity::Warning,
            AlertKind::CriticalError
            | AlertKind::CircuitBreakerOpen
            | AlertKind::HighErrorRate => AlertSeverity::Critical,
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown alert event: {}", s))
    }
}

/// Payload delivered to listeners
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AlertEvent {
    /// A request took longer than `slow_request_ms`
    SlowRequest(RequestObservation),
    /// An error carried a critical status code
    CriticalError(ErrorObservation),
    /// A circuit breaker transitioned into `Open`
    CircuitBreakerOpen {
        name: String,
        stats: CircuitBreakerStats,
        timestamp: DateTime<Utc>,
    },
    /// The error rate exceeded its threshold during evaluation
    HighErrorRate {
        rate: f64,
        threshold: f64,
        timestamp: DateTime<Utc>,
    },
    /// The average response time exceeded its threshold during evaluation
    HighResponseTime {
        time: f64,
        threshold: f64,
        timestamp: DateTime<Utc>,
    },
}

impl AlertEvent {
    pub fn kind(&self) -> AlertKind {
        match self {
            AlertEvent::SlowRequest(_) => AlertKind::SlowRequest,
            AlertEvent::CriticalError(_) => AlertKind::CriticalError,
            AlertEvent::CircuitBreakerOpen { .. } => AlertKind::CircuitBreakerOpen,
            AlertEvent::HighErrorRate { .. } => AlertKind::HighErrorRate,
            AlertEvent::HighResponseTime { .. } => AlertKind::HighResponseTime,
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        self.kind().severity()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            AlertEvent::SlowRequest(obs) => obs.timestamp,
            AlertEvent::CriticalError(obs) => obs.timestamp,
            AlertEvent::CircuitBreakerOpen { timestamp, .. }
            | AlertEvent::HighErrorRate { timestamp, .. }
            | AlertEvent::HighResponseTime { timestamp, .. } => *timestamp,
        }
    }

    /// One-line human readable description
    pub fn describe(&self) -> String {
        match self {
            AlertEvent::SlowRequest(obs) => format!(
                "{} {} took {:.0}ms (request {})",
                obs.method, obs.url, obs.response_time_ms, obs.request_id
            ),
            AlertEvent::CriticalError(obs) => format!(
                "{} error with status {}: {} (request {})",
                obs.error_type,
                obs.status_code.map_or_else(|| "-".to_string(), |c| c.to_string()),
                obs.message,
                obs.request_id
            ),
            AlertEvent::CircuitBreakerOpen { name, stats, .. } => format!(
                "Circuit breaker '{}' opened after {} failure(s)",
                name, stats.failure_count
            ),
            AlertEvent::HighErrorRate {
                rate, threshold, ..
            } => format!("Error rate {:.2}% exceeds {:.2}%", rate, threshold),
            AlertEvent::HighResponseTime {
                time, threshold, ..
            } => format!(
                "Average response time {:.0}ms exceeds {:.0}ms",
                time, threshold
            ),
        }
    }

    /// Build the history record for this event
    pub fn to_alert(&self) -> Alert {
        let kind = self.kind();
        Alert {
            id: uuid::Uuid::new_v4().to_string(),
            severity: kind.severity(),
            title: title_for(kind).to_string(),
            description: self.describe(),
            timestamp: self.timestamp(),
            source: kind.as_str().to_string(),
            metadata: serde_json::to_value(self).unwrap_or_default(),
        }
    }
}

fn title_for(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::SlowRequest => "Slow request",
        AlertKind::CriticalError => "Critical error",
        AlertKind::CircuitBreakerOpen => "Circuit breaker open",
        AlertKind::HighErrorRate => "High error rate",
        AlertKind::HighResponseTime => "High response time",
    }
}

/// Alert statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct AlertStats {
    /// Total alerts emitted
    pub total_alerts: u64,
    /// Alerts by event name
    pub alerts_by_kind: HashMap<String, u64>,
    /// Alerts by severity
    pub alerts_by_severity: HashMap<String, u64>,
    /// Listener deliveries that returned an error or panicked
    pub failed_deliveries: u64,
    /// Last alert timestamp
    pub last_alert: Option<DateTime<Utc>>,
}

/// Alert history and statistics, kept under the engine lock
#[derive(Debug, Default)]
pub(crate) struct AlertStorage {
    pub history: VecDeque<Alert>,
    pub stats: AlertStats,
}

impl AlertStorage {
    pub fn record(&mut self, event: &AlertEvent, max_history: usize) {
        let alert = event.to_alert();

        self.stats.total_alerts += 1;
        *self
            .stats
            .alerts_by_kind
            .entry(alert.source.clone())
            .or_insert(0) += 1;
        *self
            .stats
            .alerts_by_severity
            .entry(alert.severity.to_string())
            .or_insert(0) += 1;
        self.stats.last_alert = Some(alert.timestamp);

        self.history.push_bounded(alert, max_history);
    }

    /// Newest-first slice of the history
    pub fn recent(&self, limit: usize) -> Vec<Alert> {
        self.history.iter().rev().take(limit).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.stats = AlertStats::default();
    }
}
