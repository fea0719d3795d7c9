//! Threshold evaluation

use super::types::AlertEvent;
use crate::config::{AlertThresholds, AlertThresholdsUpdate, Validate};
use crate::monitoring::types::{
    CircuitBreakerStats, ErrorObservation, PerformanceStats, RequestObservation,
};
use crate::utils::error::{MonitoringError, Result};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Decides which alert events an observation or a statistics snapshot
/// produces. It never publishes anything itself.
#[derive(Debug, Clone, Default)]
pub struct AlertEvaluator {
    thresholds: AlertThresholds,
}

impl AlertEvaluator {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Merge `update` over the current thresholds.
    ///
    /// The merged result is validated as a whole; on failure the previous
    /// thresholds stay in place.
    pub fn apply_update(&mut self, update: &AlertThresholdsUpdate) -> Result<&AlertThresholds> {
        let merged = self.thresholds.merged(update);
        merged.validate().map_err(MonitoringError::Validation)?;
        self.thresholds = merged;
        Ok(&self.thresholds)
    }

    pub fn check_request(&self, observation: &RequestObservation) -> Option<AlertEvent> {
        (observation.response_time_ms > self.thresholds.slow_request_ms)
            .then(|| AlertEvent::SlowRequest(observation.clone()))
    }

    pub fn check_error(&self, observation: &ErrorObservation) -> Option<AlertEvent> {
        observation
            .status_code
            .filter(|code| *code >= self.thresholds.critical_status_code)
            .map(|_| AlertEvent::CriticalError(observation.clone()))
    }

    /// `opened` is the transition flag reported by the registry
    pub fn check_circuit_breaker(
        &self,
        name: &str,
        stats: &CircuitBreakerStats,
        opened: bool,
    ) -> Option<AlertEvent> {
        opened.then(|| AlertEvent::CircuitBreakerOpen {
            name: name.to_string(),
            stats: stats.clone(),
            timestamp: Utc::now(),
        })
    }

    /// Compare aggregated statistics against the rate/latency thresholds
    pub fn evaluate(&self, stats: &PerformanceStats, now: DateTime<Utc>) -> Vec<AlertEvent> {
        let mut events = Vec::new();

        if stats.error_rate_percent > self.thresholds.error_rate_percent {
            warn!(
                "Error rate {:.2}% above threshold {:.2}%",
                stats.error_rate_percent, self.thresholds.error_rate_percent
            );
            events.push(AlertEvent::HighErrorRate {
                rate: stats.error_rate_percent,
                threshold: self.thresholds.error_rate_percent,
                timestamp: now,
            });
        }

        if stats.average_response_time_ms > self.thresholds.response_time_ms {
            warn!(
                "Average response time {:.0}ms above threshold {:.0}ms",
                stats.average_response_time_ms, self.thresholds.response_time_ms
            );
            events.push(AlertEvent::HighResponseTime {
                time: stats.average_response_time_ms,
                threshold: self.thresholds.response_time_ms,
                timestamp: now,
            });
        }

        events
    }
}
