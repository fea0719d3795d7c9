//! Health classifier implementation

use super::types::{HealthMetrics, HealthStatus, HealthSummary};
use crate::config::{HealthThresholds, HealthThresholdsUpdate, Validate};
use crate::monitoring::types::{MemoryUsage, PerformanceStats};
use crate::utils::error::{MonitoringError, Result};
use tracing::debug;

/// Classifies system health against configurable cutoffs.
///
/// Unhealthy when the error rate or memory usage crosses its critical
/// cutoff. Otherwise degraded when the average response time, the number of
/// open breakers, or the error rate crosses its moderate cutoff. Every
/// matching reason is listed in `issues`, not only the first one.
#[derive(Debug, Clone, Default)]
pub struct HealthClassifier {
    thresholds: HealthThresholds,
}

impl HealthClassifier {
    pub fn new(thresholds: HealthThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &HealthThresholds {
        &self.thresholds
    }

    /// Merge `update` over the current cutoffs; invalid results are rejected
    /// and leave the classifier untouched.
    pub fn apply_update(&mut self, update: &HealthThresholdsUpdate) -> Result<&HealthThresholds> {
        let merged = self.thresholds.merged(update);
        merged.validate().map_err(MonitoringError::Validation)?;
        self.thresholds = merged;
        Ok(&self.thresholds)
    }

    pub fn classify(
        &self,
        stats: &PerformanceStats,
        memory: &MemoryUsage,
        open_breakers: usize,
    ) -> HealthSummary {
        let t = &self.thresholds;
        let mut status = HealthStatus::Healthy;
        let mut issues = Vec::new();

        let critical_error_rate = stats.error_rate_percent > t.unhealthy_error_rate_percent;
        if critical_error_rate {
            status = HealthStatus::Unhealthy;
            issues.push(format!(
                "High error rate: {:.2}% (limit {:.2}%)",
                stats.error_rate_percent, t.unhealthy_error_rate_percent
            ));
        }

        if memory.usage_percent > t.critical_memory_percent {
            status = HealthStatus::Unhealthy;
            issues.push(format!(
                "Critical memory usage: {:.1}% (limit {:.1}%)",
                memory.usage_percent, t.critical_memory_percent
            ));
        }

        let mut degrade = |issue: String| {
            status = status.max(HealthStatus::Degraded);
            issues.push(issue);
        };

        if stats.average_response_time_ms > t.degraded_response_time_ms {
            degrade(format!(
                "High average response time: {:.0}ms (limit {:.0}ms)",
                stats.average_response_time_ms, t.degraded_response_time_ms
            ));
        }

        if open_breakers > 0 {
            degrade(format!("{} circuit breaker(s) open", open_breakers));
        }

        if !critical_error_rate && stats.error_rate_percent > t.degraded_error_rate_percent {
            degrade(format!(
                "Elevated error rate: {:.2}% (limit {:.2}%)",
                stats.error_rate_percent, t.degraded_error_rate_percent
            ));
        }

        debug!("Health classified as {} with {} issue(s)", status, issues.len());

        HealthSummary {
            status,
            issues,
            metrics: HealthMetrics {
                error_rate_percent: stats.error_rate_percent,
                average_response_time_ms: stats.average_response_time_ms,
                memory_usage_percent: memory.usage_percent,
                active_circuit_breakers: open_breakers,
            },
        }
    }
}
