//! Health classification types

use serde::{Deserialize, Serialize};

/// Tri-state health verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Degraded => write!(f, "degraded"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Raw numbers behind a verdict, reported regardless of status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub error_rate_percent: f64,
    pub average_response_time_ms: f64,
    pub memory_usage_percent: f64,
    /// Circuit breakers currently open
    pub active_circuit_breakers: usize,
}

/// Health verdict with the reasons that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub status: HealthStatus,
    /// Every matching reason, most severe first
    pub issues: Vec<String>,
    pub metrics: HealthMetrics,
}

impl HealthSummary {
    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
