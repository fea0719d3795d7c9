//! # request-monitor
//!
//! In-process runtime monitoring and alerting for web services.
//!
//! The engine ingests per-request and per-error telemetry, keeps it in
//! memory for a bounded retention window, derives performance statistics
//! (averages, error rate, throughput, nearest-rank p95/p99 latencies),
//! tracks the last reported state of external circuit breakers, classifies
//! overall health, and publishes threshold-crossing alerts to registered
//! listeners.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use request_monitor::{AlertKind, MonitoringConfig, MonitoringEngine, RequestObservation};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = MonitoringEngine::new(&MonitoringConfig::default())?;
//!
//!     engine.subscribe(AlertKind::SlowRequest, |event| {
//!         println!("slow request: {}", event.describe());
//!         Ok(())
//!     });
//!
//!     engine.record_request(RequestObservation::new("GET", "/api/manuscripts", 200, 6200.0, "req-1"));
//!
//!     let health = engine.health_summary();
//!     println!("{}: {:?}", health.status, health.issues);
//!     Ok(())
//! }
//! ```
//!
//! ## Periodic work
//!
//! `evaluate_thresholds` and `cleanup_old_metrics` never run on their own.
//! Either call them from your own scheduler or start a
//! [`MonitoringScheduler`] on a tokio runtime.

#![warn(clippy::all)]

pub mod config;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use config::{
    AlertThresholds, AlertThresholdsUpdate, Config, HealthThresholds, HealthThresholdsUpdate,
    MonitoringConfig, RetentionConfig, SchedulerConfig,
};
pub use utils::error::{MonitoringError, Result};

pub use monitoring::alerts::{
    AlertEvent, AlertKind, AlertStats, DeliveryReport, EventBus, NotificationChannel,
    SubscriptionId, TracingChannel,
};
pub use monitoring::health::{HealthMetrics, HealthStatus, HealthSummary};
pub use monitoring::metrics::{ResourceProbe, StaticProbe};
pub use monitoring::{
    Alert, AlertSeverity, CircuitBreakerStats, CircuitState, ErrorObservation, MemoryUsage,
    MonitoringEngine, MonitoringScheduler, PerformanceStats, PruneReport, RequestObservation,
    SystemSnapshot, TimeRange,
};
