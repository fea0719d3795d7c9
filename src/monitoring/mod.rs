//! Runtime monitoring and alerting
//!
//! Request and error telemetry flows one way: ingestion feeds the metric
//! store and the circuit breaker registry, statistics and health are derived
//! on demand, and threshold crossings are published to listeners.

pub mod alerts;
pub mod health;
pub mod metrics;

mod background;
pub(crate) mod bounded;
mod circuit;
mod system;
mod types;

pub use background::MonitoringScheduler;
pub use circuit::CircuitBreakerRegistry;
pub use system::MonitoringEngine;
pub use types::{
    Alert, AlertSeverity, CircuitBreakerStats, CircuitState, ErrorAggregates, ErrorObservation,
    MemoryUsage, PerformanceStats, PruneReport, RequestAggregates, RequestObservation,
    SystemSnapshot, TimeRange,
};
