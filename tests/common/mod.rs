//! Common test utilities for request-monitor
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{RequestFactory, test_engine};
//!
//! #[test]
//! fn my_test() {
//!     let engine = test_engine();
//!     engine.record_request(RequestFactory::ok(120.0));
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{ErrorFactory, RequestFactory};

use parking_lot::Mutex;
use request_monitor::{
    AlertEvent, AlertKind, MemoryUsage, MonitoringConfig, MonitoringEngine, StaticProbe,
};
use std::sync::Arc;

/// Engine with default config and a fixed probe (10% memory, 5% CPU)
pub fn test_engine() -> MonitoringEngine {
    engine_with_config(&MonitoringConfig::default())
}

pub fn engine_with_config(config: &MonitoringConfig) -> MonitoringEngine {
    engine_with_memory(config, 100, 1000)
}

/// Engine whose probe reports `used` of `total` bytes in use
pub fn engine_with_memory(config: &MonitoringConfig, used: u64, total: u64) -> MonitoringEngine {
    let probe = StaticProbe::new(MemoryUsage::new(used, total), 5.0);
    MonitoringEngine::with_probe(config, Arc::new(probe)).expect("test config must be valid")
}

/// Collected events for one alert kind
pub type EventLog = Arc<Mutex<Vec<AlertEvent>>>;

/// Subscribe a collecting listener to `kind`
pub fn record_events(engine: &MonitoringEngine, kind: AlertKind) -> EventLog {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    engine.subscribe(kind, move |event| {
        sink.lock().push(event.clone());
        Ok(())
    });
    log
}
