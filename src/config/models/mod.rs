//! Configuration data models
//!
//! This module defines all configuration structures used by the monitoring engine.

#![allow(missing_docs)]

pub mod monitoring;
pub mod thresholds;

// Re-export all configuration types
pub use monitoring::*;
pub use thresholds::*;

/// Default retention window in hours
pub fn default_retention_hours() -> u64 {
    24
}

/// Upper bound for `retention.max_age_hours` (ten years)
pub const MAX_RETENTION_HOURS: u64 = 10 * 366 * 24;

/// Default number of alert records kept in memory
pub fn default_max_alert_history() -> usize {
    1000
}

/// Default threshold evaluation interval in seconds
pub fn default_evaluation_interval_secs() -> u64 {
    60
}

/// Default retention sweep interval in seconds
pub fn default_cleanup_interval_secs() -> u64 {
    300
}
