//! Health classification
//!
//! A single-shot verdict computed from current statistics, memory usage and
//! the number of open circuit breakers. No state is carried between calls.

mod classifier;
mod types;


pub use classifier::HealthClassifier;
pub use types::{HealthMetrics, HealthStatus, HealthSummary};
