//! Metrics storage and aggregation
//!
//! Observations are kept in insertion order by [`MetricStore`] and turned
//! into [`PerformanceStats`](crate::monitoring::PerformanceStats) on demand
//! by [`StatisticsEngine`]. Nothing is cached between calls.

mod helpers;
mod statistics;
mod store;
mod system;


pub use statistics::StatisticsEngine;
pub use store::MetricStore;
#[cfg(feature = "metrics")]
pub use system::SysinfoProbe;
pub use system::{ResourceProbe, StaticProbe, default_probe};
