//! Derived request statistics

use super::helpers::{calculate_average, nearest_rank_percentile};
use crate::monitoring::types::{PerformanceStats, RequestObservation};
use chrono::{DateTime, Utc};

/// Stateless aggregation over request observations.
///
/// Every call recomputes from scratch; retention keeps the input bounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Compute statistics over `requests`.
    ///
    /// `window` is the length of the observed period used for
    /// `requests_per_minute`. When absent it is derived from the oldest and
    /// newest timestamps in view. Either way it is never shorter than one
    /// minute.
    pub fn compute<'a, I>(requests: I, window: Option<chrono::Duration>) -> PerformanceStats
    where
        I: IntoIterator<Item = &'a RequestObservation>,
    {
        let mut response_times = Vec::new();
        let mut error_count = 0usize;
        let mut oldest: Option<DateTime<Utc>> = None;
        let mut newest: Option<DateTime<Utc>> = None;

        for obs in requests {
            response_times.push(obs.response_time_ms);
            if obs.is_error() {
                error_count += 1;
            }
            oldest = Some(oldest.map_or(obs.timestamp, |t| t.min(obs.timestamp)));
            newest = Some(newest.map_or(obs.timestamp, |t| t.max(obs.timestamp)));
        }

        let total = response_times.len();
        if total == 0 {
            return PerformanceStats::default();
        }

        let average_response_time_ms = calculate_average(&response_times);
        let error_rate_percent = error_count as f64 / total as f64 * 100.0;

        let window = window.unwrap_or_else(|| match (oldest, newest) {
            (Some(oldest), Some(newest)) => newest - oldest,
            _ => chrono::Duration::zero(),
        });
        let requests_per_minute = total as f64 / window_minutes(window);

        response_times.sort_by(|a, b| a.total_cmp(b));

        PerformanceStats {
            average_response_time_ms,
            error_rate_percent,
            requests_per_minute,
            p95_response_time_ms: nearest_rank_percentile(&response_times, 95.0),
            p99_response_time_ms: nearest_rank_percentile(&response_times, 99.0),
        }
    }
}

fn window_minutes(window: chrono::Duration) -> f64 {
    let minutes = window.num_milliseconds() as f64 / 60_000.0;
    minutes.max(1.0)
}
