//! Append-only observation storage

use crate::monitoring::types::{
    ErrorObservation, PruneReport, RequestObservation, TimeRange,
};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::debug;

/// Two independent insertion-ordered sequences of observations.
///
/// The store never re-sorts: queries return observations in the order they
/// were recorded, whatever their timestamps.
#[derive(Debug, Default, Clone)]
pub struct MetricStore {
    requests: VecDeque<RequestObservation>,
    errors: VecDeque<ErrorObservation>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request observation
    #[inline]
    pub fn record_request(&mut self, observation: RequestObservation) {
        self.requests.push_back(observation);
    }

    /// Append an error observation
    #[inline]
    pub fn record_error(&mut self, observation: ErrorObservation) {
        self.errors.push_back(observation);
    }

    /// Requests whose timestamp falls inside `range`, in insertion order
    pub fn requests_in_range(
        &self,
        range: TimeRange,
    ) -> impl Iterator<Item = &RequestObservation> + '_ {
        self.requests
            .iter()
            .filter(move |obs| range.contains(obs.timestamp))
    }

    /// Errors whose timestamp falls inside `range`, in insertion order
    pub fn errors_in_range(&self, range: TimeRange) -> impl Iterator<Item = &ErrorObservation> + '_ {
        self.errors
            .iter()
            .filter(move |obs| range.contains(obs.timestamp))
    }

    /// All retained requests
    pub fn requests(&self) -> impl Iterator<Item = &RequestObservation> + '_ {
        self.requests.iter()
    }

    /// All retained errors
    pub fn errors(&self) -> impl Iterator<Item = &ErrorObservation> + '_ {
        self.errors.iter()
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.errors.is_empty()
    }

    /// Remove every observation strictly older than `cutoff`
    pub fn prune_older_than(&mut self, cutoff: DateTime<Utc>) -> PruneReport {
        let requests_before = self.requests.len();
        let errors_before = self.errors.len();

        self.requests.retain(|obs| obs.timestamp >= cutoff);
        self.errors.retain(|obs| obs.timestamp >= cutoff);

        let report = PruneReport {
            requests_removed: requests_before - self.requests.len(),
            errors_removed: errors_before - self.errors.len(),
        };

        debug!(
            "Pruned {} requests and {} errors older than {}",
            report.requests_removed, report.errors_removed, cutoff
        );

        report
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.requests.clear();
        self.errors.clear();
    }
}
