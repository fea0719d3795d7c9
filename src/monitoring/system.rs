//! Core MonitoringEngine implementation

use crate::config::{
    AlertThresholds, AlertThresholdsUpdate, HealthThresholds, HealthThresholdsUpdate,
    MonitoringConfig, RetentionConfig, Validate,
};
use crate::utils::error::{MonitoringError, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::alerts::{
    AlertEvaluator, AlertEvent, AlertKind, AlertStats, AlertStorage, EventBus, NotificationChannel,
    SubscriptionId,
};
use super::circuit::CircuitBreakerRegistry;
use super::health::{HealthClassifier, HealthSummary};
use super::metrics::{MetricStore, ResourceProbe, StatisticsEngine, default_probe};
use super::types::*;

/// Everything the engine mutates, behind one lock
#[derive(Debug)]
pub(super) struct EngineState {
    pub(super) store: MetricStore,
    pub(super) breakers: CircuitBreakerRegistry,
    pub(super) evaluator: AlertEvaluator,
    pub(super) classifier: HealthClassifier,
    pub(super) alerts: AlertStorage,
}

/// Process-wide monitoring engine.
///
/// Cloning is cheap and every clone shares the same state, so one engine can
/// be handed to request middleware, circuit breakers, admin endpoints and
/// the [`MonitoringScheduler`](super::MonitoringScheduler) alike.
///
/// Ingestion never fails. Events are published after the state lock is
/// released, so listeners may call back into the engine.
#[derive(Clone, Debug)]
pub struct MonitoringEngine {
    /// Retention settings
    pub(super) retention: Arc<RetentionConfig>,
    /// Stores, registry and thresholds consolidated into a single lock
    pub(super) state: Arc<RwLock<EngineState>>,
    /// Listener registry
    pub(super) bus: Arc<EventBus>,
    /// Memory / CPU source
    pub(super) probe: Arc<dyn ResourceProbe>,
    /// Engine start time
    pub(super) start_time: Instant,
}

impl MonitoringEngine {
    /// Create a new engine using the default resource probe
    pub fn new(config: &MonitoringConfig) -> Result<Self> {
        Self::with_probe(config, default_probe())
    }

    /// Create a new engine sampling memory and CPU from `probe`
    pub fn with_probe(config: &MonitoringConfig, probe: Arc<dyn ResourceProbe>) -> Result<Self> {
        info!("Initializing monitoring engine");

        config
            .validate()
            .map_err(|e| MonitoringError::Config(format!("Monitoring config error: {}", e)))?;

        let state = EngineState {
            store: MetricStore::new(),
            breakers: CircuitBreakerRegistry::new(),
            evaluator: AlertEvaluator::new(config.alerts.clone()),
            classifier: HealthClassifier::new(config.health.clone()),
            alerts: AlertStorage::default(),
        };

        Ok(Self {
            retention: Arc::new(config.retention.clone()),
            state: Arc::new(RwLock::new(state)),
            bus: Arc::new(EventBus::new()),
            probe,
            start_time: Instant::now(),
        })
    }

    // ==================== Ingestion ====================

    /// Record a completed request.
    ///
    /// A negative or non-finite `response_time_ms` is clamped to zero.
    /// Emits `slowRequest` when the request exceeds `slow_request_ms`.
    pub fn record_request(&self, mut observation: RequestObservation) {
        if !observation.response_time_ms.is_finite() || observation.response_time_ms < 0.0 {
            debug!(
                "Clamping invalid response time {} for request {}",
                observation.response_time_ms, observation.request_id
            );
            observation.response_time_ms = 0.0;
        }

        let events: Vec<AlertEvent> = {
            let mut state = self.state.write();
            let events: Vec<AlertEvent> = state
                .evaluator
                .check_request(&observation)
                .into_iter()
                .collect();
            state.store.record_request(observation);
            self.record_alerts(&mut state, &events);
            events
        };

        self.publish(&events);
    }

    /// Record a handled error.
    ///
    /// Emits `criticalError` when the status code is at or above
    /// `critical_status_code`.
    pub fn record_error(&self, observation: ErrorObservation) {
        let events: Vec<AlertEvent> = {
            let mut state = self.state.write();
            let events: Vec<AlertEvent> = state
                .evaluator
                .check_error(&observation)
                .into_iter()
                .collect();
            state.store.record_error(observation);
            self.record_alerts(&mut state, &events);
            events
        };

        self.publish(&events);
    }

    /// Store the latest stats of a circuit breaker.
    ///
    /// Emits `circuitBreakerOpen` only on a transition into `Open`.
    pub fn update_circuit_breaker_stats(&self, name: &str, stats: CircuitBreakerStats) {
        let events: Vec<AlertEvent> = {
            let mut state = self.state.write();
            let opened = state.breakers.update(name, stats.clone());
            let events: Vec<AlertEvent> = state
                .evaluator
                .check_circuit_breaker(name, &stats, opened)
                .into_iter()
                .collect();
            self.record_alerts(&mut state, &events);
            events
        };

        self.publish(&events);
    }

    // ==================== Queries ====================

    /// Request observations inside `range`, in insertion order
    pub fn request_metrics(&self, range: TimeRange) -> Vec<RequestObservation> {
        self.state
            .read()
            .store
            .requests_in_range(range)
            .cloned()
            .collect()
    }

    /// Error observations inside `range`, in insertion order
    pub fn error_metrics(&self, range: TimeRange) -> Vec<ErrorObservation> {
        self.state
            .read()
            .store
            .errors_in_range(range)
            .cloned()
            .collect()
    }

    /// Statistics over every retained request
    pub fn performance_stats(&self) -> PerformanceStats {
        StatisticsEngine::compute(self.state.read().store.requests(), None)
    }

    /// Statistics over the requests inside `range`
    pub fn performance_stats_in(&self, range: TimeRange) -> PerformanceStats {
        StatisticsEngine::compute(
            self.state.read().store.requests_in_range(range),
            range.duration(),
        )
    }

    /// Latest stats of every known circuit breaker
    pub fn circuit_breakers(&self) -> HashMap<String, CircuitBreakerStats> {
        self.state.read().breakers.snapshot()
    }

    /// Point-in-time system view
    pub fn system_metrics(&self) -> SystemSnapshot {
        debug!("Collecting system metrics");

        let memory = self.probe.memory_usage();
        let cpu_usage_percent = self.probe.cpu_usage();

        let state = self.state.read();
        let critical_status_code = state.evaluator.thresholds().critical_status_code;

        let mut requests = RequestAggregates {
            performance: StatisticsEngine::compute(state.store.requests(), None),
            ..Default::default()
        };
        for obs in state.store.requests() {
            requests.total_requests += 1;
            if obs.is_error() {
                requests.error_requests += 1;
            }
            *requests.status_codes.entry(obs.status_code).or_insert(0) += 1;
            *requests.endpoints.entry(obs.endpoint()).or_insert(0) += 1;
        }

        let mut errors = ErrorAggregates::default();
        for obs in state.store.errors() {
            errors.total_errors += 1;
            if obs
                .status_code
                .is_some_and(|code| code >= critical_status_code)
            {
                errors.critical_errors += 1;
            }
            *errors
                .error_types
                .entry(obs.error_type.clone())
                .or_insert(0) += 1;
        }

        SystemSnapshot {
            timestamp: Utc::now(),
            memory,
            cpu_usage_percent,
            uptime_seconds: self.uptime().as_secs(),
            requests,
            errors,
            circuit_breakers: state.breakers.snapshot(),
        }
    }

    /// Classify current health
    pub fn health_summary(&self) -> HealthSummary {
        let memory = self.probe.memory_usage();

        let state = self.state.read();
        let stats = StatisticsEngine::compute(state.store.requests(), None);
        let open_breakers = state.breakers.count_in_state(CircuitState::Open);

        state.classifier.classify(&stats, &memory, open_breakers)
    }

    /// Get engine uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    // ==================== Configuration ====================

    /// Merge a partial threshold update; invalid updates change nothing
    pub fn set_alert_thresholds(&self, update: AlertThresholdsUpdate) -> Result<AlertThresholds> {
        let thresholds = self.state.write().evaluator.apply_update(&update)?.clone();
        info!("Alert thresholds updated: {:?}", thresholds);
        Ok(thresholds)
    }

    pub fn alert_thresholds(&self) -> AlertThresholds {
        self.state.read().evaluator.thresholds().clone()
    }

    /// Merge a partial health-threshold update; invalid updates change nothing
    pub fn set_health_thresholds(
        &self,
        update: HealthThresholdsUpdate,
    ) -> Result<HealthThresholds> {
        let thresholds = self.state.write().classifier.apply_update(&update)?.clone();
        info!("Health thresholds updated: {:?}", thresholds);
        Ok(thresholds)
    }

    pub fn health_thresholds(&self) -> HealthThresholds {
        self.state.read().classifier.thresholds().clone()
    }

    // ==================== Periodic work ====================

    /// Compare statistics over the retention window against the thresholds
    /// and publish `highErrorRate` / `highResponseTime` as needed.
    ///
    /// Returns the published events.
    pub fn evaluate_thresholds(&self) -> Vec<AlertEvent> {
        debug!("Evaluating alert thresholds");

        let now = Utc::now();
        let window = self
            .retention
            .cutoff(now)
            .map_or_else(TimeRange::all, TimeRange::since);

        let events = {
            let mut state = self.state.write();
            let stats = StatisticsEngine::compute(state.store.requests_in_range(window), None);
            let events = state.evaluator.evaluate(&stats, now);
            self.record_alerts(&mut state, &events);
            events
        };

        self.publish(&events);
        events
    }

    /// Drop observations older than the retention window
    pub fn cleanup_old_metrics(&self) -> PruneReport {
        match self.retention.cutoff(Utc::now()) {
            Some(cutoff) => self.cleanup_older_than(cutoff),
            None => PruneReport::default(),
        }
    }

    /// Drop observations with a timestamp before `cutoff`
    pub fn cleanup_older_than(&self, cutoff: DateTime<Utc>) -> PruneReport {
        let report = self.state.write().store.prune_older_than(cutoff);
        if report.total() > 0 {
            info!(
                "Removed {} request(s) and {} error(s) older than {}",
                report.requests_removed, report.errors_removed, cutoff
            );
        }
        report
    }

    /// Clear observations, breaker state and alert history. Thresholds and
    /// listeners are kept.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.store.clear();
        state.breakers.clear();
        state.alerts.clear();
        debug!("Monitoring engine state reset");
    }

    // ==================== Listeners ====================

    pub fn subscribe<F>(&self, kind: AlertKind, handler: F) -> SubscriptionId
    where
        F: Fn(&AlertEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&AlertEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.bus.subscribe_all(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn clear_listeners(&self) {
        self.bus.clear();
    }

    pub fn listener_count(&self, kind: AlertKind) -> usize {
        self.bus.listener_count(kind)
    }

    /// Forward every event at or above the channel's severity floor
    pub fn attach_channel(&self, channel: Arc<dyn NotificationChannel>) -> SubscriptionId {
        info!("Attaching notification channel: {}", channel.name());
        self.bus.subscribe_all(move |event| {
            if channel.supports_severity(event.severity()) {
                channel.send(event)
            } else {
                Ok(())
            }
        })
    }

    // ==================== Alert history ====================

    /// Most recent alerts, newest first (default limit 100)
    pub fn alert_history(&self, limit: Option<usize>) -> Vec<Alert> {
        self.state.read().alerts.recent(limit.unwrap_or(100))
    }

    pub fn alert_stats(&self) -> AlertStats {
        self.state.read().alerts.stats.clone()
    }

    fn record_alerts(&self, state: &mut EngineState, events: &[AlertEvent]) {
        for event in events {
            state
                .alerts
                .record(event, self.retention.max_alert_history);
        }
    }

    fn publish(&self, events: &[AlertEvent]) {
        let failed: usize = events.iter().map(|e| self.bus.publish(e).failed).sum();
        if failed > 0 {
            self.state.write().alerts.stats.failed_deliveries += failed as u64;
        }
    }
}
