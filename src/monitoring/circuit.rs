//! Last-known circuit breaker state, keyed by breaker name

use super::types::{CircuitBreakerStats, CircuitState};
use std::collections::HashMap;
use tracing::debug;

/// Registry of the latest stats reported by each named circuit breaker.
///
/// Last write wins; no history is kept.
#[derive(Debug, Default, Clone)]
pub struct CircuitBreakerRegistry {
    breakers: HashMap<String, CircuitBreakerStats>,
}

impl CircuitBreakerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `stats` for `name`.
    ///
    /// Returns `true` only when this update moves the breaker into `Open`
    /// from any other state (or from being unknown). Repeated `Open`
    /// reports return `false`.
    pub fn update(&mut self, name: &str, stats: CircuitBreakerStats) -> bool {
        let opened = stats.state == CircuitState::Open;
        let previous = self.breakers.insert(name.to_string(), stats);
        let was_open = previous.is_some_and(|p| p.state == CircuitState::Open);

        debug!(
            "Circuit breaker {} updated (opened: {})",
            name,
            opened && !was_open
        );

        opened && !was_open
    }

    pub fn get(&self, name: &str) -> Option<&CircuitBreakerStats> {
        self.breakers.get(name)
    }

    /// Copy of the full name -> stats map
    pub fn snapshot(&self) -> HashMap<String, CircuitBreakerStats> {
        self.breakers.clone()
    }

    /// Number of breakers currently in `state`
    pub fn count_in_state(&self, state: CircuitState) -> usize {
        self.breakers.values().filter(|b| b.state == state).count()
    }

    pub fn len(&self) -> usize {
        self.breakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakers.is_empty()
    }

    pub fn clear(&mut self) {
        self.breakers.clear();
    }
}
