//! Test fixtures and data factories
//!
//! Provides factory methods for creating observations with sensible defaults.

use chrono::{DateTime, Duration, Utc};
use request_monitor::{CircuitBreakerStats, CircuitState, ErrorObservation, RequestObservation};
use uuid::Uuid;

fn request_id() -> String {
    format!("req-{}", &Uuid::new_v4().to_string()[..8])
}

/// Factory for request observations
pub struct RequestFactory;

impl RequestFactory {
    /// Successful GET with the given latency
    pub fn ok(response_time_ms: f64) -> RequestObservation {
        Self::with_status(200, response_time_ms)
    }

    /// Request with an explicit status code
    pub fn with_status(status_code: u16, response_time_ms: f64) -> RequestObservation {
        RequestObservation::new(
            "GET",
            "/api/reviewers",
            status_code,
            response_time_ms,
            request_id(),
        )
    }

    /// Server error
    pub fn server_error(response_time_ms: f64) -> RequestObservation {
        Self::with_status(500, response_time_ms)
    }

    /// Successful request stamped `age` in the past
    pub fn aged(age: Duration) -> RequestObservation {
        Self::ok(100.0).with_timestamp(Utc::now() - age)
    }

    /// Successful request at an exact timestamp
    pub fn at(timestamp: DateTime<Utc>) -> RequestObservation {
        Self::ok(100.0).with_timestamp(timestamp)
    }
}

/// Factory for error observations
pub struct ErrorFactory;

impl ErrorFactory {
    /// Error without a status code
    pub fn plain(error_type: &str) -> ErrorObservation {
        ErrorObservation::new(error_type, format!("{} failure", error_type), request_id())
    }

    /// Error with a status code and URL
    pub fn with_status(error_type: &str, status_code: u16) -> ErrorObservation {
        Self::plain(error_type)
            .with_status_code(status_code)
            .with_url("/api/reviewers")
    }

    /// Error stamped `age` in the past
    pub fn aged(error_type: &str, age: Duration) -> ErrorObservation {
        Self::plain(error_type).with_timestamp(Utc::now() - age)
    }
}

/// Circuit breaker stats in the given state
pub fn breaker(state: CircuitState) -> CircuitBreakerStats {
    match state {
        CircuitState::Open => CircuitBreakerStats::new(state, 5, 20),
        CircuitState::HalfOpen => CircuitBreakerStats::new(state, 5, 21),
        CircuitState::Closed => CircuitBreakerStats::new(state, 0, 25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_factory() {
        let request = RequestFactory::server_error(42.0);
        assert!(request.is_error());
        assert!(request.request_id.starts_with("req-"));
        assert_eq!(request.response_time_ms, 42.0);
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestFactory::ok(1.0).request_id, RequestFactory::ok(1.0).request_id);
    }

    #[test]
    fn test_error_factory() {
        let error = ErrorFactory::with_status("db", 503);
        assert_eq!(error.status_code, Some(503));
        assert_eq!(error.url.as_deref(), Some("/api/reviewers"));
        assert_eq!(error.message, "db failure");
    }
}
