//! Helper functions for creating specific error types

use super::types::MonitoringError;

/// Helper functions for creating specific errors
impl MonitoringError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn listener<S: Into<String>>(message: S) -> Self {
        Self::Listener(message.into())
    }

    pub fn scheduler<S: Into<String>>(message: S) -> Self {
        Self::Scheduler(message.into())
    }
}
