//! Notification channel implementations
//!
//! Channels are listeners with a name and a severity floor. Only a tracing
//! channel ships with the crate; transports such as email or chat are
//! expected to implement [`NotificationChannel`] downstream.

use super::types::AlertEvent;
use crate::monitoring::types::AlertSeverity;
use crate::utils::error::Result;
use tracing::{error, info, warn};

/// Notification channel trait
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Deliver an event
    fn send(&self, event: &AlertEvent) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;

    /// Lowest severity this channel forwards
    fn min_severity(&self) -> AlertSeverity;

    /// Check if channel supports severity level
    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity >= self.min_severity()
    }
}

/// Writes alerts to the log
#[derive(Debug, Clone)]
pub struct TracingChannel {
    name: String,
    min_severity: AlertSeverity,
}

impl TracingChannel {
    pub fn new(min_severity: AlertSeverity) -> Self {
        Self {
            name: "tracing".to_string(),
            min_severity,
        }
    }
}

impl Default for TracingChannel {
    fn default() -> Self {
        Self::new(AlertSeverity::Info)
    }
}

impl NotificationChannel for TracingChannel {
    fn send(&self, event: &AlertEvent) -> Result<()> {
        let kind = event.kind();
        match event.severity() {
            AlertSeverity::Critical => error!(alert = %kind, "{}", event.describe()),
            AlertSeverity::Warning => warn!(alert = %kind, "{}", event.describe()),
            AlertSeverity::Info => info!(alert = %kind, "{}", event.describe()),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_severity(&self) -> AlertSeverity {
        self.min_severity
    }
}
