//! Alerting
//!
//! Threshold evaluation, the alert event vocabulary, the publish/subscribe
//! bus listeners attach to, and notification channels built on top of it.

mod bus;
mod channels;
mod evaluator;
mod types;


pub use bus::{AlertHandler, DeliveryReport, EventBus, SubscriptionId};
pub use channels::{NotificationChannel, TracingChannel};
pub use evaluator::AlertEvaluator;
pub use types::{AlertEvent, AlertKind, AlertStats};

pub(crate) use types::AlertStorage;
