//! Publish/subscribe delivery of alert events
//!
//! Handlers run synchronously, in registration order, on the publishing
//! thread. A handler that returns an error or panics is logged and skipped;
//! the remaining handlers still receive the event.

use super::types::{AlertEvent, AlertKind};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, warn};

/// Listener callback
pub type AlertHandler = Arc<dyn Fn(&AlertEvent) -> Result<()> + Send + Sync>;

/// Token returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    /// `None` receives every event
    kind: Option<AlertKind>,
    handler: AlertHandler,
}

impl Subscription {
    fn wants(&self, kind: AlertKind) -> bool {
        self.kind.is_none_or(|k| k == kind)
    }
}

/// Outcome of a single publish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Event bus shared by the engine and its listeners
#[derive(Default)]
pub struct EventBus {
    next_id: AtomicU64,
    subscriptions: RwLock<Vec<Subscription>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.read().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for one event kind
    pub fn subscribe<F>(&self, kind: AlertKind, handler: F) -> SubscriptionId
    where
        F: Fn(&AlertEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.insert(Some(kind), Arc::new(handler))
    }

    /// Register `handler` for every event kind
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&AlertEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.insert(None, Arc::new(handler))
    }

    fn insert(&self, kind: Option<AlertKind>, handler: AlertHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions
            .write()
            .push(Subscription { id, kind, handler });
        debug!("Registered alert listener {:?} for {:?}", id, kind);
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        subscriptions.len() != before
    }

    /// Detach every listener
    pub fn clear(&self) {
        self.subscriptions.write().clear();
    }

    /// Listeners that would receive an event of `kind`
    pub fn listener_count(&self, kind: AlertKind) -> usize {
        self.subscriptions
            .read()
            .iter()
            .filter(|s| s.wants(kind))
            .count()
    }

    /// Deliver `event` to every interested listener.
    ///
    /// The handler list is copied before delivery so handlers may subscribe
    /// or unsubscribe without deadlocking.
    pub fn publish(&self, event: &AlertEvent) -> DeliveryReport {
        let kind = event.kind();
        let handlers: Vec<(SubscriptionId, AlertHandler)> = self
            .subscriptions
            .read()
            .iter()
            .filter(|s| s.wants(kind))
            .map(|s| (s.id, s.handler.clone()))
            .collect();

        let mut report = DeliveryReport::default();
        for (id, handler) in handlers {
            match catch_unwind(AssertUnwindSafe(|| handler(event))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    warn!("Alert listener {:?} failed on {}: {}", id, kind, e);
                    report.failed += 1;
                }
                Err(_) => {
                    error!("Alert listener {:?} panicked on {}", id, kind);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
