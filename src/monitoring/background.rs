//! Periodic driver for threshold evaluation and retention cleanup

use crate::config::{SchedulerConfig, Validate};
use crate::utils::error::{MonitoringError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::system::MonitoringEngine;

/// Owns the background tasks that call
/// [`MonitoringEngine::evaluate_thresholds`] and
/// [`MonitoringEngine::cleanup_old_metrics`] on an interval.
///
/// The tasks stop on [`stop`](Self::stop) or when the scheduler is dropped.
#[derive(Debug)]
pub struct MonitoringScheduler {
    active: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl MonitoringScheduler {
    /// Spawn the periodic tasks on the current tokio runtime.
    ///
    /// A disabled configuration yields an inactive scheduler with no tasks.
    pub fn start(engine: MonitoringEngine, config: &SchedulerConfig) -> Result<Self> {
        config.validate().map_err(MonitoringError::Validation)?;

        let active = Arc::new(AtomicBool::new(false));

        if !config.enabled {
            info!("Monitoring scheduler disabled");
            return Ok(Self {
                active,
                handles: Vec::new(),
            });
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| MonitoringError::scheduler(format!("No tokio runtime: {}", e)))?;

        info!(
            "Starting monitoring scheduler (evaluation every {}s, cleanup every {}s)",
            config.evaluation_interval_secs, config.cleanup_interval_secs
        );
        active.store(true, Ordering::Release);

        let evaluation = {
            let engine = engine.clone();
            spawn_periodic(
                &runtime,
                config.evaluation_interval(),
                active.clone(),
                move || {
                    let events = engine.evaluate_thresholds();
                    debug!("Threshold evaluation emitted {} event(s)", events.len());
                },
            )
        };

        let cleanup = spawn_periodic(
            &runtime,
            config.cleanup_interval(),
            active.clone(),
            move || {
                engine.cleanup_old_metrics();
            },
        );

        Ok(Self {
            active,
            handles: vec![evaluation, cleanup],
        })
    }

    /// Check if the periodic tasks are running.
    ///
    /// A task that ended on its own (for example by panicking) makes the
    /// scheduler inactive.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) && self.handles.iter().all(|h| !h.is_finished())
    }

    /// Stop the periodic tasks
    pub fn stop(&mut self) {
        if self.active.swap(false, Ordering::AcqRel) {
            info!("Stopping monitoring scheduler");
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for MonitoringScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `job` every `period`, starting one period from now
fn spawn_periodic<F>(
    runtime: &tokio::runtime::Handle,
    period: Duration,
    active: Arc<AtomicBool>,
    job: F,
) -> JoinHandle<()>
where
    F: Fn() + Send + 'static,
{
    runtime.spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;

            if !active.load(Ordering::Acquire) {
                break;
            }

            job();
        }
    })
}
