//! Scheduler integration tests
//!
//! Drive the periodic evaluation and cleanup tasks with tokio's paused clock.

#[cfg(test)]
mod tests {
    use crate::common::{RequestFactory, record_events, test_engine};
    use chrono::Duration as ChronoDuration;
    use request_monitor::{AlertKind, MonitoringScheduler, SchedulerConfig, TimeRange};
    use std::time::Duration;

    fn config(evaluation: u64, cleanup: u64) -> SchedulerConfig {
        SchedulerConfig {
            enabled: true,
            evaluation_interval_secs: evaluation,
            cleanup_interval_secs: cleanup,
        }
    }

    /// Evaluation fires once per interval, never immediately
    #[tokio::test(start_paused = true)]
    async fn test_evaluation_interval() {
        let engine = test_engine();
        for _ in 0..3 {
            engine.record_request(RequestFactory::ok(2600.0));
        }
        let log = record_events(&engine, AlertKind::HighResponseTime);

        let _scheduler = MonitoringScheduler::start(engine.clone(), &config(30, 3600)).unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(log.lock().is_empty());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(log.lock().len(), 2);
    }

    /// Dropping the scheduler stops its tasks
    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_tasks() {
        let engine = test_engine();
        engine.record_request(RequestFactory::server_error(10.0));
        let log = record_events(&engine, AlertKind::HighErrorRate);

        let scheduler = MonitoringScheduler::start(engine.clone(), &config(10, 3600)).unwrap();
        tokio::time::sleep(Duration::from_secs(15)).await;
        assert_eq!(log.lock().len(), 1);

        drop(scheduler);
        tokio::time::sleep(Duration::from_secs(100)).await;
        assert_eq!(log.lock().len(), 1);
    }

    /// Cleanup prunes expired observations on its own interval
    #[tokio::test(start_paused = true)]
    async fn test_cleanup_interval() {
        let engine = test_engine();
        engine.record_request(RequestFactory::aged(ChronoDuration::hours(30)));
        engine.record_request(RequestFactory::ok(10.0));

        let _scheduler = MonitoringScheduler::start(engine.clone(), &config(3600, 60)).unwrap();

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(engine.request_metrics(TimeRange::all()).len(), 1);
    }
}
