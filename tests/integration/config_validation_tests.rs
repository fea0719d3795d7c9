//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config
//! sections. Invalid configurations must be rejected before an engine or
//! scheduler is built from them.

#[cfg(test)]
mod tests {
    use request_monitor::config::Validate;
    use request_monitor::{
        AlertThresholds, AlertThresholdsUpdate, Config, HealthThresholds, MonitoringConfig,
        MonitoringEngine, MonitoringError, RetentionConfig, SchedulerConfig, StaticProbe,
    };
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    // ==================== AlertThresholds Validation ====================

    /// Defaults are valid
    #[test]
    fn test_default_alert_thresholds_valid() {
        assert!(AlertThresholds::default().validate().is_ok());
    }

    /// Error rate above 100% is rejected
    #[test]
    fn test_alert_error_rate_above_hundred() {
        let thresholds = AlertThresholds {
            error_rate_percent: 150.0,
            ..Default::default()
        };

        let result = thresholds.validate();
        assert!(result.unwrap_err().contains("error_rate_percent"));
    }

    /// Non-finite latency thresholds are rejected
    #[test]
    fn test_alert_response_time_not_finite() {
        let thresholds = AlertThresholds {
            response_time_ms: f64::INFINITY,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    /// Critical status code must be a real HTTP status
    #[test]
    fn test_alert_critical_status_code_range() {
        for code in [0, 99, 600] {
            let thresholds = AlertThresholds {
                critical_status_code: code,
                ..Default::default()
            };
            assert!(thresholds.validate().is_err(), "{} should be rejected", code);
        }

        let thresholds = AlertThresholds {
            critical_status_code: 400,
            ..Default::default()
        };
        assert!(thresholds.validate().is_ok());
    }

    // ==================== HealthThresholds Validation ====================

    /// Degraded cutoff may not exceed the unhealthy one
    #[test]
    fn test_health_degraded_above_unhealthy() {
        let thresholds = HealthThresholds {
            degraded_error_rate_percent: 60.0,
            unhealthy_error_rate_percent: 50.0,
            ..Default::default()
        };

        let result = thresholds.validate();
        assert!(result.unwrap_err().contains("degraded_error_rate_percent"));
    }

    /// Memory cutoff is a percentage
    #[test]
    fn test_health_memory_percentage() {
        let thresholds = HealthThresholds {
            critical_memory_percent: 101.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    // ==================== Retention & Scheduler ====================

    #[test]
    fn test_retention_zero_age() {
        let retention = RetentionConfig {
            max_age_hours: 0,
            ..Default::default()
        };
        assert!(retention.validate().is_err());
    }

    #[test]
    fn test_retention_zero_history() {
        let retention = RetentionConfig {
            max_alert_history: 0,
            ..Default::default()
        };
        assert!(retention.validate().is_err());
    }

    /// Zero intervals only matter when the scheduler is enabled
    #[test]
    fn test_scheduler_zero_interval() {
        let mut scheduler = SchedulerConfig {
            enabled: true,
            evaluation_interval_secs: 0,
            cleanup_interval_secs: 300,
        };
        assert!(scheduler.validate().unwrap_err().contains("evaluation_interval_secs"));

        scheduler.enabled = false;
        assert!(scheduler.validate().is_ok());
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_load_full_yaml() {
        let yaml = r#"
alerts:
  error_rate_percent: 2.5
  response_time_ms: 1500
  slow_request_ms: 4000
  critical_status_code: 502
health:
  unhealthy_error_rate_percent: 40
  critical_memory_percent: 85
  degraded_response_time_ms: 1200
  degraded_error_rate_percent: 8
retention:
  max_age_hours: 12
  max_alert_history: 250
scheduler:
  enabled: false
  evaluation_interval_secs: 15
  cleanup_interval_secs: 120
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let monitoring = config.monitoring();
        assert_eq!(monitoring.alerts.critical_status_code, 502);
        assert_eq!(monitoring.health.critical_memory_percent, 85.0);
        assert_eq!(monitoring.retention.max_alert_history, 250);
        assert!(!config.scheduler().enabled);
        assert_eq!(config.scheduler().cleanup_interval_secs, 120);
    }

    #[tokio::test]
    async fn test_load_empty_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}\n").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"alerts: [not, a, map]\n").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(MonitoringError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("monitoring.yaml")).await;
        assert!(matches!(result, Err(MonitoringError::Io(_))));
    }

    #[test]
    fn test_env_lookup_validates_result() {
        let result = Config::from_lookup(|key| {
            (key == "MONITOR_ERROR_RATE_PERCENT").then(|| "250".to_string())
        });
        assert!(matches!(result, Err(MonitoringError::Config(_))));
    }

    // ==================== Runtime Updates ====================

    /// A rejected update leaves the engine's thresholds untouched
    #[test]
    fn test_runtime_update_rejected() {
        let engine = MonitoringEngine::with_probe(
            &MonitoringConfig::default(),
            Arc::new(StaticProbe::default()),
        )
        .unwrap();

        let result =
            engine.set_alert_thresholds(AlertThresholdsUpdate::default().error_rate_percent(-3.0));
        assert!(matches!(result, Err(MonitoringError::Validation(_))));
        assert_eq!(engine.alert_thresholds(), AlertThresholds::default());
    }

    /// Partial updates accumulate
    #[test]
    fn test_runtime_updates_accumulate() {
        let engine = MonitoringEngine::with_probe(
            &MonitoringConfig::default(),
            Arc::new(StaticProbe::default()),
        )
        .unwrap();

        engine
            .set_alert_thresholds(AlertThresholdsUpdate::default().slow_request_ms(800.0))
            .unwrap();
        let thresholds = engine
            .set_alert_thresholds(AlertThresholdsUpdate::default().response_time_ms(400.0))
            .unwrap();

        assert_eq!(thresholds.slow_request_ms, 800.0);
        assert_eq!(thresholds.response_time_ms, 400.0);
        assert_eq!(thresholds.error_rate_percent, 5.0);
    }
}
