//! End-to-end pipeline tests against the recording publisher.
//!
//! Sensor reads are live (Linux host), so each test pays the one-second
//! CPU sampling window.

use sysprobe::application::assembler::build_snapshot;
use sysprobe::application::pipeline::{run, RunOutcome};
use sysprobe::config::{Config, MqttConfig};
use sysprobe::domain::MetricSnapshot;
use sysprobe::infrastructure::MockPublisher;

fn test_config() -> Config {
    Config {
        mqtt: MqttConfig {
            broker: "127.0.0.1".to_string(),
            port: 1,
            topic: "test/system".to_string(),
            username: None,
            password: None,
            client_id: "sysprobe-test".to_string(),
        },
        timezone: chrono_tz::Tz::Europe__Paris,
        disk_path: "/".into(),
        // Point at nothing so the temperature reads as absent everywhere.
        thermal_path: "/no/such/thermal/zone".into(),
    }
}

#[tokio::test]
async fn test_local_mode_never_touches_the_publisher() {
    let config = test_config();
    let publisher = MockPublisher::new();

    let outcome = run(&config, &publisher, true).await.unwrap();

    assert_eq!(outcome, RunOutcome::Local);
    assert!(publisher.published().is_empty());
}

#[tokio::test]
async fn test_publish_mode_delivers_exactly_one_payload() {
    let config = test_config();
    let publisher = MockPublisher::new();

    let outcome = run(&config, &publisher, false).await.unwrap();

    assert_eq!(outcome, RunOutcome::Published);
    let published = publisher.published();
    assert_eq!(published.len(), 1);

    let snapshot: MetricSnapshot = serde_json::from_slice(&published[0]).unwrap();
    assert_eq!(snapshot.cpu_temperature, None);
    assert!((0.0..=100.0).contains(&snapshot.cpu_idle_usage));
    assert!((0.0..=100.0).contains(&snapshot.memory_usage_percent));
    assert!((0.0..=100.0).contains(&snapshot.hdd_usage_percent));
}

#[tokio::test]
async fn test_failed_publish_is_absorbed() {
    let config = test_config();
    let publisher = MockPublisher::failing();

    let outcome = run(&config, &publisher, false).await.unwrap();

    assert_eq!(outcome, RunOutcome::PublishFailed);
}

#[tokio::test]
async fn test_live_snapshot_respects_invariants() {
    let config = test_config();
    let snapshot = build_snapshot(&config).unwrap();

    for pct in [
        snapshot.cpu_system_usage,
        snapshot.cpu_user_usage,
        snapshot.cpu_idle_usage,
        snapshot.memory_usage_percent,
        snapshot.hdd_usage_percent,
    ] {
        assert!((0.0..=100.0).contains(&pct), "percentage out of range: {pct}");
    }
    for mb in [
        snapshot.mem_usage_total,
        snapshot.mem_usage_available,
        snapshot.mem_usage_used,
        snapshot.mem_usage_free,
    ] {
        assert!(mb >= 0.0, "negative megabyte figure: {mb}");
    }
    assert!(!snapshot.uptime.is_empty());
    assert!(snapshot.boot_time.contains('T'));
}
