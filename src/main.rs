//! sysprobe - one-shot host metrics snapshot publisher
//!
//! Samples host metrics (CPU load and temperature, memory, disk, uptime)
//! once, then publishes the snapshot to an MQTT broker as a retained
//! message, or prints it locally. Repetition is an external scheduler's job.
//!
//! # Usage
//! ```sh
//! sysprobe            # sample and publish
//! sysprobe --no-mqtt  # sample and print, network untouched
//! ```
//!
//! # Environment Variables
//! - `MQTT_BROKER` - broker host (default: broker)
//! - `MQTT_PORT` - broker port (default: 1883)
//! - `MQTT_TOPIC` - topic for the retained snapshot (default: rasp39/system)
//! - `MQTT_USER`, `MQTT_PASSWORD` - credentials; leave either empty for
//!   anonymous access
//! - `MQTT_CLIENT_ID` - client identifier (default: sysprobe)
//! - `PROBE_TIMEZONE` - zone for the boot timestamp (default: Europe/Paris)
//! - `PROBE_DISK_PATH` - filesystem to measure (default: /)
//! - `PROBE_THERMAL_PATH` - thermal zone file (default:
//!   /sys/class/thermal/thermal_zone0/temp)

use clap::Parser;
use std::process::ExitCode;
use sysprobe::application::pipeline::{run, RunOutcome};
use sysprobe::config::Config;
use sysprobe::infrastructure::mqtt::MqttPublisher;
use tracing::{error, info, Level};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Sample host metrics once and publish them via MQTT")]
struct Cli {
    /// Skip MQTT publishing and only print the serialized snapshot
    #[arg(long)]
    no_mqtt: bool,
}

/// Exit codes: 0 published or local, 1 publish failed, 2 snapshot failed.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("critical: invalid configuration: {e:#}");
            return ExitCode::from(2);
        }
    };

    info!(
        "sysprobe {} sampling host metrics",
        env!("CARGO_PKG_VERSION")
    );

    let publisher = MqttPublisher::new(&config.mqtt);
    match run(&config, &publisher, cli.no_mqtt).await {
        Ok(RunOutcome::Published) | Ok(RunOutcome::Local) => ExitCode::SUCCESS,
        Ok(RunOutcome::PublishFailed) => ExitCode::from(1),
        Err(e) => {
            error!("critical: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Timestamped human-readable lines: INFO and below to stdout, warnings and
/// errors to stderr.
fn init_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(|metadata| *metadata.level() > Level::WARN));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(|metadata| *metadata.level() <= Level::WARN));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(stderr_layer)
        .init();
}
