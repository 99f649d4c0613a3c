//! The run pipeline: build snapshot, serialize, deliver.

use crate::application::assembler::build_snapshot;
use crate::config::Config;
use crate::domain::ports::MetricPublisher;
use anyhow::{Context, Result};
use tracing::{error, info};

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Snapshot delivered to the broker.
    Published,
    /// Local mode: snapshot printed, network untouched.
    Local,
    /// The one publish attempt failed; already logged at the call site.
    PublishFailed,
}

/// Runs the probe once.
///
/// In local mode the publisher is never invoked. A publish failure is
/// absorbed here (logged once to the error stream) and reported through the
/// outcome; a snapshot failure propagates to the caller.
pub async fn run(
    config: &Config,
    publisher: &dyn MetricPublisher,
    local_only: bool,
) -> Result<RunOutcome> {
    let snapshot = build_snapshot(config).context("snapshot construction failed")?;
    let payload = serde_json::to_string(&snapshot).context("snapshot serialization failed")?;

    if local_only {
        info!("test mode: generated payload {payload}");
        return Ok(RunOutcome::Local);
    }

    match publisher.publish(payload.as_bytes()).await {
        Ok(()) => {
            info!("published to '{}': {payload}", config.mqtt.topic);
            Ok(RunOutcome::Published)
        }
        Err(e) => {
            error!("publish failed: {e:#}");
            Ok(RunOutcome::PublishFailed)
        }
    }
}
