//! Boot instant and elapsed uptime.

use crate::domain::errors::SensorError;
use chrono::{DateTime, Utc};
use sysinfo::System;

/// Absolute boot instant and whole seconds elapsed since it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootReading {
    pub boot_time: DateTime<Utc>,
    pub uptime_seconds: u64,
}

/// Reads the boot timestamp and derives uptime as `now - boot`, truncated
/// to whole seconds.
pub fn read_boot_info() -> Result<BootReading, SensorError> {
    let boot_epoch = System::boot_time();
    let boot_time =
        DateTime::<Utc>::from_timestamp(boot_epoch as i64, 0).ok_or_else(|| {
            SensorError::Unavailable {
                what: format!("boot timestamp ({boot_epoch} is out of range)"),
            }
        })?;

    let uptime_seconds = (Utc::now() - boot_time).num_seconds().max(0) as u64;
    Ok(BootReading {
        boot_time,
        uptime_seconds,
    })
}
