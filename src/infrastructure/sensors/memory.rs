//! Physical memory accounting via `sysinfo`.

use crate::domain::errors::SensorError;
use sysinfo::System;

/// Raw memory figures in bytes plus the overall used percentage.
///
/// `used_percent` follows the OS convention of counting buffers/cache as
/// available: `(total - available) / total * 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReading {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

pub fn read_memory() -> Result<MemoryReading, SensorError> {
    let mut system = System::new();
    system.refresh_memory();

    let total = system.total_memory();
    if total == 0 {
        return Err(SensorError::Unavailable {
            what: "virtual memory accounting".to_string(),
        });
    }

    let available = system.available_memory();
    Ok(MemoryReading {
        total_bytes: total,
        available_bytes: available,
        used_bytes: system.used_memory(),
        free_bytes: system.free_memory(),
        used_percent: total.saturating_sub(available) as f64 / total as f64 * 100.0,
    })
}
