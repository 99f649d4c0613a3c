//! Snapshot assembly.
//!
//! [`collect_readings`] performs all sensor I/O (including the one-second
//! CPU sampling window); [`assemble`] turns raw readings into the wire
//! record and is pure, so the rounding and formatting policy is testable
//! against synthetic readings.

use crate::config::Config;
use crate::domain::errors::SensorError;
use crate::domain::snapshot::{round1, round2, MetricSnapshot};
use crate::domain::uptime::format_uptime;
use crate::infrastructure::sensors::boot::{read_boot_info, BootReading};
use crate::infrastructure::sensors::cpu::{sample_cpu_times, CpuTimesPercent};
use crate::infrastructure::sensors::disk::read_disk_usage;
use crate::infrastructure::sensors::memory::{read_memory, MemoryReading};
use crate::infrastructure::sensors::thermal::read_cpu_temperature;
use chrono_tz::Tz;

const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;

/// Raw sensor outputs for one run, prior to rounding and formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReadings {
    pub cpu_temperature: Option<f64>,
    pub cpu: CpuTimesPercent,
    pub memory: MemoryReading,
    pub disk_used_percent: f64,
    pub boot: BootReading,
}

/// Queries every sensor exactly once.
///
/// Blocks for the one-second CPU sampling window. A missing thermal sensor
/// is recorded as absence; any other sensor failure aborts the collection.
pub fn collect_readings(config: &Config) -> Result<SensorReadings, SensorError> {
    Ok(SensorReadings {
        cpu_temperature: read_cpu_temperature(&config.thermal_path),
        cpu: sample_cpu_times()?,
        memory: read_memory()?,
        disk_used_percent: read_disk_usage(&config.disk_path)?,
        boot: read_boot_info()?,
    })
}

/// Applies the rounding and formatting policy to raw readings.
///
/// Percentages and temperature round to 2 decimals, megabyte figures to 1;
/// byte counts convert with binary megabytes; the boot instant renders as
/// RFC 3339 in the reference time zone.
pub fn assemble(readings: &SensorReadings, timezone: Tz) -> MetricSnapshot {
    let mb = |bytes: u64| round1(bytes as f64 / BYTES_PER_MEGABYTE);

    MetricSnapshot {
        cpu_temperature: readings.cpu_temperature.map(round2),
        cpu_system_usage: round2(readings.cpu.system),
        cpu_user_usage: round2(readings.cpu.user),
        cpu_idle_usage: round2(readings.cpu.idle),
        memory_usage_percent: round2(readings.memory.used_percent),
        mem_usage_total: mb(readings.memory.total_bytes),
        mem_usage_available: mb(readings.memory.available_bytes),
        mem_usage_used: mb(readings.memory.used_bytes),
        mem_usage_free: mb(readings.memory.free_bytes),
        hdd_usage_percent: round2(readings.disk_used_percent),
        uptime: format_uptime(readings.boot.uptime_seconds),
        boot_time: readings
            .boot
            .boot_time
            .with_timezone(&timezone)
            .to_rfc3339(),
    }
}

/// Builds the snapshot for this run: collect, then assemble.
pub fn build_snapshot(config: &Config) -> Result<MetricSnapshot, SensorError> {
    let readings = collect_readings(config)?;
    Ok(assemble(&readings, config.timezone))
}
