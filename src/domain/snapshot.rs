//! The snapshot value object.
//!
//! One [`MetricSnapshot`] is built per run, serialized immediately, and
//! discarded. Field order is load-bearing: subscribers treat the record as a
//! fixed-order mapping, so the struct declaration order is the wire order.

use serde::{Deserialize, Serialize};

/// Point-in-time record of host metrics.
///
/// All percentages are in `[0, 100]` rounded to 2 decimals; memory fields
/// are binary megabytes (1 MB = 1,048,576 bytes) rounded to 1 decimal.
/// `cpu_temperature` is the only optional field and encodes as JSON `null`
/// when the sensor is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub cpu_temperature: Option<f64>,
    pub cpu_system_usage: f64,
    pub cpu_user_usage: f64,
    pub cpu_idle_usage: f64,
    pub memory_usage_percent: f64,
    pub mem_usage_total: f64,
    pub mem_usage_available: f64,
    pub mem_usage_used: f64,
    pub mem_usage_free: f64,
    pub hdd_usage_percent: f64,
    pub uptime: String,
    pub boot_time: String,
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
