//! Aggregate CPU utilization from `/proc/stat`.
//!
//! Utilization is a delta between two reads of the aggregate `cpu` line,
//! taken exactly one second apart. The blocking sleep between the reads is
//! part of the measurement contract, not incidental latency.

use crate::domain::errors::SensorError;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

pub const PROC_STAT: &str = "/proc/stat";

/// Fixed sampling window for the utilization delta.
pub const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Tick counters from the aggregate `cpu` line, in USER_HZ units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTicks {
    fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }
}

/// System/user/idle shares of a sampling window, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuTimesPercent {
    pub system: f64,
    pub user: f64,
    pub idle: f64,
}

/// Samples CPU utilization over [`SAMPLE_WINDOW`].
///
/// Blocks the calling thread for the full window; the run has no other work
/// to do during it.
pub fn sample_cpu_times() -> Result<CpuTimesPercent, SensorError> {
    let before = read_ticks()?;
    thread::sleep(SAMPLE_WINDOW);
    let after = read_ticks()?;
    Ok(percentages(&before, &after))
}

fn read_ticks() -> Result<CpuTicks, SensorError> {
    let path = Path::new(PROC_STAT);
    let contents = fs::read_to_string(path).map_err(|source| SensorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_proc_stat(&contents)
}

/// Parses the aggregate `cpu` line. Kernels older than 2.6.11 report fewer
/// than eight fields; missing trailing counters read as zero.
fn parse_proc_stat(contents: &str) -> Result<CpuTicks, SensorError> {
    let line = contents
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| SensorError::Parse {
            path: PROC_STAT.into(),
            reason: "no aggregate cpu line".to_string(),
        })?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|field| {
            field.parse::<u64>().map_err(|_| SensorError::Parse {
                path: PROC_STAT.into(),
                reason: format!("non-numeric tick counter '{field}'"),
            })
        })
        .collect::<Result<_, _>>()?;

    if fields.len() < 4 {
        return Err(SensorError::Parse {
            path: PROC_STAT.into(),
            reason: format!("expected at least 4 tick counters, got {}", fields.len()),
        });
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or(0);
    Ok(CpuTicks {
        user: field(0),
        nice: field(1),
        system: field(2),
        idle: field(3),
        iowait: field(4),
        irq: field(5),
        softirq: field(6),
        steal: field(7),
    })
}

fn percentages(before: &CpuTicks, after: &CpuTicks) -> CpuTimesPercent {
    let total = after.total().saturating_sub(before.total());
    if total == 0 {
        return CpuTimesPercent {
            system: 0.0,
            user: 0.0,
            idle: 0.0,
        };
    }

    let share = |b: u64, a: u64| a.saturating_sub(b) as f64 / total as f64 * 100.0;
    CpuTimesPercent {
        system: share(before.system, after.system),
        user: share(before.user, after.user),
        idle: share(before.idle, after.idle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT: &str = "cpu  4705 150 1120 16250 520 30 45 0 0 0\n\
                        cpu0 2400 80 560 8100 260 15 22 0 0 0\n\
                        intr 114930548\n";

    #[test]
    fn test_parse_aggregate_line() {
        let ticks = parse_proc_stat(STAT).unwrap();
        assert_eq!(ticks.user, 4705);
        assert_eq!(ticks.nice, 150);
        assert_eq!(ticks.system, 1120);
        assert_eq!(ticks.idle, 16250);
        assert_eq!(ticks.iowait, 520);
    }

    #[test]
    fn test_parse_tolerates_short_lines() {
        let ticks = parse_proc_stat("cpu  10 20 30 40\n").unwrap();
        assert_eq!(ticks.steal, 0);
        assert_eq!(ticks.total(), 100);
    }

    #[test]
    fn test_parse_rejects_missing_cpu_line() {
        let err = parse_proc_stat("intr 12345\n").unwrap_err();
        assert!(err.to_string().contains("cpu line"));
    }

    #[test]
    fn test_parse_rejects_garbage_counters() {
        assert!(parse_proc_stat("cpu  1 2 x 4\n").is_err());
    }

    #[test]
    fn test_percentages_are_shares_of_the_delta() {
        let before = CpuTicks {
            user: 100,
            system: 50,
            idle: 800,
            ..CpuTicks::default()
        };
        let after = CpuTicks {
            user: 150,
            system: 75,
            idle: 925,
            ..CpuTicks::default()
        };
        let pct = percentages(&before, &after);
        assert!((pct.user - 25.0).abs() < 1e-9);
        assert!((pct.system - 12.5).abs() < 1e-9);
        assert!((pct.idle - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_delta_yields_zero_shares() {
        let ticks = CpuTicks::default();
        let pct = percentages(&ticks, &ticks);
        assert_eq!(pct.system, 0.0);
        assert_eq!(pct.user, 0.0);
        assert_eq!(pct.idle, 0.0);
    }

    #[test]
    fn test_counter_wrap_does_not_underflow() {
        // A wrapped counter makes the second sample smaller than the first.
        let before = CpuTicks {
            user: 1_000,
            idle: 100,
            ..CpuTicks::default()
        };
        let after = CpuTicks {
            user: 10,
            idle: 200,
            ..CpuTicks::default()
        };
        let pct = percentages(&before, &after);
        assert!(pct.user >= 0.0 && pct.user <= 100.0);
        assert!(pct.idle >= 0.0 && pct.idle <= 100.0);
    }
}
