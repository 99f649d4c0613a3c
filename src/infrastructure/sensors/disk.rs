//! Filesystem usage via `sysinfo`.

use crate::domain::errors::SensorError;
use std::path::Path;
use sysinfo::Disks;

/// Usage percentage of the filesystem containing `path`.
///
/// The filesystem is resolved by the longest mount point that is a prefix
/// of `path`, so any path works, not just the mount point itself.
pub fn read_disk_usage(path: &Path) -> Result<f64, SensorError> {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .ok_or_else(|| SensorError::Unavailable {
            what: format!("filesystem containing {}", path.display()),
        })?;

    let total = disk.total_space();
    if total == 0 {
        return Err(SensorError::Unavailable {
            what: format!(
                "capacity of filesystem at {}",
                disk.mount_point().display()
            ),
        });
    }

    let used = total.saturating_sub(disk.available_space());
    Ok(used as f64 / total as f64 * 100.0)
}
