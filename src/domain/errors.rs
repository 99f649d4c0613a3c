use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the sensor readers.
///
/// Any of these aborts snapshot construction; the thermal sensor is the one
/// reader that degrades to absence instead of returning an error.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("{what} is not available on this host")]
    Unavailable { what: String },
}
