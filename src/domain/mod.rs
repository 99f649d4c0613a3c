// Snapshot value object and serialization policy
pub mod snapshot;

// Uptime duration rendering
pub mod uptime;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

pub use snapshot::MetricSnapshot;
