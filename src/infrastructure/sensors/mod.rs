//! Sensor readers for the host metrics.
//!
//! Each reader queries one metric family and owns its failure mode: the
//! thermal sensor degrades to absence, everything else returns a
//! [`crate::domain::errors::SensorError`] that aborts the run.

pub mod boot;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod thermal;
