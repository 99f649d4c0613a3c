//! Recording publisher for tests.

use crate::domain::ports::MetricPublisher;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory [`MetricPublisher`] that records every payload it is handed.
/// Arm it with [`MockPublisher::failing`] to exercise the failure path.
#[derive(Default)]
pub struct MockPublisher {
    published: Mutex<Vec<Vec<u8>>>,
    fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every attempt fails.
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Payloads received so far, in publish order.
    pub fn published(&self) -> Vec<Vec<u8>> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricPublisher for MockPublisher {
    async fn publish(&self, payload: &[u8]) -> Result<()> {
        if self.fail {
            bail!("mock publisher armed to fail");
        }
        self.published.lock().unwrap().push(payload.to_vec());
        Ok(())
    }
}
