use anyhow::Result;
use async_trait::async_trait;

/// Outbound port for delivering one serialized snapshot.
///
/// Implementations make exactly one delivery attempt per call; retrying is
/// not part of the contract.
#[async_trait]
pub trait MetricPublisher: Send + Sync {
    async fn publish(&self, payload: &[u8]) -> Result<()>;
}
