use async_trait::async_trait;
use zone53_domain::{ChangeOperation, RecordSet, ZoneError, ZoneInfo};

/// Opaque token identifying a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeToken(pub String);

/// Propagation status of a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    Pending,
    InSync,
    Failed(String),
}

/// The remote zone directory service. Implementations own pagination,
/// transport and retry policy; callers see complete listings and single
/// round trips.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    async fn list_zones(&self) -> Result<Vec<ZoneInfo>, ZoneError>;

    async fn get_zone(&self, zone_id: &str) -> Result<ZoneInfo, ZoneError>;

    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>, ZoneError>;

    /// Submit one change batch. Batches are not retried here; a failure
    /// leaves previously submitted batches applied.
    async fn submit_changes(
        &self,
        zone_id: &str,
        changes: &[ChangeOperation],
    ) -> Result<ChangeToken, ZoneError>;

    async fn change_status(&self, token: &ChangeToken) -> Result<ChangeStatus, ZoneError>;
}
