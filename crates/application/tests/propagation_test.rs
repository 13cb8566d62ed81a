use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use zone53_application::ports::{ChangeStatus, ChangeToken, ZoneDirectory};
use zone53_application::services::propagation::wait_for_change_with_interval;
use zone53_domain::{ChangeOperation, RecordSet, ZoneError, ZoneInfo};

/// Directory stub that replays a scripted sequence of change statuses.
struct ScriptedDirectory {
    statuses: Mutex<VecDeque<ChangeStatus>>,
}

impl ScriptedDirectory {
    fn new(statuses: impl IntoIterator<Item = ChangeStatus>) -> Self {
        ScriptedDirectory {
            statuses: Mutex::new(statuses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ZoneDirectory for ScriptedDirectory {
    async fn list_zones(&self) -> Result<Vec<ZoneInfo>, ZoneError> {
        unreachable!("not exercised")
    }

    async fn get_zone(&self, _zone_id: &str) -> Result<ZoneInfo, ZoneError> {
        unreachable!("not exercised")
    }

    async fn list_record_sets(&self, _zone_id: &str) -> Result<Vec<RecordSet>, ZoneError> {
        unreachable!("not exercised")
    }

    async fn submit_changes(
        &self,
        _zone_id: &str,
        _changes: &[ChangeOperation],
    ) -> Result<ChangeToken, ZoneError> {
        unreachable!("not exercised")
    }

    async fn change_status(&self, _token: &ChangeToken) -> Result<ChangeStatus, ZoneError> {
        let mut statuses = self.statuses.lock().unwrap();
        Ok(statuses.pop_front().unwrap_or(ChangeStatus::InSync))
    }
}

#[tokio::test]
async fn polls_until_the_change_is_in_sync() {
    let directory = ScriptedDirectory::new([
        ChangeStatus::Pending,
        ChangeStatus::Pending,
        ChangeStatus::InSync,
    ]);
    let token = ChangeToken("abc123".to_string());

    wait_for_change_with_interval(&directory, &token, Duration::ZERO)
        .await
        .unwrap();
    assert!(directory.statuses.lock().unwrap().is_empty());
}

#[tokio::test]
async fn a_failed_change_surfaces_as_a_provider_error() {
    let directory = ScriptedDirectory::new([
        ChangeStatus::Pending,
        ChangeStatus::Failed("rejected".to_string()),
    ]);
    let token = ChangeToken("abc123".to_string());

    match wait_for_change_with_interval(&directory, &token, Duration::ZERO).await {
        Err(ZoneError::Provider(msg)) => {
            assert!(msg.contains("abc123") && msg.contains("rejected"), "{msg}")
        }
        other => panic!("unexpected result {other:?}"),
    }
}
