//! Fixed-interval polling until a change batch has propagated.

use crate::ports::{ChangeStatus, ChangeToken, ZoneDirectory};
use std::time::Duration;
use tracing::{error, info};
use zone53_domain::ZoneError;

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll the directory until the change reaches a terminal status.
pub async fn wait_for_change(
    directory: &dyn ZoneDirectory,
    token: &ChangeToken,
) -> Result<(), ZoneError> {
    wait_for_change_with_interval(directory, token, POLL_INTERVAL).await
}

pub async fn wait_for_change_with_interval(
    directory: &dyn ZoneDirectory,
    token: &ChangeToken,
    interval: Duration,
) -> Result<(), ZoneError> {
    info!("Waiting for sync");
    loop {
        match directory.change_status(token).await? {
            ChangeStatus::InSync => {
                info!("Completed");
                return Ok(());
            }
            ChangeStatus::Pending => {
                tokio::time::sleep(interval).await;
            }
            ChangeStatus::Failed(status) => {
                error!("Failed: {}", status);
                return Err(ZoneError::Provider(format!(
                    "change {} failed: {}",
                    token.0, status
                )));
            }
        }
    }
}
