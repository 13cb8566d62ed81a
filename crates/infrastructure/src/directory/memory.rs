//! In-memory zone directory, optionally persisted to a JSON snapshot.
//!
//! Stands in for the remote directory service in tests and offline runs;
//! it applies the same change-batch semantics (create conflicts, deletes
//! matching by content, the 100-operation batch cap) so reconciliation
//! behaves as it would against the real service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, instrument};
use zone53_application::ports::{ChangeStatus, ChangeToken, ZoneDirectory};
use zone53_application::services::MAX_CHANGE_BATCH;
use zone53_domain::{ChangeAction, ChangeOperation, RecordSet, RecordType, ZoneError, ZoneInfo};

#[derive(Debug, Default, Serialize, Deserialize)]
struct DirectoryState {
    zones: Vec<ZoneInfo>,
    record_sets: BTreeMap<String, Vec<RecordSet>>,
    #[serde(default)]
    synced_tokens: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryZoneDirectory {
    state: Mutex<DirectoryState>,
}

impl InMemoryZoneDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot; a missing file yields an empty directory.
    pub fn load(path: &Path) -> Result<Self, ZoneError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let bytes = std::fs::read(path).map_err(|e| ZoneError::Io(e.to_string()))?;
        let state: DirectoryState =
            serde_json::from_slice(&bytes).map_err(|e| ZoneError::Io(e.to_string()))?;
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ZoneError> {
        let state = self.lock();
        let bytes =
            serde_json::to_vec_pretty(&*state).map_err(|e| ZoneError::Io(e.to_string()))?;
        std::fs::write(path, bytes).map_err(|e| ZoneError::Io(e.to_string()))
    }

    /// Create a hosted zone with the provider's default SOA and NS sets.
    pub fn create_zone(&self, name: &str) -> ZoneInfo {
        let name = if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{}.", name)
        };
        let id = new_zone_id();
        let zone = ZoneInfo::new(id.clone(), name.clone());

        let mut soa = RecordSet::new(name.clone(), RecordType::SOA);
        soa.ttl = Some(900);
        soa.values.push(
            "ns-1.awsdns-01.org. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400"
                .to_string(),
        );
        let mut ns = RecordSet::new(name.clone(), RecordType::NS);
        ns.ttl = Some(172800);
        ns.values = vec![
            "ns-1.awsdns-01.org.".to_string(),
            "ns-2.awsdns-02.co.uk.".to_string(),
        ];

        let mut state = self.lock();
        state.zones.push(zone.clone());
        state.record_sets.insert(id, vec![soa, ns]);
        zone
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DirectoryState> {
        // lock poisoning only happens if a holder panicked; propagate
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn plain(zone_id: &str) -> &str {
    zone_id.strip_prefix("/hostedzone/").unwrap_or(zone_id)
}

fn new_zone_id() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut id = String::from("Z");
    for _ in 0..13 {
        id.push(ALPHABET[fastrand::usize(..ALPHABET.len())] as char);
    }
    id
}

fn apply_change(
    sets: &mut Vec<RecordSet>,
    change: &ChangeOperation,
) -> Result<(), ZoneError> {
    let set = &change.record_set;
    match change.action {
        ChangeAction::Delete => {
            let key = set.canonical_key();
            match sets.iter().position(|s| s.canonical_key() == key) {
                Some(i) => {
                    sets.remove(i);
                    Ok(())
                }
                None => Err(ZoneError::Provider(format!(
                    "tried to delete resource record set [name='{}', type='{}'] but it was not found",
                    set.name, set.rtype
                ))),
            }
        }
        ChangeAction::Create => {
            let exists = sets.iter().any(|s| {
                s.name == set.name
                    && s.rtype == set.rtype
                    && s.set_identifier == set.set_identifier
            });
            if exists {
                return Err(ZoneError::Provider(format!(
                    "resource record set [name='{}', type='{}'] already exists",
                    set.name, set.rtype
                )));
            }
            sets.push(set.clone());
            Ok(())
        }
    }
}

#[async_trait]
impl ZoneDirectory for InMemoryZoneDirectory {
    async fn list_zones(&self) -> Result<Vec<ZoneInfo>, ZoneError> {
        Ok(self.lock().zones.clone())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<ZoneInfo, ZoneError> {
        self.lock()
            .zones
            .iter()
            .find(|zone| zone.plain_id() == plain(zone_id))
            .cloned()
            .ok_or_else(|| ZoneError::ZoneNotFound(zone_id.to_string()))
    }

    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>, ZoneError> {
        self.lock()
            .record_sets
            .get(plain(zone_id))
            .cloned()
            .ok_or_else(|| ZoneError::ZoneNotFound(zone_id.to_string()))
    }

    #[instrument(skip(self, changes))]
    async fn submit_changes(
        &self,
        zone_id: &str,
        changes: &[ChangeOperation],
    ) -> Result<ChangeToken, ZoneError> {
        if changes.is_empty() {
            return Err(ZoneError::Provider("empty change batch".to_string()));
        }
        if changes.len() > MAX_CHANGE_BATCH {
            return Err(ZoneError::Provider(format!(
                "change batch of {} operations exceeds the {} limit",
                changes.len(),
                MAX_CHANGE_BATCH
            )));
        }

        let mut state = self.lock();
        let mut sets = state
            .record_sets
            .get(plain(zone_id))
            .cloned()
            .ok_or_else(|| ZoneError::ZoneNotFound(zone_id.to_string()))?;

        // validate the whole batch against a scratch copy first, so a
        // failed batch leaves the zone untouched
        for change in changes {
            apply_change(&mut sets, change)?;
        }
        state.record_sets.insert(plain(zone_id).to_string(), sets);

        let token = format!("{:016x}", fastrand::u64(..));
        state.synced_tokens.insert(token.clone());
        debug!(changes = changes.len(), token = %token, "applied change batch");
        Ok(ChangeToken(token))
    }

    async fn change_status(&self, token: &ChangeToken) -> Result<ChangeStatus, ZoneError> {
        if self.lock().synced_tokens.contains(&token.0) {
            Ok(ChangeStatus::InSync)
        } else {
            Err(ZoneError::Provider(format!("unknown change {}", token.0)))
        }
    }
}
