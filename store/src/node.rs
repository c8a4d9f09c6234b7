//! Node record storage trait.

use qnet_types::{HardwareFingerprint, NodeAddress, NodeId, NodeStatus, Timestamp};
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// One registered network participant.
///
/// Created exactly once by a successful registration. `last_seen` and
/// `reputation` are mutated by the liveness-verification process through the
/// narrow update operations below; the record itself is never deleted, only
/// transitioned to `Inactive` or `Banned`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node_id: NodeId,
    pub address: NodeAddress,
    pub hardware_fingerprint: HardwareFingerprint,
    pub registered_at: Timestamp,
    pub last_seen: Timestamp,
    /// Liveness score, seeded at registration and adjusted from ping
    /// outcomes.
    pub reputation: f64,
    pub status: NodeStatus,
}

/// Trait for node record storage operations.
///
/// Implementations must provide interior synchronization: readers observe a
/// consistent snapshot, and each method is individually atomic. The
/// check-then-insert sequence spanning several calls is serialized by the
/// registrar, not here.
pub trait NodeStore {
    /// The record currently holding `address`, regardless of status.
    fn find_by_address(&self, address: &NodeAddress) -> Result<Option<NodeRecord>, StoreError>;

    /// The record currently holding `fingerprint`, regardless of status.
    fn find_by_fingerprint(
        &self,
        fingerprint: &HardwareFingerprint,
    ) -> Result<Option<NodeRecord>, StoreError>;

    fn get(&self, node_id: &NodeId) -> Result<Option<NodeRecord>, StoreError>;

    /// Persist a freshly registered record, claiming its address and
    /// fingerprint indexes.
    fn insert(&self, record: &NodeRecord) -> Result<(), StoreError>;

    fn update_last_seen(&self, node_id: &NodeId, now: Timestamp) -> Result<(), StoreError>;

    fn update_reputation(&self, node_id: &NodeId, reputation: f64) -> Result<(), StoreError>;

    fn update_status(&self, node_id: &NodeId, status: NodeStatus) -> Result<(), StoreError>;

    /// Iterate over all records, in unspecified order.
    fn iter_nodes(&self) -> Result<Vec<NodeRecord>, StoreError>;

    /// Iterate over records with `status = Active`, in unspecified order.
    fn iter_active(&self) -> Result<Vec<NodeRecord>, StoreError> {
        Ok(self
            .iter_nodes()?
            .into_iter()
            .filter(|r| r.status.is_active())
            .collect())
    }

    fn node_count(&self) -> Result<u64, StoreError>;
}
