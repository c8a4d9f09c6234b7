//! Nullable node store — thread-safe in-memory storage for testing.

use qnet_store::{NodeRecord, NodeStore, StoreError};
use qnet_types::{HardwareFingerprint, NodeAddress, NodeId, NodeStatus, Timestamp};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory node store for testing and single-process deployments.
///
/// Records are keyed by node id; secondary indexes map the current holder of
/// each address and hardware fingerprint back to its record. `insert`
/// repoints the indexes, so a retired record stays in the primary map while
/// its address/fingerprint pass to the replacement.
pub struct NullNodeStore {
    records: Mutex<HashMap<String, NodeRecord>>,
    address_index: Mutex<HashMap<String, String>>,
    fingerprint_index: Mutex<HashMap<String, String>>,
}

impl NullNodeStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            address_index: Mutex::new(HashMap::new()),
            fingerprint_index: Mutex::new(HashMap::new()),
        }
    }

    fn record_for_id(&self, node_id: &str) -> Option<NodeRecord> {
        self.records.lock().unwrap().get(node_id).cloned()
    }
}

impl Default for NullNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore for NullNodeStore {
    fn find_by_address(&self, address: &NodeAddress) -> Result<Option<NodeRecord>, StoreError> {
        let index = self.address_index.lock().unwrap();
        Ok(index
            .get(address.as_str())
            .and_then(|id| self.record_for_id(id)))
    }

    fn find_by_fingerprint(
        &self,
        fingerprint: &HardwareFingerprint,
    ) -> Result<Option<NodeRecord>, StoreError> {
        let index = self.fingerprint_index.lock().unwrap();
        Ok(index
            .get(&fingerprint.to_hex())
            .and_then(|id| self.record_for_id(id)))
    }

    fn get(&self, node_id: &NodeId) -> Result<Option<NodeRecord>, StoreError> {
        Ok(self.record_for_id(node_id.as_str()))
    }

    fn insert(&self, record: &NodeRecord) -> Result<(), StoreError> {
        let id = record.node_id.as_str().to_string();
        self.address_index
            .lock()
            .unwrap()
            .insert(record.address.as_str().to_string(), id.clone());
        self.fingerprint_index
            .lock()
            .unwrap()
            .insert(record.hardware_fingerprint.to_hex(), id.clone());
        self.records.lock().unwrap().insert(id, record.clone());
        Ok(())
    }

    fn update_last_seen(&self, node_id: &NodeId, now: Timestamp) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.get_mut(node_id.as_str()) {
            Some(record) => {
                record.last_seen = now;
                Ok(())
            }
            None => Err(StoreError::NotFound(node_id.to_string())),
        }
    }

    fn update_reputation(&self, node_id: &NodeId, reputation: f64) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.get_mut(node_id.as_str()) {
            Some(record) => {
                record.reputation = reputation;
                Ok(())
            }
            None => Err(StoreError::NotFound(node_id.to_string())),
        }
    }

    fn update_status(&self, node_id: &NodeId, status: NodeStatus) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.get_mut(node_id.as_str()) {
            Some(record) => {
                record.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(node_id.to_string())),
        }
    }

    fn iter_nodes(&self) -> Result<Vec<NodeRecord>, StoreError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    fn node_count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}
