//! The registrar state machine.

use std::sync::Mutex;

use qnet_store::{NodeRecord, NodeStore, StoreError};
use qnet_types::{
    HardwareFingerprint, NodeAddress, NodeId, NodeStatus, ProtocolParams, Timestamp,
};
use qnet_utils::{format_duration, StatsCounter};

use crate::error::RegistryError;

const STAT_REGISTERED: &str = "registered";
const STAT_DUPLICATE_ADDRESS: &str = "duplicate_address";
const STAT_DUPLICATE_HARDWARE: &str = "duplicate_hardware";
const STAT_TOUCHED: &str = "touched";
const STAT_NOT_FOUND: &str = "not_found";

/// Issues unique per-node identifiers and tracks liveness timestamps.
///
/// The store is an injected collaborator; the registrar owns the uniqueness
/// invariants. A single internal mutex serializes the check-then-insert
/// sequence of `register` — without it, two concurrent callers claiming the
/// same address or fingerprint could both pass the uniqueness check and
/// both insert. `touch` and `list_active` ride the store's own
/// synchronization and may run concurrently with each other.
pub struct Registrar<S: NodeStore> {
    store: S,
    params: ProtocolParams,
    registration_lock: Mutex<()>,
    stats: StatsCounter,
}

impl<S: NodeStore> Registrar<S> {
    pub fn new(store: S, params: ProtocolParams) -> Self {
        Self {
            store,
            params,
            registration_lock: Mutex::new(()),
            stats: StatsCounter::new(&[
                STAT_REGISTERED,
                STAT_DUPLICATE_ADDRESS,
                STAT_DUPLICATE_HARDWARE,
                STAT_TOUCHED,
                STAT_NOT_FOUND,
            ]),
        }
    }

    /// Register a new node.
    ///
    /// Fails with [`RegistryError::DuplicateAddress`] if any active record
    /// already holds `address`, and with
    /// [`RegistryError::DuplicateHardware`] if any active record already
    /// holds `fingerprint` — the hardware check runs against all active
    /// records, not just those under the same address, which blocks one
    /// operator running many addresses on one machine and vice versa.
    pub fn register(
        &self,
        address: NodeAddress,
        fingerprint: HardwareFingerprint,
        now: Timestamp,
    ) -> Result<NodeRecord, RegistryError> {
        let _guard = self.registration_lock.lock().unwrap();

        if let Some(existing) = self.store.find_by_address(&address)? {
            if existing.status.is_active() {
                self.stats.increment(STAT_DUPLICATE_ADDRESS);
                tracing::warn!(%address, "registration rejected: address already active");
                return Err(RegistryError::DuplicateAddress(address));
            }
        }
        if let Some(existing) = self.store.find_by_fingerprint(&fingerprint)? {
            if existing.status.is_active() {
                self.stats.increment(STAT_DUPLICATE_HARDWARE);
                tracing::warn!(
                    %fingerprint,
                    holder = %existing.node_id,
                    "registration rejected: hardware already active"
                );
                return Err(RegistryError::DuplicateHardware(fingerprint));
            }
        }

        let node_id = NodeId::derive(&address, &fingerprint);
        let record = NodeRecord {
            node_id: node_id.clone(),
            address,
            hardware_fingerprint: fingerprint,
            registered_at: now,
            last_seen: now,
            reputation: self.params.initial_reputation,
            status: NodeStatus::Active,
        };
        self.store.insert(&record)?;
        self.stats.increment(STAT_REGISTERED);
        tracing::info!(%node_id, "node registered");
        Ok(record)
    }

    /// Record that a node was seen alive now.
    ///
    /// Fails with [`RegistryError::NotFound`] if `node_id` is unknown or
    /// the record is no longer active.
    pub fn touch(&self, node_id: &NodeId, now: Timestamp) -> Result<(), RegistryError> {
        match self.store.get(node_id)? {
            Some(record) if record.status.is_active() => {
                self.store.update_last_seen(node_id, now)?;
                self.stats.increment(STAT_TOUCHED);
                Ok(())
            }
            _ => {
                self.stats.increment(STAT_NOT_FOUND);
                Err(RegistryError::NotFound(node_id.clone()))
            }
        }
    }

    /// All active records seen within the last `max_inactive_secs`.
    ///
    /// Order is unspecified; callers must not depend on it.
    pub fn list_active(
        &self,
        max_inactive_secs: u64,
        now: Timestamp,
    ) -> Result<Vec<NodeRecord>, RegistryError> {
        let live: Vec<NodeRecord> = self
            .store
            .iter_active()?
            .into_iter()
            .filter(|r| !r.last_seen.is_stale(max_inactive_secs, now))
            .collect();
        tracing::debug!(
            count = live.len(),
            window = %format_duration(max_inactive_secs),
            "listed active nodes"
        );
        Ok(live)
    }

    /// Look up a record by id, regardless of status.
    pub fn get(&self, node_id: &NodeId) -> Result<NodeRecord, RegistryError> {
        self.store
            .get(node_id)?
            .ok_or_else(|| RegistryError::NotFound(node_id.clone()))
    }

    /// Transition a node's status.
    ///
    /// This is the narrow update path used by the external
    /// liveness-verification process; the registrar itself never bans or
    /// deactivates a node on its own.
    pub fn set_status(&self, node_id: &NodeId, status: NodeStatus) -> Result<(), RegistryError> {
        self.store.update_status(node_id, status).map_err(|e| match e {
            StoreError::NotFound(_) => RegistryError::NotFound(node_id.clone()),
            other => RegistryError::Store(other),
        })?;
        tracing::info!(%node_id, ?status, "node status updated");
        Ok(())
    }

    /// Registration statistics counters.
    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    /// The underlying store, for collaborators with their own narrow
    /// update paths (reputation).
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qnet_nullables::{NullClock, NullNodeStore};
    use std::sync::Arc;

    fn registrar() -> Registrar<NullNodeStore> {
        Registrar::new(NullNodeStore::new(), ProtocolParams::default())
    }

    fn fp(bytes: &[u8]) -> HardwareFingerprint {
        HardwareFingerprint::new(bytes.to_vec())
    }

    #[test]
    fn register_creates_an_active_record_with_derived_did() {
        let reg = registrar();
        let clock = NullClock::new(1_000);

        let record = reg
            .register(NodeAddress::new("alice"), fp(&[0xAA, 0xBB]), clock.now())
            .unwrap();

        assert!(record.node_id.as_str().starts_with("did:qnet:"));
        assert_eq!(record.node_id.as_str().len(), "did:qnet:".len() + 64);
        assert_eq!(record.status, NodeStatus::Active);
        assert_eq!(record.reputation, 1.0);
        assert_eq!(record.registered_at, Timestamp::new(1_000));
        assert_eq!(record.last_seen, Timestamp::new(1_000));
        assert_eq!(reg.stats().get("registered"), 1);
    }

    #[test]
    fn duplicate_address_is_rejected() {
        let reg = registrar();
        let now = Timestamp::new(1_000);

        reg.register(NodeAddress::new("alice"), fp(&[1]), now).unwrap();
        let result = reg.register(NodeAddress::new("alice"), fp(&[2]), now);
        assert!(matches!(result, Err(RegistryError::DuplicateAddress(_))));
        assert_eq!(reg.stats().get("duplicate_address"), 1);
    }

    #[test]
    fn shared_hardware_across_addresses_is_rejected() {
        let reg = registrar();
        let now = Timestamp::new(1_000);

        reg.register(NodeAddress::new("alice"), fp(&[0xAA, 0xBB]), now)
            .unwrap();
        let result = reg.register(NodeAddress::new("bob"), fp(&[0xAA, 0xBB]), now);
        assert!(matches!(result, Err(RegistryError::DuplicateHardware(_))));
        assert_eq!(reg.stats().get("duplicate_hardware"), 1);
    }

    #[test]
    fn registering_the_same_pair_twice_fails_on_the_address_check() {
        let reg = registrar();
        let now = Timestamp::new(1_000);

        reg.register(NodeAddress::new("alice"), fp(&[7]), now).unwrap();
        let result = reg.register(NodeAddress::new("alice"), fp(&[7]), now);
        assert!(matches!(result, Err(RegistryError::DuplicateAddress(_))));
    }

    #[test]
    fn retired_records_free_their_address_and_hardware() {
        let reg = registrar();
        let now = Timestamp::new(1_000);

        let first = reg
            .register(NodeAddress::new("alice"), fp(&[1]), now)
            .unwrap();
        reg.set_status(&first.node_id, NodeStatus::Inactive).unwrap();

        // Uniqueness is enforced against active records only.
        let second = reg
            .register(NodeAddress::new("alice"), fp(&[1]), Timestamp::new(2_000))
            .unwrap();
        assert_eq!(second.node_id, first.node_id);
        assert_eq!(second.status, NodeStatus::Active);
    }

    #[test]
    fn touch_updates_last_seen_for_active_nodes_only() {
        let reg = registrar();
        let clock = NullClock::new(1_000);

        let record = reg
            .register(NodeAddress::new("alice"), fp(&[1]), clock.now())
            .unwrap();
        clock.advance(500);
        reg.touch(&record.node_id, clock.now()).unwrap();
        assert_eq!(
            reg.get(&record.node_id).unwrap().last_seen,
            Timestamp::new(1_500)
        );

        reg.set_status(&record.node_id, NodeStatus::Banned).unwrap();
        let result = reg.touch(&record.node_id, clock.now());
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn touch_unknown_node_is_not_found() {
        let reg = registrar();
        let ghost = NodeId::derive(&NodeAddress::new("ghost"), &fp(&[9]));
        let result = reg.touch(&ghost, Timestamp::new(1));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert_eq!(reg.stats().get("not_found"), 1);
    }

    #[test]
    fn list_active_drops_stale_and_non_active_nodes() {
        let reg = registrar();
        let clock = NullClock::new(10_000);

        let fresh = reg
            .register(NodeAddress::new("fresh"), fp(&[1]), clock.now())
            .unwrap();
        let stale = reg
            .register(NodeAddress::new("stale"), fp(&[2]), clock.now())
            .unwrap();
        let banned = reg
            .register(NodeAddress::new("banned"), fp(&[3]), clock.now())
            .unwrap();
        reg.set_status(&banned.node_id, NodeStatus::Banned).unwrap();

        // Only `fresh` pings in before the window closes.
        clock.advance(14_400);
        reg.touch(&fresh.node_id, clock.now()).unwrap();
        clock.advance(1);

        let active = reg.list_active(14_400, clock.now()).unwrap();
        let ids: Vec<_> = active.iter().map(|r| r.node_id.clone()).collect();
        assert_eq!(ids, vec![fresh.node_id.clone()]);
        assert!(!ids.contains(&stale.node_id));
    }

    #[test]
    fn a_node_seen_exactly_at_the_window_boundary_is_still_active() {
        let reg = registrar();
        let record = reg
            .register(NodeAddress::new("edge"), fp(&[1]), Timestamp::new(1_000))
            .unwrap();
        // now - last_seen == max_inactive_secs is inside the window.
        let listed = reg.list_active(500, Timestamp::new(1_500)).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].node_id, record.node_id);
        assert!(reg.list_active(499, Timestamp::new(1_500)).unwrap().is_empty());
    }

    #[test]
    fn concurrent_registrations_of_one_identity_admit_exactly_one() {
        let reg = Arc::new(registrar());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let reg = Arc::clone(&reg);
            handles.push(std::thread::spawn(move || {
                reg.register(
                    NodeAddress::new("contended"),
                    fp(&[0xEE]),
                    Timestamp::new(1_000),
                )
                .is_ok()
            }));
        }
        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|admitted| *admitted)
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(reg.store().node_count().unwrap(), 1);
    }

    #[test]
    fn reputation_updates_flow_through_the_store_only() {
        let reg = registrar();
        let record = reg
            .register(NodeAddress::new("alice"), fp(&[1]), Timestamp::new(1_000))
            .unwrap();

        // The probing collaborator writes through the narrow store path.
        reg.store()
            .update_reputation(&record.node_id, 0.42)
            .unwrap();
        assert_eq!(reg.get(&record.node_id).unwrap().reputation, 0.42);
    }
}
