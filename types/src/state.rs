//! Status enum for registered nodes.

use serde::{Deserialize, Serialize};

/// The participation status of a registered node.
///
/// Records are never deleted — a node leaves the active set only by
/// transitioning to `Inactive` or `Banned`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Registered and eligible for liveness probing and rewards.
    Active,
    /// Dropped out of the liveness window; may be reactivated by the
    /// verification process.
    Inactive,
    /// Excluded by the integrating system; never probed or rewarded.
    Banned,
}

impl NodeStatus {
    /// Whether this node counts toward address/hardware uniqueness and the
    /// active set.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_banned(&self) -> bool {
        matches!(self, Self::Banned)
    }

    /// Whether the probing subsystem should ping this node at all.
    pub fn accepts_pings(&self) -> bool {
        matches!(self, Self::Active)
    }
}
