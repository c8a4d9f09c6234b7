//! Ping policy types.

use serde::{Deserialize, Serialize};

/// Node tier, governing ping cadence and strictness of the liveness SLA.
///
/// Server-backed nodes can sustain frequent polling cheaply, so they are
/// held to a tighter SLA; the Super/Full split routes higher-value stake to
/// the stricter one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeTier {
    /// Mobile-backed node, one binary check per window.
    Light,
    /// Server-backed node below the Super activation threshold.
    Full,
    /// Server-backed node at or above the Super activation threshold.
    Super,
}

impl NodeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Full => "full",
            Self::Super => "super",
        }
    }
}

impl std::fmt::Display for NodeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the probing subsystem should ping.
///
/// A registration with no probeable target never produces a policy at all
/// (it fails routing), so there is no `None` variant here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PingTarget {
    /// Probe the node's server endpoint.
    Server { endpoint: String },
    /// Probe up to the device limit of the node's registered mobile devices.
    Mobile { devices: Vec<String> },
}

/// The probing policy for one node.
///
/// Derived, not authoritative: recomputable at any time from the node's
/// registration attributes, and cheap enough (O(1)) that callers should not
/// cache it as ground truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PingPolicy {
    pub target: PingTarget,
    pub tier: NodeTier,
    /// Fraction of pings in the window that must succeed, in (0, 1].
    pub success_rate_required: f64,
    pub pings_per_window: u32,
    pub ping_interval_secs: u64,
}

impl PingPolicy {
    /// The observation window this policy's cadence spans.
    ///
    /// Invariant: `pings_per_window * ping_interval_secs` equals the fixed
    /// window for every tier.
    pub fn observation_window_secs(&self) -> u64 {
        self.pings_per_window as u64 * self.ping_interval_secs
    }

    /// Whether a single missed ping fails the node outright.
    pub fn is_binary_check(&self) -> bool {
        self.pings_per_window == 1 && self.success_rate_required >= 1.0
    }
}
