//! Protocol parameters for registration, liveness routing, and emission.
//!
//! Every field is a network-governable value; the defaults are the QNet
//! mainnet configuration. Parameters load from TOML with partial-override
//! semantics (missing fields fall back to defaults).

use serde::{Deserialize, Serialize};

use crate::error::QnetError;

/// All participation-core parameters stored by every node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    // ── Emission ─────────────────────────────────────────────────────────
    /// Block reward at height 0, in whole coins.
    #[serde(default = "default_initial_reward")]
    pub initial_reward: u64,

    /// Height of the emission cutoff: 10 years of blocks at one block per
    /// minute. Beyond it every block pays `min_reward`.
    #[serde(default = "default_emission_total_blocks")]
    pub emission_total_blocks: u64,

    /// Floor reward — emission never decays below this.
    #[serde(default = "default_min_reward")]
    pub min_reward: u64,

    /// Hard supply cap used for audit percentages: 2^32 coins.
    #[serde(default = "default_total_supply")]
    pub total_supply: u64,

    // ── Liveness ─────────────────────────────────────────────────────────
    /// Observation window over which ping success is judged.
    #[serde(default = "default_ping_window_secs")]
    pub ping_window_secs: u64,

    /// Pings per window for server-backed nodes.
    #[serde(default = "default_server_pings_per_window")]
    pub server_pings_per_window: u32,

    /// Seconds between pings for server-backed nodes.
    #[serde(default = "default_server_ping_interval_secs")]
    pub server_ping_interval_secs: u64,

    /// Pings per window for mobile-backed nodes (binary check).
    #[serde(default = "default_mobile_pings_per_window")]
    pub mobile_pings_per_window: u32,

    /// Seconds between pings for mobile-backed nodes.
    #[serde(default = "default_mobile_ping_interval_secs")]
    pub mobile_ping_interval_secs: u64,

    /// Maximum mobile devices probed per node; extras are ignored.
    #[serde(default = "default_mobile_device_limit")]
    pub mobile_device_limit: usize,

    /// Activation amount at or above which a server node is tiered Super.
    #[serde(default = "default_super_tier_activation")]
    pub super_tier_activation: u64,

    /// Required ping success rate for Super-tier nodes.
    #[serde(default = "default_super_success_rate")]
    pub super_success_rate: f64,

    /// Required ping success rate for Full-tier nodes.
    #[serde(default = "default_full_success_rate")]
    pub full_success_rate: f64,

    /// Required ping success rate for Light-tier (mobile) nodes.
    #[serde(default = "default_mobile_success_rate")]
    pub mobile_success_rate: f64,

    // ── Registration ─────────────────────────────────────────────────────
    /// Reputation assigned to a freshly registered node.
    #[serde(default = "default_initial_reputation")]
    pub initial_reputation: f64,

    /// Default staleness bound for `list_active` callers that have no
    /// window of their own (one observation window).
    #[serde(default = "default_max_inactive_secs")]
    pub default_max_inactive_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_initial_reward() -> u64 {
    16_384
}

fn default_emission_total_blocks() -> u64 {
    525_600
}

fn default_min_reward() -> u64 {
    32
}

fn default_total_supply() -> u64 {
    1 << 32
}

fn default_ping_window_secs() -> u64 {
    4 * 3600
}

fn default_server_pings_per_window() -> u32 {
    60
}

fn default_server_ping_interval_secs() -> u64 {
    240
}

fn default_mobile_pings_per_window() -> u32 {
    1
}

fn default_mobile_ping_interval_secs() -> u64 {
    4 * 3600
}

fn default_mobile_device_limit() -> usize {
    3
}

fn default_super_tier_activation() -> u64 {
    10_000
}

fn default_super_success_rate() -> f64 {
    0.98
}

fn default_full_success_rate() -> f64 {
    0.95
}

fn default_mobile_success_rate() -> f64 {
    1.0
}

fn default_initial_reputation() -> f64 {
    1.0
}

fn default_max_inactive_secs() -> u64 {
    4 * 3600
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ProtocolParams {
    /// QNet mainnet defaults — the intended configuration for the live
    /// network.
    pub fn qnet_defaults() -> Self {
        Self {
            initial_reward: default_initial_reward(),
            emission_total_blocks: default_emission_total_blocks(),
            min_reward: default_min_reward(),
            total_supply: default_total_supply(),

            ping_window_secs: default_ping_window_secs(),
            server_pings_per_window: default_server_pings_per_window(),
            server_ping_interval_secs: default_server_ping_interval_secs(),
            mobile_pings_per_window: default_mobile_pings_per_window(),
            mobile_ping_interval_secs: default_mobile_ping_interval_secs(),
            mobile_device_limit: default_mobile_device_limit(),
            super_tier_activation: default_super_tier_activation(),
            super_success_rate: default_super_success_rate(),
            full_success_rate: default_full_success_rate(),
            mobile_success_rate: default_mobile_success_rate(),

            initial_reputation: default_initial_reputation(),
            default_max_inactive_secs: default_max_inactive_secs(),
        }
    }

    /// Load parameters from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, QnetError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| QnetError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse parameters from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, QnetError> {
        toml::from_str(s).map_err(|e| QnetError::Config(e.to_string()))
    }

    /// Serialize the parameters to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ProtocolParams is always serializable to TOML")
    }
}

/// Default is the QNet mainnet configuration.
impl Default for ProtocolParams {
    fn default() -> Self {
        Self::qnet_defaults()
    }
}
