//! Deterministic ping-policy selection.

use qnet_types::ProtocolParams;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::policy::{NodeTier, PingPolicy, PingTarget};

/// The registration attributes liveness routing decides from.
///
/// A projection of the registration request — routing never reads the
/// registrar's storage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistrationProfile {
    /// Endpoint URL of a server-backed node, if any.
    pub server_endpoint: Option<String>,
    /// Device identifiers of a mobile-backed node.
    pub mobile_devices: Vec<String>,
    /// Stake/burn amount supplied at registration.
    pub activation_amount: u64,
}

/// Select the ping target, tier, and probing cadence for a registration.
///
/// Pure and side-effect-free. Precedence: a server endpoint wins over mobile
/// devices; a registration with neither cannot be probed and fails with
/// [`RoutingError::NoValidTarget`].
pub fn route(
    profile: &RegistrationProfile,
    params: &ProtocolParams,
) -> Result<PingPolicy, RoutingError> {
    if let Some(endpoint) = profile.server_endpoint.as_deref().filter(|e| !e.is_empty()) {
        let tier = if profile.activation_amount >= params.super_tier_activation {
            NodeTier::Super
        } else {
            NodeTier::Full
        };
        let success_rate_required = match tier {
            NodeTier::Super => params.super_success_rate,
            NodeTier::Full | NodeTier::Light => params.full_success_rate,
        };
        return Ok(PingPolicy {
            target: PingTarget::Server {
                endpoint: endpoint.to_string(),
            },
            tier,
            success_rate_required,
            pings_per_window: params.server_pings_per_window,
            ping_interval_secs: params.server_ping_interval_secs,
        });
    }

    if !profile.mobile_devices.is_empty() {
        // Extra devices beyond the limit are ignored, not an error.
        let devices = profile
            .mobile_devices
            .iter()
            .take(params.mobile_device_limit)
            .cloned()
            .collect();
        return Ok(PingPolicy {
            target: PingTarget::Mobile { devices },
            tier: NodeTier::Light,
            success_rate_required: params.mobile_success_rate,
            pings_per_window: params.mobile_pings_per_window,
            ping_interval_secs: params.mobile_ping_interval_secs,
        });
    }

    Err(RoutingError::NoValidTarget)
}
