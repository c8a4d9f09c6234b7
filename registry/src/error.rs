//! Registrar errors.
//!
//! All of these are permanent outcomes of adversarial or malformed input,
//! reported synchronously — a duplicate registration must never crash the
//! registrar.

use qnet_store::StoreError;
use qnet_types::{HardwareFingerprint, NodeAddress, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("address {0} already holds an active registration")]
    DuplicateAddress(NodeAddress),

    #[error("hardware fingerprint {0} already backs an active registration")]
    DuplicateHardware(HardwareFingerprint),

    #[error("node {0} is unknown or not active")]
    NotFound(NodeId),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
