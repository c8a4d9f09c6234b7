//! Fundamental types for the QNet participation core.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: node addresses, hardware fingerprints, DID-style node
//! identifiers, timestamps, protocol parameters, and status enums.

pub mod address;
pub mod error;
pub mod fingerprint;
pub mod node_id;
pub mod params;
pub mod state;
pub mod time;

pub use address::NodeAddress;
pub use error::QnetError;
pub use fingerprint::HardwareFingerprint;
pub use node_id::NodeId;
pub use params::ProtocolParams;
pub use state::NodeStatus;
pub use time::Timestamp;
