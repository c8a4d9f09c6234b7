//! Hardware fingerprint — opaque bytes identifying a node's host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque byte sequence characterizing the physical or virtual host a
/// node runs on.
///
/// Collected and hashed by the client; this core only compares fingerprints
/// for equality. One fingerprint may back at most one active registration,
/// which is what stops a single operator from farming identities on one
/// machine.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HardwareFingerprint(Vec<u8>);

impl HardwareFingerprint {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex encoding of the raw bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for HardwareFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.0[..self.0.len().min(4)];
        write!(f, "HardwareFingerprint({}..)", hex::encode(head))
    }
}

impl fmt::Display for HardwareFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Vec<u8>> for HardwareFingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HardwareFingerprint {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
