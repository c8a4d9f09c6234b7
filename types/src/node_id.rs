//! DID-style node identifier, derived from registration attributes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::address::NodeAddress;
use crate::error::QnetError;
use crate::fingerprint::HardwareFingerprint;

/// A node's decentralized identifier, always prefixed with `did:qnet:`.
///
/// Derived deterministically from the registering address and hardware
/// fingerprint, so the same `(address, fingerprint)` pair always names the
/// same node. The literal `:` separator sits between the raw address bytes
/// and the hex-encoded fingerprint, so distinct pairs cannot concatenate to
/// the same preimage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// The standard prefix for all QNet node identifiers.
    pub const PREFIX: &'static str = "did:qnet:";

    /// Length of the hex-encoded SHA-256 digest after the prefix.
    pub const DIGEST_HEX_LEN: usize = 64;

    /// Derive the identifier for an `(address, fingerprint)` pair.
    pub fn derive(address: &NodeAddress, fingerprint: &HardwareFingerprint) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(address.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(fingerprint.to_hex().as_bytes());
        Self(format!("{}{}", Self::PREFIX, hex::encode(hasher.finalize())))
    }

    /// Parse and validate an identifier received from outside the core.
    pub fn parse(raw: impl Into<String>) -> Result<Self, QnetError> {
        let s = raw.into();
        let id = Self(s);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(QnetError::InvalidNodeId(id.0))
        }
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is well-formed: prefix plus a 64-character
    /// lowercase hex digest.
    pub fn is_valid(&self) -> bool {
        match self.0.strip_prefix(Self::PREFIX) {
            Some(digest) => {
                digest.len() == Self::DIGEST_HEX_LEN
                    && digest
                        .bytes()
                        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
            }
            None => false,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let addr = NodeAddress::new("alice");
        let fp = HardwareFingerprint::new(vec![0xAA, 0xBB]);
        assert_eq!(NodeId::derive(&addr, &fp), NodeId::derive(&addr, &fp));
    }

    #[test]
    fn derive_has_prefix_and_hex_digest() {
        let id = NodeId::derive(
            &NodeAddress::new("alice"),
            &HardwareFingerprint::new(vec![0xAA, 0xBB]),
        );
        assert!(id.as_str().starts_with(NodeId::PREFIX));
        assert_eq!(id.as_str().len(), NodeId::PREFIX.len() + NodeId::DIGEST_HEX_LEN);
        assert!(id.is_valid());
    }

    #[test]
    fn distinct_pairs_get_distinct_ids() {
        let fp = HardwareFingerprint::new(vec![1, 2, 3]);
        let a = NodeId::derive(&NodeAddress::new("alice"), &fp);
        let b = NodeId::derive(&NodeAddress::new("bob"), &fp);
        assert_ne!(a, b);
    }

    #[test]
    fn separator_prevents_concatenation_ambiguity() {
        // "ab" + fp(0xCD) and "a" + fp(0xBC,0xD?) must not collide via the
        // preimage: the separator plus hex encoding keeps them apart.
        let a = NodeId::derive(
            &NodeAddress::new("abc"),
            &HardwareFingerprint::new(vec![0xD0]),
        );
        let b = NodeId::derive(
            &NodeAddress::new("ab"),
            &HardwareFingerprint::new(vec![0xCD, 0x00]),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(NodeId::parse("did:qnet:").is_err());
        assert!(NodeId::parse("did:other:abcd").is_err());
        assert!(NodeId::parse(format!("did:qnet:{}", "Z".repeat(64))).is_err());
        assert!(NodeId::parse(format!("did:qnet:{}", "a".repeat(63))).is_err());
        assert!(NodeId::parse(format!("did:qnet:{}", "a".repeat(64))).is_ok());
    }
}
