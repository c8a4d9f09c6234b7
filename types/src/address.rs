//! Network account identifier for a registered node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node's network account identifier.
///
/// Opaque to this core — the chain's address encoding is validated upstream.
/// Uniqueness across all active registrations is enforced by the registrar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeAddress(String);

impl NodeAddress {
    /// Create a node address from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for NodeAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
