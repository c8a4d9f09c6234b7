//! Routing errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// Neither a server endpoint nor any mobile device was supplied; the
    /// registration is structurally invalid and liveness cannot be probed.
    #[error("no valid ping target: registration supplies neither server endpoint nor mobile devices")]
    NoValidTarget,
}
