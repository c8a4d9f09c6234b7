//! Emission errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmissionError {
    /// A negative height reached the boundary API — a caller bug, never a
    /// transient condition.
    #[error("invalid block height: {0}")]
    InvalidHeight(i64),
}
