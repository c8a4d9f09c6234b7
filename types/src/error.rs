//! Types-level errors.

use thiserror::Error;

/// Errors raised by the fundamental types themselves.
#[derive(Debug, Error)]
pub enum QnetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed node identifier: {0}")]
    InvalidNodeId(String),
}
