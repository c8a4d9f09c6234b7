//! Identity registrar for the QNet participation core.
//!
//! The registrar owns the anti-Sybil invariants: one active registration
//! per network address, one active registration per hardware fingerprint,
//! enforced atomically against concurrent registrations. It persists
//! through an injected [`qnet_store::NodeStore`] and never performs I/O of
//! its own.

pub mod error;
pub mod registrar;

pub use error::RegistryError;
pub use registrar::Registrar;
