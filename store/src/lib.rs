//! Abstract storage traits for the QNet participation core.
//!
//! Every storage backend (LMDB, RocksDB, in-memory for testing) implements
//! these traits. The registrar depends only on the traits; it never sees a
//! concrete backend.

pub mod error;
pub mod node;

pub use error::StoreError;
pub use node::{NodeRecord, NodeStore};
