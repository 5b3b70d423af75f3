//! Cached access to equivalence closures.
//!
//! [`EquivalenceStore`] looks closures up by `(notation, formula)` in an
//! injected [`StorageBackend`] and computes them with
//! [`logic_equiv::EquivalenceProliferator`] on a miss.

pub mod backend;
pub mod config;
pub mod error;
pub mod file_backend;
pub mod store;

pub use backend::{CacheKey, MemoryBackend, StorageBackend};
pub use config::{BackendKind, StoreConfig};
pub use error::{ConfigError, StoreError};
pub use file_backend::FileBackend;
pub use store::EquivalenceStore;
