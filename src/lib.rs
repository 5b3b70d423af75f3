//! Logical equivalence closures for predicate-logic formulas.
//!
//! ```
//! use logic_equivalence::EquivalenceStore;
//!
//! let store = EquivalenceStore::in_memory();
//! let closure = store.load_equivalents("¬(P∨Q)", "cambridge").unwrap();
//! assert!(closure.contains(&"(¬P∧¬Q)".to_string()));
//! ```

pub use logic_ast::{
    BinaryOp, Formula, FormulaKind, Notation, Quantifier, BERGMANN, CAMBRIDGE, HARDEGREE,
    NOTATIONS,
};
pub use logic_equiv::{
    apply_switches, equivalents, Closure, EquivalenceProliferator, ProliferationStats, Switches,
    CONTRADICTION_MARKER,
};
pub use logic_parser::{parse, ParseError};
pub use logic_store::{
    BackendKind, CacheKey, ConfigError, EquivalenceStore, FileBackend, MemoryBackend,
    StorageBackend, StoreConfig, StoreError,
};
