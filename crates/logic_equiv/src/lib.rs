//! Rule-bounded equivalence closures.
//!
//! [`EquivalenceProliferator`] walks a [`logic_ast::Formula`] and collects the
//! normal forms reachable through a fixed set of equivalence rewrites. The
//! result is not a decision procedure: formulas outside the rule set's reach
//! are simply absent from the closure.

pub mod combine;
pub mod guards;
pub mod proliferator;
pub mod switcher;

pub use guards::{ALPHA_RENAME_CANDIDATES, CONTRADICTION_MARKER};
pub use proliferator::{equivalents, Closure, EquivalenceProliferator, ProliferationStats};
pub use switcher::{apply_switches, Switches, PLACEHOLDER_OFFSET};
