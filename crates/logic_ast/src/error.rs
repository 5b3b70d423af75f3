//! Error types for logic_ast crate.

use thiserror::Error;

/// Errors that can occur while building formula nodes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// Predicate letters are uppercase ASCII letters.
    #[error("invalid predicate letter '{0}'")]
    InvalidPredicate(char),

    /// Terms are lowercase ASCII letters (variables or constants).
    #[error("invalid term '{0}'")]
    InvalidTerm(char),
}
