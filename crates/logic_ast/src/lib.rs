//! Formula trees and notation symbol tables.
//!
//! A [`Formula`] is an immutable, `Rc`-shared tree whose canonical string
//! serialization ([`Formula::normal`]) doubles as its identity key: two
//! formulas with equal normal forms are interchangeable, even when their
//! trees were built differently.

pub mod error;
pub mod formula;
pub mod notation;

pub use error::AstError;
pub use formula::{is_variable, BinaryOp, Formula, FormulaKind, Quantifier, VARIABLES};
pub use notation::{Notation, BERGMANN, CAMBRIDGE, HARDEGREE, NOTATIONS};
