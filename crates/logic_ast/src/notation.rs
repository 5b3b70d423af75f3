//! Notation symbol tables.
//!
//! A notation selects the operator characters used both when parsing and when
//! printing normal forms. All notations share the same prefix layout: negation
//! and quantifiers are written before their operand, binary connectives are
//! fully parenthesized.

use crate::formula::{BinaryOp, Quantifier};

/// Named symbol table for one notation.
#[derive(Debug, PartialEq, Eq)]
pub struct Notation {
    pub name: &'static str,
    pub not: &'static str,
    pub and: &'static str,
    pub or: &'static str,
    pub ifthen: &'static str,
    pub iff: &'static str,
    pub falsum: &'static str,
    pub forall: &'static str,
    pub exists: &'static str,
}

pub static CAMBRIDGE: Notation = Notation {
    name: "cambridge",
    not: "¬",
    and: "∧",
    or: "∨",
    ifthen: "→",
    iff: "↔",
    falsum: "⊥",
    forall: "∀",
    exists: "∃",
};

pub static HARDEGREE: Notation = Notation {
    name: "hardegree",
    not: "~",
    and: "&",
    or: "∨",
    ifthen: "→",
    iff: "↔",
    falsum: "✖",
    forall: "∀",
    exists: "∃",
};

pub static BERGMANN: Notation = Notation {
    name: "bergmann",
    not: "~",
    and: "&",
    or: "∨",
    ifthen: "⊃",
    iff: "≡",
    falsum: "⊥",
    forall: "∀",
    exists: "∃",
};

/// Every built-in notation, default first.
pub static NOTATIONS: [&Notation; 3] = [&CAMBRIDGE, &HARDEGREE, &BERGMANN];

impl Notation {
    /// Look up a built-in notation by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Notation> {
        NOTATIONS
            .iter()
            .copied()
            .find(|n| n.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The notation used when a caller does not pick one.
    pub fn default_notation() -> &'static Notation {
        &CAMBRIDGE
    }

    pub fn binary_symbol(&self, op: BinaryOp) -> &'static str {
        match op {
            BinaryOp::And => self.and,
            BinaryOp::Or => self.or,
            BinaryOp::IfThen => self.ifthen,
            BinaryOp::Iff => self.iff,
        }
    }

    pub fn quantifier_symbol(&self, quantifier: Quantifier) -> &'static str {
        match quantifier {
            Quantifier::Forall => self.forall,
            Quantifier::Exists => self.exists,
        }
    }

    /// Printed prefix binding `var`, e.g. `∀x`.
    pub fn quantifier_prefix(&self, var: char, quantifier: Quantifier) -> String {
        format!("{}{}", self.quantifier_symbol(quantifier), var)
    }

    pub fn universal_prefix(&self, var: char) -> String {
        self.quantifier_prefix(var, Quantifier::Forall)
    }

    pub fn existential_prefix(&self, var: char) -> String {
        self.quantifier_prefix(var, Quantifier::Exists)
    }

    /// Map a symbol back to its quantifier, if it is one.
    pub fn quantifier_for(&self, symbol: &str) -> Option<Quantifier> {
        if symbol == self.forall {
            Some(Quantifier::Forall)
        } else if symbol == self.exists {
            Some(Quantifier::Exists)
        } else {
            None
        }
    }

    /// Map a symbol back to its binary connective, if it is one.
    pub fn binary_op_for(&self, symbol: &str) -> Option<BinaryOp> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| self.binary_symbol(*op) == symbol)
    }

    pub fn is_quantifier(&self, symbol: &str) -> bool {
        self.quantifier_for(symbol).is_some()
    }

    pub fn is_binary_op(&self, symbol: &str) -> bool {
        self.binary_op_for(symbol).is_some()
    }
}
