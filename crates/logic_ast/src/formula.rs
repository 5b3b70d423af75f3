//! Immutable formula trees with cached normal forms.

use crate::error::AstError;
use crate::notation::Notation;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Lowercase letters that act as variables; every other lowercase letter is a
/// constant.
pub const VARIABLES: [char; 6] = ['u', 'v', 'w', 'x', 'y', 'z'];

pub fn is_variable(c: char) -> bool {
    VARIABLES.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    IfThen,
    Iff,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::IfThen,
        BinaryOp::Iff,
    ];

    /// `a op b` and `b op a` are equivalent.
    pub fn is_commutative(self) -> bool {
        !matches!(self, BinaryOp::IfThen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    pub fn dual(self) -> Self {
        match self {
            Quantifier::Forall => Quantifier::Exists,
            Quantifier::Exists => Quantifier::Forall,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaKind {
    /// Predicate letter applied to zero or more terms (`P`, `Fx`, `Rab`).
    Atomic { predicate: char, terms: Vec<char> },
    Falsum,
    Not(Formula),
    Binary(BinaryOp, Formula, Formula),
    Quantified(Quantifier, char, Formula),
}

#[derive(Debug)]
struct Node {
    kind: FormulaKind,
    notation: &'static Notation,
    normal: String,
    free_vars: BTreeSet<char>,
    bound_vars: BTreeSet<char>,
    wellformed: bool,
}

/// A shared, immutable formula node.
///
/// Equality and hashing go through [`Formula::normal`]: structurally different
/// trees that print the same are the same formula as far as this workspace is
/// concerned.
#[derive(Debug, Clone)]
pub struct Formula(Rc<Node>);

impl Formula {
    pub fn atomic(
        predicate: char,
        terms: &[char],
        notation: &'static Notation,
    ) -> Result<Self, AstError> {
        if !predicate.is_ascii_uppercase() {
            return Err(AstError::InvalidPredicate(predicate));
        }
        if let Some(bad) = terms.iter().find(|t| !t.is_ascii_lowercase()) {
            return Err(AstError::InvalidTerm(*bad));
        }

        let mut normal = String::with_capacity(1 + terms.len());
        normal.push(predicate);
        normal.extend(terms.iter());

        Ok(Self(Rc::new(Node {
            kind: FormulaKind::Atomic {
                predicate,
                terms: terms.to_vec(),
            },
            notation,
            normal,
            free_vars: terms.iter().copied().filter(|t| is_variable(*t)).collect(),
            bound_vars: BTreeSet::new(),
            wellformed: true,
        })))
    }

    pub fn falsum(notation: &'static Notation) -> Self {
        Self(Rc::new(Node {
            kind: FormulaKind::Falsum,
            notation,
            normal: notation.falsum.to_string(),
            free_vars: BTreeSet::new(),
            bound_vars: BTreeSet::new(),
            wellformed: true,
        }))
    }

    pub fn negation(operand: Formula) -> Self {
        let notation = operand.notation();
        Self(Rc::new(Node {
            normal: format!("{}{}", notation.not, operand.normal()),
            notation,
            free_vars: operand.0.free_vars.clone(),
            bound_vars: operand.0.bound_vars.clone(),
            wellformed: operand.is_wellformed(),
            kind: FormulaKind::Not(operand),
        }))
    }

    /// Binary node; the notation is taken from `left`.
    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Self {
        let notation = left.notation();
        let normal = format!(
            "({}{}{})",
            left.normal(),
            notation.binary_symbol(op),
            right.normal()
        );
        let free_vars = left.0.free_vars.union(&right.0.free_vars).copied().collect();
        let bound_vars = left
            .0
            .bound_vars
            .union(&right.0.bound_vars)
            .copied()
            .collect();
        let wellformed = left.is_wellformed() && right.is_wellformed();

        Self(Rc::new(Node {
            kind: FormulaKind::Binary(op, left, right),
            notation,
            normal,
            free_vars,
            bound_vars,
            wellformed,
        }))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn if_then(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::IfThen, left, right)
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Iff, left, right)
    }

    /// Quantified node. Binding a non-variable, or re-binding a variable that
    /// the body already binds, yields a formula that is not wellformed.
    pub fn quantified(quantifier: Quantifier, var: char, body: Formula) -> Self {
        let notation = body.notation();
        let normal = format!(
            "{}{}",
            notation.quantifier_prefix(var, quantifier),
            body.normal()
        );
        let mut free_vars = body.0.free_vars.clone();
        free_vars.remove(&var);
        let mut bound_vars = body.0.bound_vars.clone();
        let rebinds = !bound_vars.insert(var);
        let wellformed = is_variable(var) && body.is_wellformed() && !rebinds;

        Self(Rc::new(Node {
            kind: FormulaKind::Quantified(quantifier, var, body),
            notation,
            normal,
            free_vars,
            bound_vars,
            wellformed,
        }))
    }

    pub fn forall(var: char, body: Formula) -> Self {
        Self::quantified(Quantifier::Forall, var, body)
    }

    pub fn exists(var: char, body: Formula) -> Self {
        Self::quantified(Quantifier::Exists, var, body)
    }

    pub fn kind(&self) -> &FormulaKind {
        &self.0.kind
    }

    pub fn notation(&self) -> &'static Notation {
        self.0.notation
    }

    /// Canonical serialization; the identity key of this formula.
    pub fn normal(&self) -> &str {
        &self.0.normal
    }

    pub fn free_vars(&self) -> &BTreeSet<char> {
        &self.0.free_vars
    }

    pub fn has_free(&self, var: char) -> bool {
        self.0.free_vars.contains(&var)
    }

    pub fn is_wellformed(&self) -> bool {
        self.0.wellformed
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.0.kind, FormulaKind::Atomic { .. })
    }

    pub fn is_falsum(&self) -> bool {
        matches!(self.0.kind, FormulaKind::Falsum)
    }

    /// The operand when this is a negation.
    pub fn negated(&self) -> Option<&Formula> {
        match &self.0.kind {
            FormulaKind::Not(operand) => Some(operand),
            _ => None,
        }
    }

    pub fn op(&self) -> Option<BinaryOp> {
        match &self.0.kind {
            FormulaKind::Binary(op, _, _) => Some(*op),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Formula> {
        match &self.0.kind {
            FormulaKind::Binary(_, left, _) => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Formula> {
        match &self.0.kind {
            FormulaKind::Binary(_, _, right) => Some(right),
            _ => None,
        }
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        match &self.0.kind {
            FormulaKind::Quantified(q, _, _) => Some(*q),
            _ => None,
        }
    }

    pub fn bound_var(&self) -> Option<char> {
        match &self.0.kind {
            FormulaKind::Quantified(_, var, _) => Some(*var),
            _ => None,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match &self.0.kind {
            FormulaKind::Atomic { .. } | FormulaKind::Falsum => 1,
            FormulaKind::Not(operand) => 1 + operand.size(),
            FormulaKind::Binary(_, left, right) => 1 + left.size() + right.size(),
            FormulaKind::Quantified(_, _, body) => 1 + body.size(),
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.normal() == other.normal()
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normal().hash(state);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.normal())
    }
}
