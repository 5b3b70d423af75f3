//! The recursive rewrite engine.
//!
//! `proliferate` descends the formula tree and returns every normal form it
//! can reach with the rewrites below, deduplicated by string. Rewrites build
//! new trees and recurse on them; they never mutate the input.
//!
//! Negation:
//! - `¬¬A` → `A`
//! - `¬∀vA` → `∃v¬A`, `¬∃vA` → `∀v¬A`
//! - `¬(A∧B)` → `(¬A∨¬B)`, `(A→¬B)`
//! - `¬(A∨B)` → `(¬A∧¬B)`
//! - `¬(A→B)` → `(A∧¬B)`
//! - `¬(A↔B)` → `(¬A↔B)`, `((A∨B)∧¬(A∧B))`
//!
//! Quantifiers: scope shifting over a side the variable is not free in,
//! `∀` over `∧` and `∃` over `∨` distribution, vacuous quantifier removal, and
//! alpha renaming over [`ALPHA_RENAME_CANDIDATES`].
//!
//! Connectives: commutativity (in [`EquivalenceProliferator::combine`]),
//! contraposition, `(¬A→B)` → `(A∨B)`, biconditional unfolding, idempotence,
//! absorption and the contradiction marker.

use crate::guards::{iff_unfold_blocked, ALPHA_RENAME_CANDIDATES, CONTRADICTION_MARKER};
use crate::switcher::{apply_switches, Switches};
use logic_ast::{BinaryOp, Formula, FormulaKind, Quantifier};
use std::collections::BTreeSet;
use tracing::trace;

/// A deduplicated set of normal-form strings.
pub type Closure = BTreeSet<String>;

/// Counters collected over one or more `proliferate` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProliferationStats {
    /// Calls to `proliferate`, including recursive ones.
    pub nodes_visited: usize,
    /// Rewritten trees that were recursed into.
    pub rewrites: usize,
    /// Branches explored under an extra alpha-renaming swap.
    pub alpha_renamings: usize,
    /// Biconditional unfoldings skipped by the anti-cycle guard.
    pub iff_unfolds_blocked: usize,
}

#[derive(Debug, Default)]
pub struct EquivalenceProliferator {
    stats: ProliferationStats,
}

impl EquivalenceProliferator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ProliferationStats {
        &self.stats
    }

    /// Everything reachable from `formula` by the rewrite rules, printed under
    /// `switches`.
    pub fn proliferate(&mut self, formula: &Formula, switches: &Switches) -> Closure {
        self.stats.nodes_visited += 1;
        trace!(formula = %formula, switches = switches.len(), "proliferate");

        match formula.kind() {
            FormulaKind::Atomic { .. } => self.literal(formula, switches),
            FormulaKind::Falsum => Closure::from([formula.normal().to_string()]),
            FormulaKind::Not(operand) => self.negation(formula, operand, switches),
            FormulaKind::Binary(op, left, right) => self.binary(*op, left, right, switches),
            FormulaKind::Quantified(quantifier, var, body) => {
                self.quantified(formula, *quantifier, *var, body, switches)
            }
        }
    }

    // Atomic formulas and their negations only get renamed.
    fn literal(&self, formula: &Formula, switches: &Switches) -> Closure {
        Closure::from([apply_switches(formula.normal(), switches)])
    }

    fn rewrite(&mut self, rewritten: &Formula, switches: &Switches) -> Closure {
        self.stats.rewrites += 1;
        self.proliferate(rewritten, switches)
    }

    fn negation(&mut self, formula: &Formula, operand: &Formula, switches: &Switches) -> Closure {
        if operand.is_atomic() || operand.is_falsum() {
            return self.literal(formula, switches);
        }

        let not = formula.notation().not;
        let mut out: Closure = self
            .proliferate(operand, switches)
            .into_iter()
            .map(|e| format!("{not}{e}"))
            .collect();

        match operand.kind() {
            FormulaKind::Not(inner) => {
                out.extend(self.proliferate(inner, switches));
            }
            FormulaKind::Quantified(quantifier, var, body) => {
                let pushed = Formula::quantified(
                    quantifier.dual(),
                    *var,
                    Formula::negation(body.clone()),
                );
                out.extend(self.rewrite(&pushed, switches));
            }
            FormulaKind::Binary(BinaryOp::And, l, r) => {
                let de_morgan = Formula::or(neg(l), neg(r));
                out.extend(self.rewrite(&de_morgan, switches));
                let conditional = Formula::if_then(l.clone(), neg(r));
                out.extend(self.rewrite(&conditional, switches));
            }
            FormulaKind::Binary(BinaryOp::Or, l, r) => {
                let de_morgan = Formula::and(neg(l), neg(r));
                out.extend(self.rewrite(&de_morgan, switches));
            }
            FormulaKind::Binary(BinaryOp::IfThen, l, r) => {
                let counterexample = Formula::and(l.clone(), neg(r));
                out.extend(self.rewrite(&counterexample, switches));
            }
            FormulaKind::Binary(BinaryOp::Iff, l, r) => {
                let flipped = Formula::iff(neg(l), r.clone());
                out.extend(self.rewrite(&flipped, switches));
                let either = Formula::or(l.clone(), r.clone());
                let not_both = Formula::negation(Formula::and(l.clone(), r.clone()));
                out.extend(self.combine(&either, &not_both, BinaryOp::And, switches));
            }
            FormulaKind::Atomic { .. } | FormulaKind::Falsum => {}
        }

        out
    }

    fn quantified(
        &mut self,
        formula: &Formula,
        quantifier: Quantifier,
        var: char,
        body: &Formula,
        switches: &Switches,
    ) -> Closure {
        let prefix = formula
            .notation()
            .quantifier_prefix(switches.apply_char(var), quantifier);
        let mut out: Closure = self
            .proliferate(body, switches)
            .into_iter()
            .map(|e| format!("{prefix}{e}"))
            .collect();

        if let FormulaKind::Binary(op, left, right) = body.kind() {
            let op = *op;

            // Qv(A op B) with v not free in A → A op QvB
            if !left.has_free(var) {
                let shifted = Formula::binary(
                    op,
                    left.clone(),
                    Formula::quantified(quantifier, var, right.clone()),
                );
                out.extend(self.rewrite(&shifted, switches));
            }

            // Qv(A op B) with v not free in B → QvA op B, with the dual
            // quantifier when A is an antecedent.
            if !right.has_free(var) {
                let outer = if op == BinaryOp::IfThen {
                    quantifier.dual()
                } else {
                    quantifier
                };
                let shifted = Formula::binary(
                    op,
                    Formula::quantified(outer, var, left.clone()),
                    right.clone(),
                );
                out.extend(self.rewrite(&shifted, switches));
            }

            // Only ∀ over ∧ and ∃ over ∨.
            let distributes = matches!(
                (quantifier, op),
                (Quantifier::Forall, BinaryOp::And) | (Quantifier::Exists, BinaryOp::Or)
            );
            if distributes {
                let distributed = Formula::binary(
                    op,
                    Formula::quantified(quantifier, var, left.clone()),
                    Formula::quantified(quantifier, var, right.clone()),
                );
                out.extend(self.rewrite(&distributed, switches));
            }
        }

        if !body.has_free(var) {
            out.extend(self.proliferate(body, switches));
        }

        if !switches.contains(var) {
            for candidate in ALPHA_RENAME_CANDIDATES {
                if candidate == var || switches.contains(candidate) || formula.has_free(candidate)
                {
                    continue;
                }
                self.stats.alpha_renamings += 1;
                let renamed = switches.with_swap(var, candidate);
                out.extend(self.proliferate(formula, &renamed));
            }
        }

        out
    }

    fn binary(
        &mut self,
        op: BinaryOp,
        left: &Formula,
        right: &Formula,
        switches: &Switches,
    ) -> Closure {
        let mut out = self.combine(left, right, op, switches);

        match op {
            BinaryOp::IfThen => {
                if let Some(antecedent) = left.negated() {
                    out.extend(self.combine(antecedent, right, BinaryOp::Or, switches));
                    // ¬A→A ≡ A
                    if antecedent.normal() == right.normal() {
                        out.extend(self.proliferate(right, switches));
                    }
                }
                out.extend(self.combine(&neg(right), &neg(left), BinaryOp::IfThen, switches));
                // A→¬A ≡ ¬A
                if let Some(consequent) = right.negated() {
                    if left.normal() == consequent.normal() {
                        out.extend(self.proliferate(right, switches));
                    }
                }
            }
            BinaryOp::Iff => {
                if let Some(inner) = left.negated() {
                    out.extend(self.combine(inner, &neg(right), BinaryOp::Iff, switches));
                }
                if iff_unfold_blocked(left, right) {
                    self.stats.iff_unfolds_blocked += 1;
                } else {
                    let both_ways = Formula::and(
                        Formula::if_then(left.clone(), right.clone()),
                        Formula::if_then(right.clone(), left.clone()),
                    );
                    out.extend(self.rewrite(&both_ways, switches));
                    let same_value = Formula::or(
                        Formula::and(left.clone(), right.clone()),
                        Formula::negation(Formula::or(left.clone(), right.clone())),
                    );
                    out.extend(self.rewrite(&same_value, switches));
                }
            }
            BinaryOp::And | BinaryOp::Or => {
                if left.normal() == right.normal() {
                    out.extend(self.proliferate(left, switches));
                }
            }
        }

        if op == BinaryOp::And {
            if let Some(negated) = right.negated() {
                if left.normal() == negated.normal() {
                    out.insert(CONTRADICTION_MARKER.to_string());
                }
            }
        }

        out
    }
}

fn neg(formula: &Formula) -> Formula {
    Formula::negation(formula.clone())
}

/// Closure of `formula` with no renaming in effect.
pub fn equivalents(formula: &Formula) -> Closure {
    EquivalenceProliferator::new().proliferate(formula, &Switches::new())
}
