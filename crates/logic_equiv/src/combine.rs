//! Joining two sub-closures under a binary connective.

use crate::proliferator::{Closure, EquivalenceProliferator};
use crate::switcher::Switches;
use logic_ast::{BinaryOp, Formula};

impl EquivalenceProliferator {
    /// Every `(a op b)` with `a` from the closure of `left` and `b` from the
    /// closure of `right`. Commutative connectives also yield `(b op a)`; this
    /// is the only place commutativity is applied.
    pub fn combine(
        &mut self,
        left: &Formula,
        right: &Formula,
        op: BinaryOp,
        switches: &Switches,
    ) -> Closure {
        let symbol = left.notation().binary_symbol(op);
        let lefts = self.proliferate(left, switches);
        let rights = self.proliferate(right, switches);

        let mut out = Closure::new();
        for a in &lefts {
            for b in &rights {
                out.insert(format!("({a}{symbol}{b})"));
                if op.is_commutative() {
                    out.insert(format!("({b}{symbol}{a})"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logic_ast::CAMBRIDGE;

    fn parse(input: &str) -> Formula {
        logic_parser::parse(input, &CAMBRIDGE).unwrap()
    }

    #[test]
    fn test_cross_product() {
        let mut engine = EquivalenceProliferator::new();
        let out = engine.combine(&parse("¬¬P"), &parse("Q"), BinaryOp::IfThen, &Switches::new());
        assert_eq!(
            out,
            Closure::from(["(P→Q)".to_string(), "(¬¬P→Q)".to_string()])
        );
    }

    #[test]
    fn test_commutative_ops_add_swapped_pairs() {
        let mut engine = EquivalenceProliferator::new();
        let out = engine.combine(&parse("P"), &parse("Q"), BinaryOp::Or, &Switches::new());
        assert_eq!(
            out,
            Closure::from(["(P∨Q)".to_string(), "(Q∨P)".to_string()])
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut engine = EquivalenceProliferator::new();
        let out = engine.combine(&parse("P"), &parse("P"), BinaryOp::And, &Switches::new());
        assert_eq!(out, Closure::from(["(P∧P)".to_string()]));
    }

    #[test]
    fn test_switches_reach_both_sides() {
        let mut engine = EquivalenceProliferator::new();
        let switches = Switches::new().with_swap('x', 'y');
        let out = engine.combine(&parse("Fx"), &parse("Gy"), BinaryOp::IfThen, &switches);
        assert_eq!(out, Closure::from(["(Fy→Gx)".to_string()]));
    }
}
