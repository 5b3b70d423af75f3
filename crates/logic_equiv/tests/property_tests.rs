use logic_ast::{Formula, FormulaKind, CAMBRIDGE};
use logic_equiv::{apply_switches, equivalents, CONTRADICTION_MARKER};
use proptest::prelude::*;

mod strategies;

proptest! {
    // Closures grow quickly with depth; a handful of cases keeps this fast.
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_reflexivity(f in strategies::arb_formula()) {
        let closure = equivalents(&f);
        prop_assert!(closure.contains(f.normal()), "{} missing from its closure", f);
    }

    #[test]
    fn test_commutative_members_come_in_pairs(f in strategies::arb_formula()) {
        let closure = equivalents(&f);
        for member in &closure {
            // The marker is not part of the cambridge grammar.
            let Ok(parsed) = logic_parser::parse(member, &CAMBRIDGE) else {
                continue;
            };
            if let FormulaKind::Binary(op, l, r) = parsed.kind() {
                if op.is_commutative() {
                    let swapped = Formula::binary(*op, r.clone(), l.clone());
                    prop_assert!(
                        closure.contains(swapped.normal()),
                        "{} in closure of {} but {} is not",
                        member,
                        f,
                        swapped
                    );
                }
            }
        }
    }

    #[test]
    fn test_double_negation_covers_operand(f in strategies::arb_formula()) {
        let doubled = Formula::negation(Formula::negation(f.clone()));
        let outer = equivalents(&doubled);
        prop_assert!(outer.is_superset(&equivalents(&f)));
        prop_assert!(outer.contains(doubled.normal()));
    }

    #[test]
    fn test_idempotent_conjunction_covers_operand(f in strategies::arb_formula()) {
        let doubled = Formula::and(f.clone(), f.clone());
        let outer = equivalents(&doubled);
        prop_assert!(outer.is_superset(&equivalents(&f)));
    }

    #[test]
    fn test_contradiction_marker(f in strategies::arb_formula()) {
        let contradiction = Formula::and(f.clone(), Formula::negation(f));
        prop_assert!(equivalents(&contradiction).contains(CONTRADICTION_MARKER));
    }

    #[test]
    fn test_switches_are_an_involution(
        text in strategies::arb_text(),
        switches in strategies::arb_switches(),
    ) {
        let once = apply_switches(&text, &switches);
        prop_assert_eq!(apply_switches(&once, &switches), text);
    }
}
