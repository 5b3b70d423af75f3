use logic_ast::{Formula, CAMBRIDGE};
use logic_equiv::Switches;
use proptest::prelude::*;

fn atomic(predicate: char, terms: &[char]) -> Formula {
    Formula::atomic(predicate, terms, &CAMBRIDGE).unwrap()
}

pub fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        // Sentence letters
        prop::sample::select(vec!['P', 'Q', 'R']).prop_map(|p| atomic(p, &[])),
        // Monadic predicates over a constant or a variable
        (
            prop::sample::select(vec!['F', 'G']),
            prop::sample::select(vec!['a', 'x', 'y']),
        )
            .prop_map(|(p, t)| atomic(p, &[t])),
        Just(Formula::falsum(&CAMBRIDGE)),
    ];

    leaf.prop_recursive(
        2, // levels deep
        8, // max size
        2, // items per collection
        |inner| {
            prop_oneof![
                inner.clone().prop_map(Formula::negation),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::and(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::or(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::if_then(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::iff(l, r)),
                (prop::sample::select(vec!['x', 'y']), inner.clone())
                    .prop_map(|(v, b)| Formula::forall(v, b)),
                (prop::sample::select(vec!['x', 'y']), inner.clone())
                    .prop_map(|(v, b)| Formula::exists(v, b)),
            ]
        },
    )
}

/// Up to three disjoint swap pairs over the variable letters.
pub fn arb_switches() -> impl Strategy<Value = Switches> {
    (
        Just(vec!['u', 'v', 'w', 'x', 'y', 'z']).prop_shuffle(),
        0usize..=3,
    )
        .prop_map(|(vars, pairs)| {
            vars.chunks(2)
                .take(pairs)
                .fold(Switches::new(), |acc, pair| acc.with_swap(pair[0], pair[1]))
        })
}

/// Formula-like text over the variables and a few symbols.
pub fn arb_text() -> impl Strategy<Value = String> {
    "[FGRabuvwxyz∀∃¬∧()]{0,16}"
}
