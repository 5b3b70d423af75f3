use logic_equivalence::{
    equivalents, parse, BackendKind, EquivalenceStore, FileBackend, StoreConfig, CAMBRIDGE,
    HARDEGREE,
};

fn closure(formula: &str) -> Vec<String> {
    let store = EquivalenceStore::in_memory();
    store.load_equivalents(formula, "cambridge").expect("formula should parse")
}

fn assert_equivalent(formula: &str, expected: &str) {
    let list = closure(formula);
    assert!(
        list.iter().any(|e| e == expected),
        "expected {} among equivalents of {}: {:?}",
        expected,
        formula,
        list
    );
}

#[test]
fn test_conjunction_commutes() {
    assert_equivalent("(P∧Q)", "(Q∧P)");
}

#[test]
fn test_double_negation_eliminates() {
    assert_equivalent("¬¬P", "P");
}

#[test]
fn test_de_morgan_over_disjunction() {
    assert_equivalent("¬(P∨Q)", "(¬P∧¬Q)");
}

#[test]
fn test_vacuous_universal_drops() {
    assert_equivalent("∀x(P)", "P");
}

#[test]
fn test_contradiction_is_marked() {
    assert_equivalent("(P∧¬P)", "✖");
}

#[test]
fn test_bound_variable_renames() {
    assert_equivalent("∀xFx", "∀yFy");
}

#[test]
fn test_reference_answer_check() {
    // A student answer matches when its normal form is in the closure of the
    // reference answer.
    let reference = closure("¬∃x(Fx∧Gx)");
    let answer = parse("∀x ¬(Fx ∧ Gx)", &CAMBRIDGE).unwrap();
    assert!(reference.iter().any(|e| e == answer.normal()));

    let wrong = parse("∃x¬(Fx∧Gx)", &CAMBRIDGE).unwrap();
    assert!(!reference.iter().any(|e| e == wrong.normal()));
}

#[test]
fn test_other_notations() {
    let store = EquivalenceStore::in_memory();
    let list = store.load_equivalents("~(P & Q)", "hardegree").unwrap();
    assert!(list.contains(&"(~P∨~Q)".to_string()));
    assert!(list.contains(&"(P→~Q)".to_string()));

    let formula = parse("(P≡Q)", &logic_equivalence::BERGMANN).unwrap();
    let set = equivalents(&formula);
    assert!(set.contains("((P⊃Q)&(Q⊃P))"));

    let hardegree = parse("(P&~P)", &HARDEGREE).unwrap();
    assert!(equivalents(&hardegree).contains("✖"));
}

#[test]
fn test_configured_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("store.toml");
    StoreConfig {
        notation: "cambridge".to_string(),
        backend: BackendKind::File,
        data_root: Some(dir.path().join("data")),
    }
    .save(&config_path)
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    let store = EquivalenceStore::from_config(&config).unwrap();
    let first = store.load("(P→Q)").unwrap();

    let reopened = EquivalenceStore::new(FileBackend::new(dir.path().join("data")));
    assert_eq!(reopened.load("(P→Q)").unwrap(), first);
    assert_eq!(reopened.computations(), 0);
}
