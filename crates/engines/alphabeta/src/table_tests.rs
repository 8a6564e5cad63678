use super::*;

#[test]
fn lookup_on_empty_table_is_absent() {
    let table = TranspositionTable::new();
    assert_eq!(table.lookup("anything", 0), None);
    assert!(table.is_empty());
}

#[test]
fn hit_requires_sufficient_stored_depth() {
    let mut table = TranspositionTable::new();
    table.store("k".to_string(), 3, 42, Bound::Exact);

    // Trusted at the stored depth and anything shallower.
    assert_eq!(table.lookup("k", 3), Some(42));
    assert_eq!(table.lookup("k", 2), Some(42));
    assert_eq!(table.lookup("k", 0), Some(42));
    // A deeper request must re-search.
    assert_eq!(table.lookup("k", 4), None);
}

#[test]
fn store_is_last_write_wins() {
    let mut table = TranspositionTable::new();
    table.store("k".to_string(), 5, 100, Bound::Exact);
    // A shallower write still replaces the deeper entry.
    table.store("k".to_string(), 1, -7, Bound::Lower);

    assert_eq!(table.lookup("k", 1), Some(-7));
    assert_eq!(table.lookup("k", 3), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn bound_kind_does_not_gate_hits() {
    let mut table = TranspositionTable::new();
    table.store("k".to_string(), 2, 9, Bound::Upper);
    // Informational only: an upper bound comes back like an exact score.
    assert_eq!(table.lookup("k", 2), Some(9));
}

#[test]
fn clear_empties_everything() {
    let mut table = TranspositionTable::new();
    table.store("a".to_string(), 1, 1, Bound::Exact);
    table.store("b".to_string(), 2, 2, Bound::Lower);
    assert_eq!(table.len(), 2);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.lookup("a", 0), None);
    assert_eq!(table.lookup("b", 0), None);
}
