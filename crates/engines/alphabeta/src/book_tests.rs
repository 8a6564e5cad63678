use super::*;
use rules_core::Position;

fn play(moves: &[&str]) -> Position {
    let mut pos = Position::startpos();
    for notation in moves {
        let mv = find_move(&pos, notation).unwrap();
        pos = pos.apply(&mv).unwrap();
    }
    pos
}

#[test]
fn embedded_book_loads() {
    let book = OpeningBook::embedded();
    assert!(!book.is_empty());
    assert!(book.contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -"));
}

#[test]
fn lookup_returns_the_repertoire_move() {
    let book = OpeningBook::embedded();
    assert_eq!(
        book.lookup("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -"),
        Some("c7c5")
    );
    assert_eq!(book.lookup("not a key"), None);
}

#[test]
fn recommended_resolves_to_a_legal_move() {
    let book = OpeningBook::embedded();
    let pos = play(&["e2e4"]);
    let mv = book.recommended(&pos).unwrap().unwrap();
    assert_eq!(mv.notation, "c7c5");
}

#[test]
fn recommended_is_absent_outside_the_repertoire() {
    let book = OpeningBook::embedded();
    // 1.d4 leaves the book immediately.
    let pos = play(&["d2d4"]);
    assert!(book.recommended(&pos).unwrap().is_none());
}

#[test]
fn every_embedded_position_follows_the_book_key_format() {
    // Reaching a keyed position through play must reproduce its own key;
    // the en-passant field only appears when a capture is available.
    let book = OpeningBook::embedded();
    let pos = play(&["e2e4", "c7c5", "c2c3", "g8f6", "e4e5", "d7d5"]);
    assert!(pos.key().ends_with(" d6"));
    let mv = book.recommended(&pos).unwrap().unwrap();
    assert_eq!(mv.notation, "e5d6");
    assert!(mv.is_capture());
}

#[test]
fn corrupt_entry_is_reported_not_played() {
    let book = OpeningBook::from_entries([(
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -".to_string(),
        "e8e1".to_string(),
    )]);
    let pos = play(&["e2e4"]);
    assert!(matches!(
        book.recommended(&pos),
        Err(RulesError::MalformedQuery(_))
    ));
}

#[test]
fn from_entries_round_trips() {
    let book = OpeningBook::from_entries([("k".to_string(), "e2e4".to_string())]);
    assert_eq!(book.len(), 1);
    assert!(book.contains("k"));
    assert_eq!(book.lookup("k"), Some("e2e4"));
}
