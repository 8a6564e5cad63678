use super::*;
use crate::position::Position;

#[test]
fn startpos_has_twenty_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| m.color == Color::White));
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert!(moves.iter().any(|m| m.notation == "e2e4"));
}

#[test]
fn capture_record_carries_victim_kind() {
    let pos = Position::from_fen("7k/8/8/3q4/8/8/8/3R3K w - - 0 1").unwrap();
    let capture = legal_moves(&pos)
        .into_iter()
        .find(|m| m.notation == "d1d5")
        .expect("rook takes queen is legal");
    assert_eq!(capture.captured, Some(Piece::Queen));
    assert_eq!(capture.piece, Piece::Rook);
    assert!(capture.is_capture());
}

#[test]
fn en_passant_records_a_pawn_capture() {
    let mut pos = Position::startpos();
    for notation in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        let mv = find_move(&pos, notation).unwrap();
        pos = pos.apply(&mv).unwrap();
    }
    let ep = find_move(&pos, "e5d6").expect("exd6 en passant is legal");
    assert_eq!(ep.captured, Some(Piece::Pawn));
    assert!(ep.is_capture());
}

#[test]
fn checking_move_is_flagged() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mate = find_move(&pos, "e1e8").expect("Qe8 is legal");
    assert!(mate.gives_check);

    let quiet = find_move(&pos, "g1f1").expect("Kf1 is legal");
    assert!(!quiet.gives_check);
}

#[test]
fn promotion_notation_carries_piece_letter() {
    let pos = Position::from_fen("8/4P2k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let notations: Vec<String> = legal_moves(&pos).into_iter().map(|m| m.notation).collect();
    assert!(notations.contains(&"e7e8q".to_string()));
    assert!(notations.contains(&"e7e8n".to_string()));
}

#[test]
fn off_turn_moves_come_through_a_null_move() {
    let pos = Position::startpos();
    let black = moves_for(&pos, Color::Black).expect("white is not in check");
    assert_eq!(black.len(), 20);
    assert!(black.iter().all(|m| m.color == Color::Black));
}

#[test]
fn off_turn_moves_unavailable_while_in_check() {
    let pos = Position::from_fen("4k3/8/8/8/7b/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.in_check());
    assert!(moves_for(&pos, Color::Black).is_none());
    // The checked side's own list is still the legal list.
    assert!(moves_for(&pos, Color::White).is_some());
}

#[test]
fn find_move_resolves_notation() {
    let pos = Position::startpos();
    assert!(find_move(&pos, "g1f3").is_some());
    assert!(find_move(&pos, "e2e5").is_none());
    assert!(find_move(&pos, "nonsense").is_none());
}
