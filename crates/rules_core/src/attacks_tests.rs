use super::*;
use crate::position::Position;

fn count(counts: &[[u8; 2]; 64], sq: Square, color: Color) -> u8 {
    counts[sq.to_index()][color.to_index()]
}

#[test]
fn startpos_pawn_attacks_are_symmetric() {
    let counts = attack_counts(&Position::startpos());
    // d3 is covered by the c2 and e2 pawns, d6 by their black mirrors.
    assert_eq!(count(&counts, Square::D3, Color::White), 2);
    assert_eq!(count(&counts, Square::D6, Color::Black), 2);
    // Neither side reaches into the opponent's half yet.
    assert_eq!(count(&counts, Square::D6, Color::White), 0);
    assert_eq!(count(&counts, Square::D3, Color::Black), 0);
}

#[test]
fn defenders_are_visible_unlike_in_move_lists() {
    // Black queen on d5 defended by the d7 rook: no legal black move lands
    // on d5, but the defense must still be counted.
    let pos = Position::from_fen("7k/3r4/8/3q4/8/8/8/3R3K w - - 0 1").unwrap();
    let counts = attack_counts(&pos);
    assert_eq!(count(&counts, Square::D5, Color::White), 1);
    assert_eq!(count(&counts, Square::D5, Color::Black), 1);
}

#[test]
fn sliders_stop_at_the_first_occupant() {
    // The d1 rook's file attack stops on the d5 queen; d7 beyond it is
    // untouched by white.
    let pos = Position::from_fen("7k/3r4/8/3q4/8/8/8/3R3K w - - 0 1").unwrap();
    let counts = attack_counts(&pos);
    assert_eq!(count(&counts, Square::D7, Color::White), 0);
    // The queen still defends its own rook through the open file.
    assert_eq!(count(&counts, Square::D7, Color::Black), 1);
}

#[test]
fn both_colors_are_counted_regardless_of_turn() {
    let pos = Position::startpos();
    let counts = attack_counts(&pos);
    let white_total: u32 = (0..64).map(|i| u32::from(counts[i][0])).sum();
    let black_total: u32 = (0..64).map(|i| u32::from(counts[i][1])).sum();
    assert!(white_total > 0);
    assert_eq!(white_total, black_total);
}
