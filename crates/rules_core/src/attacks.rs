//! Attack-count queries for the evaluator
//!
//! Built on the board library's attack tables rather than legal-move lists:
//! a legal move never lands on an own-occupied square, so move lists cannot
//! see defenders. Attack sets can.

use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Color, Piece, Square, ALL_SQUARES, EMPTY,
};

use crate::position::Position;

/// Squares attacked (or defended) by the piece on `sq`, ignoring whose turn
/// it is. Slider attacks stop at and include the first occupant.
fn attacks_from(piece: Piece, sq: Square, color: Color, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => get_pawn_attacks(sq, color, !EMPTY),
        Piece::Knight => get_knight_moves(sq),
        Piece::Bishop => get_bishop_moves(sq, occupied),
        Piece::Rook => get_rook_moves(sq, occupied),
        Piece::Queen => get_bishop_moves(sq, occupied) | get_rook_moves(sq, occupied),
        Piece::King => get_king_moves(sq),
    }
}

/// Per-square attacker counts for both colors, indexed by square then color.
///
/// A piece "attacking" the square it could capture on and "defending" an
/// own piece standing there are the same entry seen from different sides.
pub fn attack_counts(pos: &Position) -> [[u8; 2]; 64] {
    let board = pos.board();
    let occupied = *board.combined();
    let mut counts = [[0u8; 2]; 64];

    for sq in ALL_SQUARES {
        let (piece, color) = match pos.piece_at(sq) {
            Some(pc) => pc,
            None => continue,
        };
        for target in attacks_from(piece, sq, color, occupied) {
            counts[target.to_index()][color.to_index()] += 1;
        }
    }

    counts
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
