//! Verbose move records and move resolution

use chess::{Board, ChessMove, Color, MoveGen, Piece, Square};

use crate::position::Position;

/// A legal move in verbose form: everything the engine layers need without
/// going back to the board (capture and check flags, notation for book
/// matching and display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    inner: ChessMove,
    /// Side making the move.
    pub color: Color,
    /// Kind of the moving piece.
    pub piece: Piece,
    /// Kind of the captured piece, if any (en passant records a pawn).
    pub captured: Option<Piece>,
    /// Whether the move gives check.
    pub gives_check: bool,
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub notation: String,
}

impl MoveRecord {
    pub(crate) fn inner(&self) -> ChessMove {
        self.inner
    }

    pub fn from(&self) -> Square {
        self.inner.get_source()
    }

    pub fn to(&self) -> Square {
        self.inner.get_dest()
    }

    pub fn promotion(&self) -> Option<Piece> {
        self.inner.get_promotion()
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Coordinate notation for a move (`e2e4`, `e7e8q`).
fn coordinate_notation(mv: ChessMove) -> String {
    let mut s = format!("{}{}", mv.get_source(), mv.get_dest());
    if let Some(promo) = mv.get_promotion() {
        s.push(match promo {
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        });
    }
    s
}

fn records_for_board(board: &Board) -> Vec<MoveRecord> {
    let color = board.side_to_move();
    let mut out = Vec::with_capacity(64);

    for mv in MoveGen::new_legal(board) {
        let piece = match board.piece_on(mv.get_source()) {
            Some(p) => p,
            None => continue, // unreachable for a legal move
        };

        let dest_piece = board.piece_on(mv.get_dest());
        let captured = if dest_piece.is_none()
            && piece == Piece::Pawn
            && mv.get_source().get_file() != mv.get_dest().get_file()
        {
            Some(Piece::Pawn) // en passant
        } else {
            dest_piece
        };

        let gives_check = board.make_move_new(mv).checkers().popcnt() > 0;

        out.push(MoveRecord {
            inner: mv,
            color,
            piece,
            captured,
            gives_check,
            notation: coordinate_notation(mv),
        });
    }

    out
}

/// All legal moves for the side to move, in generation order.
pub fn legal_moves(pos: &Position) -> Vec<MoveRecord> {
    records_for_board(pos.board())
}

/// Legal moves for either side. The off-turn list is generated through a
/// null move and is unavailable (`None`) while the side to move is in check.
pub fn moves_for(pos: &Position, color: Color) -> Option<Vec<MoveRecord>> {
    if color == pos.turn() {
        Some(legal_moves(pos))
    } else {
        pos.board()
            .null_move()
            .map(|flipped| records_for_board(&flipped))
    }
}

/// Resolves coordinate notation against the legal-move list, so flags
/// (capture, check, en passant) come out correct.
pub fn find_move(pos: &Position, notation: &str) -> Option<MoveRecord> {
    legal_moves(pos).into_iter().find(|m| m.notation == notation)
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
