//! Game position wrapper over the `chess` board library

use std::str::FromStr;

use chess::{Board, BoardStatus, Color, File, Piece, Rank, Square};

use crate::error::{RulesError, RulesResult};
use crate::moves::MoveRecord;

/// A full game state: board, side to move, castling and en-passant rights,
/// plus the counters the board library does not track itself.
///
/// Positions are copy-on-write: `apply` validates and returns a new
/// `Position`, the original is never mutated. Every recursive search step
/// works on its own copy.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    /// Half-moves played since the start of the game. Drives the phase
    /// heuristics (opening < 10/20, middlegame [20, 40), endgame >= 40).
    ply: u32,
    /// Half-moves since the last capture or pawn move (fifty-move rule).
    halfmove_clock: u32,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            ply: 0,
            halfmove_clock: 0,
        }
    }

    /// Parses a FEN string. The half-move clock and full-move number are
    /// optional and default to a fresh game.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let board = Board::from_str(fen).map_err(|_| RulesError::InvalidFen(fen.to_string()))?;

        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(RulesError::InvalidFen(fen.to_string()));
        }
        let halfmove_clock = fields
            .get(4)
            .and_then(|f| f.parse::<u32>().ok())
            .unwrap_or(0);
        let fullmove = fields
            .get(5)
            .and_then(|f| f.parse::<u32>().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(1);
        let ply = (fullmove - 1) * 2 + u32::from(board.side_to_move() == Color::Black);

        Ok(Self {
            board,
            ply,
            halfmove_clock,
        })
    }

    /// The underlying board. Exposed for the sibling modules in this crate;
    /// engines should stay on the `Position`/`MoveRecord` surface.
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    /// Half-moves played since the start of the game.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Half-moves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        match (self.board.piece_on(sq), self.board.color_on(sq)) {
            (Some(piece), Some(color)) => Some((piece, color)),
            _ => None,
        }
    }

    /// Applies a move, returning the resulting position.
    ///
    /// Fails with `IllegalMove` when the move is not legal here. The search
    /// only submits moves it just enumerated, so an error is a contract
    /// violation to surface, not a condition to recover from.
    pub fn apply(&self, mv: &MoveRecord) -> RulesResult<Position> {
        if !self.board.legal(mv.inner()) {
            return Err(RulesError::IllegalMove {
                notation: mv.notation.clone(),
                key: self.key(),
            });
        }

        let is_pawn_move = self.board.piece_on(mv.from()) == Some(Piece::Pawn);
        let board = self.board.make_move_new(mv.inner());

        Ok(Position {
            board,
            ply: self.ply + 1,
            halfmove_clock: if mv.is_capture() || is_pawn_move {
                0
            } else {
                self.halfmove_clock + 1
            },
        })
    }

    /// Canonical key: the first four FEN fields. Sensitive to castling and
    /// en-passant rights, not just piece placement; the move counters are
    /// deliberately excluded so transpositions share a key.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
                match self.piece_at(sq) {
                    Some((piece, color)) => {
                        if empty > 0 {
                            key.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        key.push_str(&piece.to_string(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                key.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                key.push('/');
            }
        }

        key.push(' ');
        key.push(match self.turn() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        key.push(' ');
        let white = self.board.castle_rights(Color::White);
        let black = self.board.castle_rights(Color::Black);
        if white.has_kingside() {
            key.push('K');
        }
        if white.has_queenside() {
            key.push('Q');
        }
        if black.has_kingside() {
            key.push('k');
        }
        if black.has_queenside() {
            key.push('q');
        }
        if !(white.has_kingside()
            || white.has_queenside()
            || black.has_kingside()
            || black.has_queenside())
        {
            key.push('-');
        }

        key.push(' ');
        // The board library records an en-passant square only when a capture
        // is actually available; the key inherits that convention.
        match self
            .board
            .en_passant()
            .and_then(|sq| sq.forward(self.turn()))
        {
            Some(target) => key.push_str(&target.to_string()),
            None => key.push('-'),
        }

        key
    }

    pub fn in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Fifty-move rule or insufficient mating material. Threefold repetition
    /// needs the game history and is detected by the game layer that owns it.
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.insufficient_material()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing || self.is_draw()
    }

    fn insufficient_material(&self) -> bool {
        let heavy = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if heavy.popcnt() > 0 {
            return false;
        }
        let minors = *self.board.pieces(Piece::Knight) | *self.board.pieces(Piece::Bishop);
        minors.popcnt() <= 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
