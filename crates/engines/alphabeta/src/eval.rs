//! Hand-weighted position evaluation
//!
//! `evaluate` is pure and white-positive: positive scores favor White,
//! negative favor Black. The search converts to the side-to-move
//! perspective at the leaves. Purity matters: a hidden counter here would
//! poison both the transposition table and the pruning bounds.

use rules_core::{attack_counts, moves_for, Color, Piece, Position, Square, ALL_SQUARES};

use crate::book::OpeningBook;

/// Magnitude of a checkmate score; dominates any positional total.
pub const CHECKMATE_SCORE: i32 = 100_000;

/// Plies before which developing the queen is discouraged.
const EARLY_QUEEN_PLY: u32 = 10;
/// Plies during which staying in book theory is rewarded.
const OPENING_PLY: u32 = 20;
/// Middlegame window where a material lead encourages trading.
const MIDDLEGAME_PLY: u32 = 20;
/// From here on passed pawns are pushed harder.
const ENDGAME_PLY: u32 = 40;

const DEFENDER_BONUS: i32 = 15;
const CENTER_BONUS: i32 = 30;
const TRAPPED_PENALTY: i32 = 20;
const MOBILITY_CAP: i32 = 20;
const BOOK_THEORY_BONUS: i32 = 50;
const PASSED_PAWN_STEP: i32 = 50;
const PASSED_PAWN_STEP_ENDGAME: i32 = 80;
const DOUBLED_PAWN_PENALTY: i32 = 30;
const ISOLATED_PAWN_PENALTY: i32 = 20;

/// The ten-square core the engine fights over.
const CENTER_SQUARES: [Square; 10] = [
    Square::C4,
    Square::C5,
    Square::D3,
    Square::D4,
    Square::D5,
    Square::D6,
    Square::E3,
    Square::E4,
    Square::E5,
    Square::E6,
];

/// Material value in centipawns. The king carries no material value; its
/// loss is expressed through the checkmate score instead.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    }
}

fn is_center(sq: Square) -> bool {
    CENTER_SQUARES.contains(&sq)
}

/// Legal-move counts per origin square, per color. The off-turn side is
/// probed through a null move; while the mover is in check that list is
/// unavailable and its mobility terms are skipped.
fn mobility_counts(pos: &Position) -> [Option<[u8; 64]>; 2] {
    let mut out = [None, None];
    for color in [Color::White, Color::Black] {
        if let Some(moves) = moves_for(pos, color) {
            let mut counts = [0u8; 64];
            for mv in &moves {
                counts[mv.from().to_index()] += 1;
            }
            out[color.to_index()] = Some(counts);
        }
    }
    out
}

/// Pawn-structure score for one color: passed pawns scaled by how far they
/// have come, penalties for doubled and isolated pawns. `(file, rank)`
/// pairs use 0-based indices.
fn pawn_structure(
    own: &[(usize, usize)],
    enemy: &[(usize, usize)],
    color: Color,
    endgame: bool,
) -> i32 {
    let mut score = 0;
    let step = if endgame {
        PASSED_PAWN_STEP_ENDGAME
    } else {
        PASSED_PAWN_STEP
    };

    for &(file, rank) in own {
        let blocked = enemy.iter().any(|&(ef, er)| {
            ef.abs_diff(file) <= 1
                && match color {
                    Color::White => er > rank,
                    Color::Black => er < rank,
                }
        });
        if !blocked {
            let progress = match color {
                Color::White => rank.saturating_sub(1),
                Color::Black => 6usize.saturating_sub(rank),
            };
            score += progress as i32 * step;
        }

        if own
            .iter()
            .all(|&(of, _)| of != file + 1 && (file == 0 || of != file - 1))
        {
            score -= ISOLATED_PAWN_PENALTY;
        }
    }

    for file in 0..8 {
        let on_file = own.iter().filter(|&&(of, _)| of == file).count();
        if on_file > 1 {
            score -= (on_file as i32 - 1) * DOUBLED_PAWN_PENALTY;
        }
    }

    score
}

/// Static evaluation of `pos` in centipawns, white-positive.
///
/// Terminal positions short-circuit: checkmate is `±CHECKMATE_SCORE`
/// signed toward the side that delivered it, stalemate and draws are 0.
pub fn evaluate(pos: &Position, book: &OpeningBook) -> i32 {
    if pos.is_checkmate() {
        // The side to move is the one that got mated.
        return match pos.turn() {
            Color::White => -CHECKMATE_SCORE,
            Color::Black => CHECKMATE_SCORE,
        };
    }
    if pos.is_stalemate() || pos.is_draw() {
        return 0;
    }

    let attacks = attack_counts(pos);
    let mobility = mobility_counts(pos);

    let mut score = [0i32; 2];
    let mut material = [0i32; 2];
    let mut pawns: [Vec<(usize, usize)>; 2] = [Vec::new(), Vec::new()];

    for sq in ALL_SQUARES {
        let (piece, color) = match pos.piece_at(sq) {
            Some(pc) => pc,
            None => continue,
        };
        let us = color.to_index();
        let them = 1 - us;
        let value = piece_value(piece);
        let mut val = value;

        let attackers = i32::from(attacks[sq.to_index()][them]);
        let defenders = i32::from(attacks[sq.to_index()][us]);

        // Piece security. The king is exempt: it cannot be captured, only
        // mated, and that is priced separately.
        if piece != Piece::King {
            if attackers > defenders {
                val -= (attackers - defenders) * value / 2;
            }
            if attackers > 0 && defenders == 0 {
                // A hanging piece is a capture on offer for the other side.
                score[them] += attackers * value * 4 / 5;
            }
        }
        if defenders > 0 {
            val += defenders * DEFENDER_BONUS;
        }

        if is_center(sq) {
            val += CENTER_BONUS;
        }

        if let Some(counts) = &mobility[us] {
            let moves = i32::from(counts[sq.to_index()]);
            if piece != Piece::King && moves == 0 {
                val -= TRAPPED_PENALTY;
            } else if piece != Piece::Pawn {
                let bonus = (moves * 2).min(MOBILITY_CAP);
                if piece == Piece::Queen && pos.ply() < EARLY_QUEEN_PLY {
                    // Early queen sorties read as activity but mostly lose
                    // tempo; invert the reward until development is done.
                    val -= bonus;
                } else {
                    val += bonus;
                }
            }
        }

        if piece == Piece::Pawn {
            pawns[us].push((sq.get_file().to_index(), sq.get_rank().to_index()));
        }

        material[us] += value;
        score[us] += val;
    }

    let endgame = pos.ply() >= ENDGAME_PLY;
    score[0] += pawn_structure(&pawns[0], &pawns[1], Color::White, endgame);
    score[1] += pawn_structure(&pawns[1], &pawns[0], Color::Black, endgame);

    // Staying inside known theory is worth a little by itself.
    if pos.ply() < OPENING_PLY && book.contains(&pos.key()) {
        score[pos.turn().to_index()] += BOOK_THEORY_BONUS;
    }

    let mut total = score[0] - score[1];

    // While ahead on material in the middlegame, simplification helps.
    if (MIDDLEGAME_PLY..ENDGAME_PLY).contains(&pos.ply()) {
        total += (material[0] - material[1]) / 10;
    }

    total
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
