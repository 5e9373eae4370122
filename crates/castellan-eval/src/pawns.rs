//! Pawn structure: doubled, isolated and passed pawns, scored per file.
//!
//! All scores are from White's perspective (positive = White advantage).

use castellan_core::{Bitboard, Board, Color, PieceKind, Square};

/// For each file index 0-7, the bitboard of the neighbouring files.
pub(crate) static ADJACENT_FILES: [Bitboard; 8] = compute_adjacent_files();

/// For each `[color][square]`, the squares strictly ahead of a pawn on the
/// same and adjacent files. A pawn is passed when this span holds no enemy pawn.
static PASSED_SPAN: [[Bitboard; 64]; 2] = compute_passed_spans();

const fn compute_adjacent_files() -> [Bitboard; 8] {
    let mut table = [Bitboard::EMPTY; 8];
    let mut f = 0usize;
    while f < 8 {
        let mut bits = 0u64;
        if f > 0 {
            bits |= Bitboard::FILES[f - 1].bits();
        }
        if f < 7 {
            bits |= Bitboard::FILES[f + 1].bits();
        }
        table[f] = Bitboard::new(bits);
        f += 1;
    }
    table
}

const fn compute_passed_spans() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        let span = Bitboard::FILES[file].bits() | ADJACENT_FILES[file].bits();

        let mut ahead_white = 0u64;
        let mut ahead_black = 0u64;
        let mut r = 0usize;
        while r < 8 {
            if r > rank {
                ahead_white |= Bitboard::RANKS[r].bits();
            }
            if r < rank {
                ahead_black |= Bitboard::RANKS[r].bits();
            }
            r += 1;
        }
        table[0][sq] = Bitboard::new(span & ahead_white);
        table[1][sq] = Bitboard::new(span & ahead_black);
        sq += 1;
    }
    table
}

/// Penalty per pawn beyond the first on a file.
const DOUBLED_PAWN_PENALTY: i32 = -15;

/// Penalty for a file of pawns with no friendly pawn on either neighbour.
const ISOLATED_PAWN_PENALTY: i32 = -25;

/// Passed pawn bonus indexed by rank from the pawn's own side (0 = back rank).
const PASSED_PAWN_BONUS: [i32; 8] = [0, 10, 20, 40, 60, 90, 130, 180];

/// Rank of `sq` counted from `color`'s back rank.
#[inline]
pub(crate) fn relative_rank(color: Color, sq: Square) -> u8 {
    match color {
        Color::White => sq.rank(),
        Color::Black => 7 - sq.rank(),
    }
}

/// Most advanced pawn of `color` in `pawns`.
fn front_most(pawns: Bitboard, color: Color) -> Option<Square> {
    match color {
        Color::White => pawns.msb(),
        Color::Black => pawns.lsb(),
    }
}

/// Evaluate pawn structure from White's perspective.
pub fn evaluate_pawns(board: &Board) -> i32 {
    let white = board.pieces(Color::White, PieceKind::Pawn);
    let black = board.pieces(Color::Black, PieceKind::Pawn);
    evaluate_pawns_for_side(white, black, Color::White)
        - evaluate_pawns_for_side(black, white, Color::Black)
}

/// Pawn-structure score for one side, positive = good for `color`.
fn evaluate_pawns_for_side(friendly: Bitboard, enemy: Bitboard, color: Color) -> i32 {
    let mut score = 0;

    for file in 0..8u8 {
        let on_file = friendly & Bitboard::file(file);
        let Some(front) = front_most(on_file, color) else {
            continue;
        };

        let count = on_file.count() as i32;
        if count > 1 {
            score += DOUBLED_PAWN_PENALTY * (count - 1);
        }

        if (friendly & ADJACENT_FILES[file as usize]).is_empty() {
            score += ISOLATED_PAWN_PENALTY;
        }

        if (PASSED_SPAN[color.index()][front.index()] & enemy).is_empty() {
            score += PASSED_PAWN_BONUS[relative_rank(color, front) as usize];
        }
    }

    score
}
