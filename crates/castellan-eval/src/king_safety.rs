//! King safety: pawn shield, open files beside the king, and enemy pieces
//! crowding the king zone.
//!
//! Only applied while enough material remains for an attack to matter.

use castellan_core::attacks::king_attacks;
use castellan_core::{Bitboard, Board, Color, PieceKind, Square};

use crate::pawns::{ADJACENT_FILES, relative_rank};

/// King safety is skipped at or below this phase.
pub const KING_SAFETY_MIN_PHASE: i32 = 128;

/// Shield bonus for a friendly pawn one, two or three ranks ahead of the king.
const KING_SHIELD_BONUS: [i32; 3] = [15, 10, 5];

/// Penalty per king-side file without a friendly pawn.
const OPEN_FILE_NEAR_KING: i32 = -15;

/// Penalty per enemy piece inside the king zone.
const ENEMY_IN_KING_ZONE: i32 = -10;

/// The king's square and every square adjacent to it.
pub fn king_zone(king: Square) -> Bitboard {
    king_attacks(king).with(king)
}

fn king_files(king: Square) -> Bitboard {
    Bitboard::file(king.file()) | ADJACENT_FILES[king.file() as usize]
}

fn shield(board: &Board, color: Color, king: Square) -> i32 {
    let king_rank = relative_rank(color, king) as i32;
    (board.pieces(color, PieceKind::Pawn) & king_files(king))
        .filter_map(|pawn| {
            let ahead = relative_rank(color, pawn) as i32 - king_rank;
            (1..=3).contains(&ahead).then(|| KING_SHIELD_BONUS[(ahead - 1) as usize])
        })
        .sum()
}

fn open_files(board: &Board, color: Color, king: Square) -> i32 {
    let pawns = board.pieces(color, PieceKind::Pawn);
    let file = king.file();
    let lo = file.saturating_sub(1);
    let hi = (file + 1).min(7);
    let open = (lo..=hi)
        .filter(|&f| (pawns & Bitboard::file(f)).is_empty())
        .count() as i32;
    open * OPEN_FILE_NEAR_KING
}

fn crowding(board: &Board, color: Color, king: Square) -> i32 {
    (king_zone(king) & board.side(color.flip())).count() as i32 * ENEMY_IN_KING_ZONE
}

fn evaluate_king_safety_for_side(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    shield(board, color, king) + open_files(board, color, king) + crowding(board, color, king)
}

/// Evaluate king safety from White's perspective; zero once `phase` has
/// fallen to [`KING_SAFETY_MIN_PHASE`] or below.
pub fn evaluate_king_safety(board: &Board, phase: i32) -> i32 {
    if phase <= KING_SAFETY_MIN_PHASE {
        return 0;
    }
    evaluate_king_safety_for_side(board, Color::White)
        - evaluate_king_safety_for_side(board, Color::Black)
}
