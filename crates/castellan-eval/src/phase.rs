//! Game phase from the material still on the board.

use castellan_core::{Board, PieceKind};

/// Phase of the full starting complement.
pub const MAX_PHASE: i32 = 256;

/// Starting count and per-unit phase cost for each kind that contributes.
///
/// | Piece  | Start | Weight |
/// |--------|-------|--------|
/// | Pawn   | 16    | 4      |
/// | Knight | 4     | 8      |
/// | Bishop | 4     | 8      |
/// | Rook   | 4     | 16     |
/// | Queen  | 2     | 32     |
const PHASE_WEIGHTS: [(PieceKind, i32, i32); 5] = [
    (PieceKind::Pawn, 16, 4),
    (PieceKind::Knight, 4, 8),
    (PieceKind::Bishop, 4, 8),
    (PieceKind::Rook, 4, 16),
    (PieceKind::Queen, 2, 32),
];

/// Compute the game phase in `0..=MAX_PHASE`.
///
/// Starts from [`MAX_PHASE`] and subtracts the weight of every missing unit.
/// Promoted extras cannot push the result above the maximum.
pub fn game_phase(board: &Board) -> i32 {
    let phase = PHASE_WEIGHTS
        .iter()
        .fold(MAX_PHASE, |phase, &(kind, start, weight)| {
            let present = board.kind(kind).count() as i32;
            phase - (start - present) * weight
        });
    phase.clamp(0, MAX_PHASE)
}
