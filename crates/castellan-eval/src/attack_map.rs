//! Per-side, per-kind attack sets computed once per evaluation.

use castellan_core::attacks::piece_attacks;
use castellan_core::{Bitboard, Board, Color, PieceKind};

/// Squares attacked by each `[color][kind]`, plus each side's union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackMap {
    by_kind: [[Bitboard; PieceKind::COUNT]; Color::COUNT],
    by_side: [Bitboard; Color::COUNT],
}

impl AttackMap {
    pub fn new(board: &Board) -> AttackMap {
        let occupied = board.occupied();
        let mut by_kind = [[Bitboard::EMPTY; PieceKind::COUNT]; Color::COUNT];
        let mut by_side = [Bitboard::EMPTY; Color::COUNT];

        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let attacks = board
                    .pieces(color, kind)
                    .fold(Bitboard::EMPTY, |acc, sq| acc | piece_attacks(color, kind, sq, occupied));
                by_kind[color.index()][kind.index()] = attacks;
                by_side[color.index()] |= attacks;
            }
        }

        AttackMap { by_kind, by_side }
    }

    /// Squares attacked by `color`'s pieces of `kind`.
    #[inline]
    pub fn of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.by_kind[color.index()][kind.index()]
    }

    /// Squares attacked by any `color` piece.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.by_side[color.index()]
    }
}
