//! Attack sets: precomputed leaper tables and ray-walked sliders.
//!
//! Every step is bounds-checked on rank and file separately, so no attack
//! wraps around a board edge.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Bishop ray directions as (rank, file) steps.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook ray directions as (rank, file) steps.
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const fn leaper_table(deltas: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut i = 0;
    while i < 64 {
        let from = Square::from_index_unchecked(i as u8);
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            if let Some(to) = from.offset(deltas[d].0, deltas[d].1) {
                bits |= 1u64 << to.index();
            }
            d += 1;
        }
        table[i] = Bitboard::new(bits);
        i += 1;
    }
    table
}

const fn pawn_table() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut i = 0;
    while i < 64 {
        let from = Square::from_index_unchecked(i as u8);
        let mut c = 0;
        while c < 2 {
            let forward = if c == 0 { 1 } else { -1 };
            let mut bits = 0u64;
            if let Some(to) = from.offset(forward, -1) {
                bits |= 1u64 << to.index();
            }
            if let Some(to) = from.offset(forward, 1) {
                bits |= 1u64 << to.index();
            }
            table[c][i] = Bitboard::new(bits);
            c += 1;
        }
        i += 1;
    }
    table
}

static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
static PAWN_ATTACKS: [[Bitboard; 64]; 2] = pawn_table();

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Diagonal capture squares of a `color` pawn on `sq`. Pushes are not attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Walk each direction from `sq` until the edge or the first occupied square,
/// which is included.
pub fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(dr, df) in directions {
        let mut cursor = sq;
        while let Some(next) = cursor.offset(dr, df) {
            attacks = attacks.with(next);
            if occupied.contains(next) {
                break;
            }
            cursor = next;
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &DIAGONALS)
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ORTHOGONALS)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares a `color` piece of `kind` on `sq` attacks given `occupied`.
pub fn piece_attacks(color: Color, kind: PieceKind, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(color, sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}

impl Board {
    /// Squares the piece on `sq` attacks, friendly-occupied targets included.
    ///
    /// Empty if `sq` is empty.
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        match self.piece_on(sq) {
            Some(piece) => piece_attacks(piece.color, piece.kind, sq, self.occupied()),
            None => Bitboard::EMPTY,
        }
    }

    /// Every `by_color` piece attacking `sq`, with sliders seen through `occupied`.
    ///
    /// Attack patterns are cast outward from `sq` and intersected with the
    /// attacker's pieces. A pawn of `by_color` attacks `sq` exactly when a
    /// pawn of the other color on `sq` would attack it back.
    pub fn attackers_to(&self, sq: Square, by_color: Color, occupied: Bitboard) -> Bitboard {
        let pieces = |kind| self.pieces(by_color, kind);
        let diagonal = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
        let straight = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);

        (pawn_attacks(by_color.flip(), sq) & pieces(PieceKind::Pawn))
            | (knight_attacks(sq) & pieces(PieceKind::Knight))
            | (king_attacks(sq) & pieces(PieceKind::King))
            | (bishop_attacks(sq, occupied) & diagonal)
            | (rook_attacks(sq, occupied) & straight)
    }

    /// Whether any `by_color` piece attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.attackers_to(sq, by_color, self.occupied()).is_nonempty()
    }

    /// Union of every square `color` attacks.
    pub fn attacked_by(&self, color: Color) -> Bitboard {
        self.side(color)
            .map(|sq| self.attacks_from(sq))
            .fold(Bitboard::EMPTY, |acc, bb| acc | bb)
    }

    /// Whether `color`'s king is attacked. A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.flip()))
    }
}
