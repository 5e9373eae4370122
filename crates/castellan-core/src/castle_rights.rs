//! The four independent castling rights.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Castling rights as a 4-bit set: WK = 1, WQ = 2, BK = 4, BQ = 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Single right for `color` castling toward `side`.
    #[inline]
    pub const fn single(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Both rights of one color.
    #[inline]
    pub const fn both(color: Color) -> CastleRights {
        CastleRights(Self::single(color, CastleSide::KingSide).0 | Self::single(color, CastleSide::QueenSide).0)
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::single(color, side).0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Rights lost when a move starts or ends on `sq`.
    ///
    /// A king leaving its home square forfeits both rights of its color.
    /// A rook leaving its corner, or being captured there, forfeits that side.
    #[inline]
    pub const fn revoked_by(sq: Square) -> CastleRights {
        REVOKE[sq.index()]
    }

    /// Parse the FEN castling field: `-` or any subset of `KQkq`.
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        if field.is_empty() {
            return Err(FenError::InvalidCastlingChar { character: ' ' });
        }
        field.chars().try_fold(CastleRights::NONE, |rights, c| {
            let right = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.union(right))
        })
    }
}

const REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::both(Color::White);
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::E8.index()] = CastleRights::both(Color::Black);
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table
};

/// FEN castling field.
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (right, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.0 & right.0 != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
