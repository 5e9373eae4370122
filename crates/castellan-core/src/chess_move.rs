//! A single ply: source, destination and a kind tag.

use std::fmt;
use std::str::FromStr;

use crate::error::{MoveParseError, SquareError};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What a move does besides relocating a piece. Exactly one per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Quiet = 0,
    DoublePawnPush = 1,
    KingCastle = 2,
    QueenCastle = 3,
    Capture = 4,
    EnPassant = 5,
    PromotionKnight = 6,
    PromotionBishop = 7,
    PromotionRook = 8,
    PromotionQueen = 9,
    PromotionCaptureKnight = 10,
    PromotionCaptureBishop = 11,
    PromotionCaptureRook = 12,
    PromotionCaptureQueen = 13,
}

const CAPTURE: u8 = 1;
const PROMOTION: u8 = 2;
const CASTLING: u8 = 4;

/// Predicate bits per kind, indexed by discriminant.
const TRAITS: [u8; 14] = [
    0,
    0,
    CASTLING,
    CASTLING,
    CAPTURE,
    CAPTURE,
    PROMOTION,
    PROMOTION,
    PROMOTION,
    PROMOTION,
    PROMOTION | CAPTURE,
    PROMOTION | CAPTURE,
    PROMOTION | CAPTURE,
    PROMOTION | CAPTURE,
];

impl MoveKind {
    /// Promotion kind for `piece`, or `None` if a pawn cannot become it.
    pub const fn promotion(piece: PieceKind, capture: bool) -> Option<MoveKind> {
        let kind = match (piece, capture) {
            (PieceKind::Knight, false) => MoveKind::PromotionKnight,
            (PieceKind::Bishop, false) => MoveKind::PromotionBishop,
            (PieceKind::Rook, false) => MoveKind::PromotionRook,
            (PieceKind::Queen, false) => MoveKind::PromotionQueen,
            (PieceKind::Knight, true) => MoveKind::PromotionCaptureKnight,
            (PieceKind::Bishop, true) => MoveKind::PromotionCaptureBishop,
            (PieceKind::Rook, true) => MoveKind::PromotionCaptureRook,
            (PieceKind::Queen, true) => MoveKind::PromotionCaptureQueen,
            _ => return None,
        };
        Some(kind)
    }

    #[inline]
    const fn traits(self) -> u8 {
        TRAITS[self as usize]
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.traits() & CAPTURE != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.traits() & PROMOTION != 0
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.traits() & CASTLING != 0
    }

    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveKind::PromotionKnight | MoveKind::PromotionCaptureKnight => Some(PieceKind::Knight),
            MoveKind::PromotionBishop | MoveKind::PromotionCaptureBishop => Some(PieceKind::Bishop),
            MoveKind::PromotionRook | MoveKind::PromotionCaptureRook => Some(PieceKind::Rook),
            MoveKind::PromotionQueen | MoveKind::PromotionCaptureQueen => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

/// One ply. Produced by move generation or parsed from UCI text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.kind.is_capture()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.kind.is_promotion()
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.kind.is_castling()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Piece a pawn becomes, or `None` for non-promotions.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        self.kind.promotion_piece()
    }

    /// Parse UCI notation: `e2e4`, `e7e8q`.
    ///
    /// Text carries no capture or castling information, so the kind is
    /// `Quiet` or a non-capturing promotion. Resolve it against a position
    /// with [`Board::find_move`](crate::Board::find_move).
    pub fn from_uci(text: &str) -> Result<Move, MoveParseError> {
        let length = text.chars().count();
        if !(4..=5).contains(&length) {
            return Err(MoveParseError::WrongLength { length });
        }
        if !text.is_ascii() {
            return Err(SquareError::InvalidNotation {
                found: text.to_string(),
            }
            .into());
        }
        let from = Square::from_notation(&text[0..2])?;
        let to = Square::from_notation(&text[2..4])?;
        let kind = match text[4..].chars().next() {
            None => MoveKind::Quiet,
            Some(c) => PieceKind::from_char(c)
                .filter(|_| c.is_ascii_lowercase())
                .and_then(|piece| MoveKind::promotion(piece, false))
                .ok_or(MoveParseError::InvalidPromotion { character: c })?,
        };
        Ok(Move::new(from, to, kind))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        Move::from_uci(s)
    }
}

/// UCI notation.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}, {:?})", self.kind)
    }
}
