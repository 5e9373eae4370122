//! The chess board: twelve piece sets, side to move, castling, en passant and move counters.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete position state.
///
/// `sides` and `occupied` are caches of the twelve piece sets. Every
/// mutation goes through [`Board::put`] / [`Board::take`], which keep them
/// in step.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Indexed by [`Color::index`], then [`PieceKind::index`].
    pieces: [[Bitboard; PieceKind::COUNT]; Color::COUNT],
    sides: [Bitboard; Color::COUNT],
    occupied: Bitboard,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces, White to move, no rights.
    pub(crate) fn empty() -> Board {
        Board {
            pieces: [[Bitboard::EMPTY; PieceKind::COUNT]; Color::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = Bitboard::rank(color.back_rank());
            for (sq, kind) in back.zip(BACK_RANK) {
                board.put(sq, Piece::new(color, kind));
            }
            for sq in color.pawn_start_rank() {
                board.put(sq, Piece::new(color, PieceKind::Pawn));
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Place `piece` on an empty square.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(!self.occupied.contains(sq), "put on occupied {sq}");
        let bb = sq.bitboard();
        self.pieces[piece.color.index()][piece.kind.index()] |= bb;
        self.sides[piece.color.index()] |= bb;
        self.occupied = self.sides[0] | self.sides[1];
    }

    /// Lift `piece` off `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square, piece: Piece) {
        debug_assert!(
            self.pieces[piece.color.index()][piece.kind.index()].contains(sq),
            "take {piece} missing from {sq}"
        );
        let bb = !sq.bitboard();
        self.pieces[piece.color.index()][piece.kind.index()] &= bb;
        self.sides[piece.color.index()] &= bb;
        self.occupied = self.sides[0] | self.sides[1];
    }

    /// The piece on `sq`, if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let color = self.color_on(sq)?;
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].contains(sq))
            .map(|kind| Piece::new(color, kind))
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.sides[color.index()].contains(sq))
    }

    /// Squares holding `color`'s pieces of `kind`.
    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Squares holding pieces of `kind` of either color.
    #[inline]
    pub fn kind(&self, kind: PieceKind) -> Bitboard {
        self.pieces[0][kind.index()] | self.pieces[1][kind.index()]
    }

    /// All squares holding `color`'s pieces.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// `color`'s king, or `None` if it has none on the board.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceKind::King).lsb()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// Check the structural invariants a legal position must satisfy.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces(color, PieceKind::King).count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        if (self.kind(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }

        let mut seen = Bitboard::EMPTY;
        for color in Color::ALL {
            let mut side = Bitboard::EMPTY;
            for kind in PieceKind::ALL {
                let set = self.pieces(color, kind);
                if (seen & set).is_nonempty() {
                    return Err(BoardError::OverlappingPieces);
                }
                seen |= set;
                side |= set;
            }
            if side != self.sides[color.index()] {
                return Err(BoardError::InconsistentOccupied);
            }
        }

        if (self.sides[0] & self.sides[1]).is_nonempty() {
            return Err(BoardError::InconsistentSides);
        }
        if self.occupied != seen {
            return Err(BoardError::InconsistentOccupied);
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::bitboard::Bitboard;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_piece_counts() {
        let board = Board::starting_position();
        let expected = [16, 4, 4, 4, 2, 2];
        for (kind, count) in PieceKind::ALL.into_iter().zip(expected) {
            assert_eq!(board.kind(kind).count(), count, "wrong number of {kind:?}");
        }
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling(), CastleRights::ALL);
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        board.validate().unwrap();
    }

    #[test]
    fn piece_on_reads_both_colors() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_on(Square::D1),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_on(Square::G8),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        assert_eq!(board.piece_on(Square::E4), None);
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn put_and_take_keep_caches_in_step() {
        let mut board = Board::starting_position();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.take(Square::E2, pawn);
        board.put(Square::E4, pawn);
        assert_eq!(board.side(Color::White).count(), 16);
        assert!(board.occupied().contains(Square::E4));
        assert!(!board.occupied().contains(Square::E2));
        board.validate().unwrap();
    }

    #[test]
    fn missing_king_reported() {
        let mut board = Board::starting_position();
        board.take(Square::E8, Piece::new(Color::Black, PieceKind::King));
        assert_eq!(board.king_square(Color::Black), None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount {
                color: "black",
                count: 0
            })
        );
    }

    #[test]
    fn overlapping_sets_reported() {
        let mut board = Board::starting_position();
        board.pieces[Color::White.index()][PieceKind::Knight.index()] |= Square::E2.bitboard();
        assert_eq!(board.validate(), Err(BoardError::OverlappingPieces));
    }

    #[test]
    fn stale_occupancy_reported() {
        let mut board = Board::starting_position();
        board.occupied = board.occupied | Bitboard::RANK_4;
        assert_eq!(board.validate(), Err(BoardError::InconsistentOccupied));
    }
}
