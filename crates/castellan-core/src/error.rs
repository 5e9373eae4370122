//! Error types for coordinate, move and FEN parsing, board validation and move application.

use crate::chess_move::Move;
use crate::square::Square;

/// A coordinate that does not name one of the 64 squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("rank {rank} / file {file} is off the board")]
    CoordsOutOfRange { rank: u8, file: u8 },
    #[error("square index {index} is off the board")]
    IndexOutOfRange { index: u8 },
    #[error("invalid square notation: \"{found}\"")]
    InvalidNotation { found: String },
}

/// Malformed UCI move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("move must be 4 or 5 characters, got {length}")]
    WrongLength { length: usize },
    #[error("invalid square in move: {0}")]
    InvalidSquare(#[from] SquareError),
    #[error("invalid promotion piece: '{character}'")]
    InvalidPromotion { character: char },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// `rank_index` counts from the top of the diagram (0 = rank 8).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural defects found by [`Board::validate`](crate::Board::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    #[error("overlapping piece bitboards")]
    OverlappingPieces,
    #[error("occupied bitboard is inconsistent with piece bitboards")]
    InconsistentOccupied,
    #[error("white and black side bitboards overlap")]
    InconsistentSides,
}

/// Why [`Board::apply`](crate::Board::apply) refused a move. The board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece on {square}")]
    NoPieceOnSource { square: Square },
    #[error("piece on {square} does not belong to the side to move")]
    NotSideToMove { square: Square },
    #[error("{square} is occupied by a piece of the moving side")]
    OwnPieceOnTarget { square: Square },
    #[error("castling {mv} is not available")]
    CastlingUnavailable { mv: Move },
    #[error("en passant {mv} has no matching target")]
    InvalidEnPassant { mv: Move },
    #[error("promotion {mv} is malformed")]
    InvalidPromotion { mv: Move },
    #[error("the piece on {} cannot move as {mv}", .mv.from)]
    Unreachable { mv: Move },
    #[error("{mv} leaves the king in check")]
    LeavesKingInCheck { mv: Move },
}

/// Failure to play a move given as UCI text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] MoveParseError),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, IllegalMove, MoveParseError, SquareError};
    use crate::chess_move::{Move, MoveKind};
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(err.to_string(), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn fen_error_wraps_board_error() {
        let err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(err, FenError::InvalidBoard { .. }));
        assert_eq!(err.to_string(), "invalid board: pawns found on back rank");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn move_parse_error_wraps_square_error() {
        let err: MoveParseError = SquareError::IndexOutOfRange { index: 70 }.into();
        assert_eq!(
            err.to_string(),
            "invalid square in move: square index 70 is off the board"
        );
    }

    #[test]
    fn illegal_move_display_names_move() {
        let mv = Move::new(Square::E1, Square::G1, MoveKind::KingCastle);
        let err = IllegalMove::CastlingUnavailable { mv };
        assert_eq!(err.to_string(), "castling e1g1 is not available");
        let err = IllegalMove::Unreachable {
            mv: Move::new(Square::B1, Square::B3, MoveKind::Quiet),
        };
        assert_eq!(err.to_string(), "the piece on b1 cannot move as b1b3");
    }
}
