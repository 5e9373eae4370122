//! Castling generation and the fixed king/rook geometry it relies on.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook.
    pub between: Bitboard,
    /// King start, transit and destination. None may be attacked.
    pub king_walk: [Square; 3],
}

const fn at(rank: u8, file: u8) -> Square {
    Square::from_index_unchecked(rank * 8 + file)
}

const fn path(rank: u8, side: CastleSide) -> CastlePath {
    match side {
        CastleSide::KingSide => CastlePath {
            king_from: at(rank, 4),
            king_to: at(rank, 6),
            rook_from: at(rank, 7),
            rook_to: at(rank, 5),
            between: Bitboard::new(0b0110_0000 << (rank * 8)),
            king_walk: [at(rank, 4), at(rank, 5), at(rank, 6)],
        },
        CastleSide::QueenSide => CastlePath {
            king_from: at(rank, 4),
            king_to: at(rank, 2),
            rook_from: at(rank, 0),
            rook_to: at(rank, 3),
            between: Bitboard::new(0b0000_1110 << (rank * 8)),
            king_walk: [at(rank, 4), at(rank, 3), at(rank, 2)],
        },
    }
}

static PATHS: [[CastlePath; 2]; 2] = [
    [path(0, CastleSide::KingSide), path(0, CastleSide::QueenSide)],
    [path(7, CastleSide::KingSide), path(7, CastleSide::QueenSide)],
];

#[inline]
pub(crate) fn castle_path(color: Color, side: CastleSide) -> &'static CastlePath {
    let side_index = match side {
        CastleSide::KingSide => 0,
        CastleSide::QueenSide => 1,
    };
    &PATHS[color.index()][side_index]
}

/// Castling side encoded by `kind`, if it is a castling kind.
#[inline]
pub(crate) const fn castle_side(kind: MoveKind) -> Option<CastleSide> {
    match kind {
        MoveKind::KingCastle => Some(CastleSide::KingSide),
        MoveKind::QueenCastle => Some(CastleSide::QueenSide),
        _ => None,
    }
}

pub(super) fn gen_castles(board: &Board, sources: Bitboard, list: &mut MoveList) {
    let us = board.side_to_move();
    let them = us.flip();
    let Some(king) = board.king_square(us) else {
        return;
    };
    if !sources.contains(king) {
        return;
    }

    for side in CastleSide::ALL {
        let path = castle_path(us, side);
        if !board.castling().has(us, side)
            || king != path.king_from
            || !board.pieces(us, PieceKind::Rook).contains(path.rook_from)
            || (board.occupied() & path.between).is_nonempty()
            || path.king_walk.iter().any(|&sq| board.is_square_attacked(sq, them))
        {
            continue;
        }
        let kind = match side {
            CastleSide::KingSide => MoveKind::KingCastle,
            CastleSide::QueenSide => MoveKind::QueenCastle,
        };
        list.push(Move::new(path.king_from, path.king_to, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_standard_squares() {
        let white_king = castle_path(Color::White, CastleSide::KingSide);
        assert_eq!(white_king.rook_from, Square::H1);
        assert_eq!(white_king.rook_to, Square::F1);
        assert_eq!(white_king.between, Square::F1.bitboard() | Square::G1.bitboard());

        let black_queen = castle_path(Color::Black, CastleSide::QueenSide);
        assert_eq!(black_queen.king_to, Square::C8);
        assert_eq!(black_queen.rook_to, Square::D8);
        assert_eq!(black_queen.between.count(), 3);
        assert!(black_queen.between.contains(Square::B8));
        assert_eq!(black_queen.king_walk, [Square::E8, Square::D8, Square::C8]);
    }
}
