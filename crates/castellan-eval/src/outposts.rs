//! Knight outposts.
//!
//! A knight sits on an outpost when it is on ranks 4-6 from its own side,
//! defended by a friendly pawn, and no enemy pawn currently attacks it.

use castellan_core::{Bitboard, Board, Color, PieceKind};

/// Bonus per knight on an outpost.
const KNIGHT_OUTPOST: i32 = 20;

fn outpost_ranks(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANK_4 | Bitboard::RANK_5 | Bitboard::RANK_6,
        Color::Black => Bitboard::RANK_3 | Bitboard::RANK_4 | Bitboard::RANK_5,
    }
}

/// All squares attacked by `color` pawns in `pawns`.
///
/// White pawns attack NE (`<< 9`, not FILE_A) and NW (`<< 7`, not FILE_H);
/// Black mirrors downward.
pub(crate) fn pawn_attack_span(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => ((pawns << 9u8) & !Bitboard::FILE_A) | ((pawns << 7u8) & !Bitboard::FILE_H),
        Color::Black => ((pawns >> 7u8) & !Bitboard::FILE_A) | ((pawns >> 9u8) & !Bitboard::FILE_H),
    }
}

fn count_outposts(board: &Board, color: Color) -> i32 {
    let defended = pawn_attack_span(board.pieces(color, PieceKind::Pawn), color);
    let contested = pawn_attack_span(board.pieces(color.flip(), PieceKind::Pawn), color.flip());
    let outposts =
        board.pieces(color, PieceKind::Knight) & outpost_ranks(color) & defended & !contested;
    outposts.count() as i32
}

/// Evaluate knight outposts from White's perspective.
pub fn evaluate_outposts(board: &Board) -> i32 {
    KNIGHT_OUTPOST * (count_outposts(board, Color::White) - count_outposts(board, Color::Black))
}

#[cfg(test)]
mod tests {
    use castellan_core::{Bitboard, Board, Color, Square};

    use super::{evaluate_outposts, pawn_attack_span};

    #[test]
    fn pawn_span_does_not_wrap() {
        let a_and_h = Square::A4.bitboard() | Square::H4.bitboard();
        let white = pawn_attack_span(a_and_h, Color::White);
        assert_eq!(white, Square::B5.bitboard() | Square::G5.bitboard());
        let black = pawn_attack_span(a_and_h, Color::Black);
        assert_eq!(black, Square::B3.bitboard() | Square::G3.bitboard());
        assert_eq!(pawn_attack_span(Bitboard::EMPTY, Color::White), Bitboard::EMPTY);
    }

    #[test]
    fn supported_knight_on_fifth_is_outpost() {
        let board: Board = "4k3/8/8/3N4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_outposts(&board), 20);
    }

    #[test]
    fn contested_square_is_not_outpost() {
        let board: Board = "4k3/8/2p5/3N4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_outposts(&board), 0);
    }

    #[test]
    fn knight_on_home_side_is_not_outpost() {
        let board: Board = "4k3/8/8/8/8/3N4/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_outposts(&board), 0);
    }

    #[test]
    fn black_outpost_subtracts() {
        let board: Board = "4k3/8/8/4p3/3n4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_outposts(&board), -20);
    }

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate_outposts(&Board::starting_position()), 0);
    }
}
