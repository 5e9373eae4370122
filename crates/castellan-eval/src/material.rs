//! Material balance evaluation.
//!
//! Counts weighted piece material for each side and adds a bishop-pair bonus.
//! Scores are from White's perspective (positive = White ahead).

use castellan_core::{Board, Color, PieceKind};

/// Material values in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Knight | 320   |
/// | Bishop | 330   |
/// | Rook   | 500   |
/// | Queen  | 900   |
/// | King   | 0     |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 0];

/// Bonus for a side holding two or more bishops.
pub const BISHOP_PAIR_BONUS: i32 = 30;

fn side_material(board: &Board, color: Color) -> i32 {
    let pieces: i32 = PieceKind::ALL
        .into_iter()
        .map(|kind| board.pieces(color, kind).count() as i32 * MATERIAL_VALUE[kind.index()])
        .sum();
    if board.pieces(color, PieceKind::Bishop).count() >= 2 {
        pieces + BISHOP_PAIR_BONUS
    } else {
        pieces
    }
}

/// Material balance from White's perspective, bishop pair included.
pub fn material(board: &Board) -> i32 {
    side_material(board, Color::White) - side_material(board, Color::Black)
}

#[cfg(test)]
mod tests {
    use castellan_core::{Board, PieceKind};

    use super::{BISHOP_PAIR_BONUS, MATERIAL_VALUE, material};

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(material(&Board::starting_position()), 0);
    }

    #[test]
    fn missing_black_queen() {
        let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&board), MATERIAL_VALUE[PieceKind::Queen.index()]);
    }

    #[test]
    fn black_ahead_is_negative() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/1NBQKBNR w Kkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&board), -500);
    }

    #[test]
    fn bishop_pair_only_for_the_side_keeping_both() {
        // Black lost one bishop, so only White keeps the pair.
        let board: Board = "rn1qkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&board), 330 + BISHOP_PAIR_BONUS);
    }
}
