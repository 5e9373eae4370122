//! Bishop mobility along its diagonals.

use castellan_core::attacks::bishop_attacks;
use castellan_core::{Board, Color, PieceKind};

/// Bonus per reachable square.
const BISHOP_MOBILITY: i32 = 4;

/// Diagonal squares each bishop reaches, friendly-occupied squares excluded.
fn bishop_mobility(board: &Board, color: Color) -> i32 {
    let own = board.side(color);
    board
        .pieces(color, PieceKind::Bishop)
        .map(|sq| (bishop_attacks(sq, board.occupied()) & !own).count() as i32)
        .sum()
}

/// Evaluate bishop mobility from White's perspective.
pub fn evaluate_mobility(board: &Board) -> i32 {
    BISHOP_MOBILITY * (bishop_mobility(board, Color::White) - bishop_mobility(board, Color::Black))
}

#[cfg(test)]
mod tests {
    use castellan_core::Board;

    use super::evaluate_mobility;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate_mobility(&Board::starting_position()), 0);
    }

    #[test]
    fn open_bishop_on_empty_board() {
        // d4 sees 13 squares.
        let board: Board = "4k3/8/8/8/3B4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_mobility(&board), 13 * 4);
    }

    #[test]
    fn own_blockers_cut_rays_and_captures_count() {
        // c1 bishop: b2 own pawn blocks, d2 empty, e3 holds a black pawn.
        let board: Board = "4k3/8/8/8/8/4p3/1P6/2B1K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_mobility(&board), 2 * 4);
    }
}
