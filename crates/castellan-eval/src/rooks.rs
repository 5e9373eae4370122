//! Rook evaluation: open and semi-open files.

use castellan_core::{Bitboard, Board, Color, PieceKind};

/// Bonus for a rook on a file with no pawns of either color.
const ROOK_OPEN_FILE: i32 = 25;

/// Bonus for a rook on a file with enemy pawns but no friendly ones.
const ROOK_SEMI_OPEN_FILE: i32 = 15;

fn evaluate_rooks_for_side(board: &Board, color: Color) -> i32 {
    let all_pawns = board.kind(PieceKind::Pawn);
    let friendly_pawns = board.pieces(color, PieceKind::Pawn);

    board
        .pieces(color, PieceKind::Rook)
        .map(|sq| {
            let file = Bitboard::file(sq.file());
            if (file & all_pawns).is_empty() {
                ROOK_OPEN_FILE
            } else if (file & friendly_pawns).is_empty() {
                ROOK_SEMI_OPEN_FILE
            } else {
                0
            }
        })
        .sum()
}

/// Evaluate rook files from White's perspective.
pub fn evaluate_rooks(board: &Board) -> i32 {
    evaluate_rooks_for_side(board, Color::White) - evaluate_rooks_for_side(board, Color::Black)
}

#[cfg(test)]
mod tests {
    use castellan_core::Board;

    use super::evaluate_rooks;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate_rooks(&Board::starting_position()), 0);
    }

    #[test]
    fn rook_on_open_file() {
        let board: Board = "4k3/pppp1ppp/8/8/8/8/PPPP1PPP/4RK2 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_rooks(&board), 25);
    }

    #[test]
    fn rook_on_semi_open_file() {
        let board: Board = "4k3/pppppppp/8/8/8/8/PPPP1PPP/4RK2 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_rooks(&board), 15);
    }

    #[test]
    fn black_rooks_subtract() {
        // a8 semi-open, h8 fully open.
        let board: Board = "r3k2r/1pppppp1/8/8/8/8/PPPPPPP1/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_rooks(&board), -40);
    }
}
