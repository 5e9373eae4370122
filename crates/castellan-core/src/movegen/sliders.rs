//! Bishop, rook and queen moves.
//!
//! Each ray is walked until the edge or the first occupied square. An enemy
//! there is a capture; a friendly piece ends the ray without a move.

use crate::attacks::{DIAGONALS, ORTHOGONALS, ray_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece_kind::PieceKind;

use super::{MoveList, push_targets};

pub(super) fn gen_sliders(board: &Board, sources: Bitboard, list: &mut MoveList) {
    let us = board.side_to_move();
    let own = board.side(us);
    let occupied = board.occupied();

    let diagonal = board.pieces(us, PieceKind::Bishop) | board.pieces(us, PieceKind::Queen);
    let straight = board.pieces(us, PieceKind::Rook) | board.pieces(us, PieceKind::Queen);

    for from in (diagonal | straight) & sources {
        let mut targets = Bitboard::EMPTY;
        if diagonal.contains(from) {
            targets |= ray_attacks(from, occupied, &DIAGONALS);
        }
        if straight.contains(from) {
            targets |= ray_attacks(from, occupied, &ORTHOGONALS);
        }
        push_targets(board, from, targets & !own, list);
    }
}
