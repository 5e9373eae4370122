//! Knight and king steps. Castling lives in its own module.

use crate::attacks::{king_attacks, knight_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece_kind::PieceKind;

use super::{MoveList, push_targets};

pub(super) fn gen_knights(board: &Board, sources: Bitboard, list: &mut MoveList) {
    let us = board.side_to_move();
    let own = board.side(us);
    for from in board.pieces(us, PieceKind::Knight) & sources {
        push_targets(board, from, knight_attacks(from) & !own, list);
    }
}

pub(super) fn gen_king(board: &Board, sources: Bitboard, list: &mut MoveList) {
    let us = board.side_to_move();
    let own = board.side(us);
    for from in board.pieces(us, PieceKind::King) & sources {
        push_targets(board, from, king_attacks(from) & !own, list);
    }
}
