//! Pawn pushes, captures, en passant and promotions.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

pub(super) fn gen_pawns(board: &Board, sources: Bitboard, list: &mut MoveList) {
    let us = board.side_to_move();
    let them = us.flip();
    let enemy = board.side(them);
    let empty = !board.occupied();
    let forward = us.pawn_direction();
    let promotion_rank = us.promotion_rank();

    for from in board.pieces(us, PieceKind::Pawn) & sources {
        if let Some(one) = from.offset(forward, 0)
            && empty.contains(one)
        {
            if promotion_rank.contains(one) {
                push_promotions(from, one, false, list);
            } else {
                list.push(Move::new(from, one, MoveKind::Quiet));
                if us.pawn_start_rank().contains(from)
                    && let Some(two) = one.offset(forward, 0)
                    && empty.contains(two)
                {
                    list.push(Move::new(from, two, MoveKind::DoublePawnPush));
                }
            }
        }

        for to in pawn_attacks(us, from) {
            if enemy.contains(to) {
                if promotion_rank.contains(to) {
                    push_promotions(from, to, true, list);
                } else {
                    list.push(Move::new(from, to, MoveKind::Capture));
                }
            } else if board.en_passant() == Some(to) && is_en_passant_victim(board, to, them) {
                list.push(Move::new(from, to, MoveKind::EnPassant));
            }
        }
    }
}

/// The double-pushed pawn stands directly behind the target from the capturer's side.
fn is_en_passant_victim(board: &Board, target: Square, them: Color) -> bool {
    !board.occupied().contains(target)
        && target
            .offset(them.pawn_direction(), 0)
            .is_some_and(|sq| board.piece_on(sq) == Some(Piece::new(them, PieceKind::Pawn)))
}

fn push_promotions(from: Square, to: Square, capture: bool, list: &mut MoveList) {
    for piece in PieceKind::PROMOTIONS {
        if let Some(kind) = MoveKind::promotion(piece, capture) {
            list.push(Move::new(from, to, kind));
        }
    }
}
