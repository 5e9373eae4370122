//! Move generation: pseudo-legal per piece type, then a legality filter.
//!
//! A pseudo-legal move is legal iff the mover's king is not attacked after
//! it is made. The filter makes and unmakes every candidate on a scratch
//! copy; there is no pin pre-computation.

mod castling;
mod leapers;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::square::Square;

pub(crate) use self::castling::{castle_path, castle_side};

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: usize,
}

const FILLER: Move = Move::new(Square::A1, Square::A1, MoveKind::Quiet);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [FILLER; 256],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < self.moves.len());
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.moves[i];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Append every capture or quiet move from `from` onto `targets`.
fn push_targets(board: &Board, from: Square, targets: Bitboard, list: &mut MoveList) {
    let enemy = board.side(board.side_to_move().flip());
    for to in targets {
        let kind = if enemy.contains(to) {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };
        list.push(Move::new(from, to, kind));
    }
}

/// Pseudo-legal moves of the side to move whose source lies in `sources`.
pub(crate) fn generate_from(board: &Board, sources: Bitboard, list: &mut MoveList) {
    pawns::gen_pawns(board, sources, list);
    leapers::gen_knights(board, sources, list);
    sliders::gen_sliders(board, sources, list);
    leapers::gen_king(board, sources, list);
    castling::gen_castles(board, sources, list);
}

/// All pseudo-legal moves: correct piece movement, own king safety unchecked.
pub fn generate_pseudo_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    generate_from(board, Bitboard::FULL, &mut list);
    list
}

/// All legal moves for the side to move. Order is unspecified.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut list = generate_pseudo_legal_moves(board);
    let mut scratch = *board;
    list.retain(|mv| scratch.keeps_king_safe(mv));
    list
}

impl Board {
    /// See [`generate_pseudo_legal_moves`].
    pub fn pseudo_legal_moves(&self) -> MoveList {
        generate_pseudo_legal_moves(self)
    }

    /// See [`generate_legal_moves`].
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }
}
