//! Move execution via make/unmake with an explicit undo record.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::{IllegalMove, MoveError};
use crate::movegen::{self, MoveList, castle_path, castle_side};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Everything [`Board::unmake`] needs to reverse a [`Board::make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<(Square, Piece)>,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Undo {
    /// The piece removed by the move, with the square it stood on.
    pub fn captured(&self) -> Option<(Square, Piece)> {
        self.captured
    }
}

impl Board {
    /// Play `mv` without testing king safety, returning the record that
    /// reverses it.
    ///
    /// The source piece and the move's kind tag are checked against the board
    /// so that an `Ok` never leaves overlapping piece sets; reachability is
    /// not. The mover's king may be left in check. Use [`Board::apply`] for a
    /// full legality check.
    pub fn make(&mut self, mv: Move) -> Result<Undo, IllegalMove> {
        let us = self.side_to_move();
        let moved = self
            .piece_on(mv.from)
            .ok_or(IllegalMove::NoPieceOnSource { square: mv.from })?;
        if moved.color != us {
            return Err(IllegalMove::NotSideToMove { square: mv.from });
        }
        self.check_kind(mv, moved)?;

        let captured = if mv.is_en_passant() {
            mv.to
                .offset(-us.pawn_direction(), 0)
                .and_then(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
        } else {
            self.piece_on(mv.to).map(|piece| (mv.to, piece))
        };

        let undo = Undo {
            mv,
            moved,
            captured,
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        };

        if let Some((sq, piece)) = captured {
            self.take(sq, piece);
        }
        self.take(mv.from, moved);
        let landed = match mv.promotion_piece() {
            Some(kind) => Piece::new(us, kind),
            None => moved,
        };
        self.put(mv.to, landed);

        if let Some(side) = castle_side(mv.kind) {
            let path = castle_path(us, side);
            let rook = Piece::new(us, PieceKind::Rook);
            self.take(path.rook_from, rook);
            self.put(path.rook_to, rook);
        }

        self.set_castling(
            self.castling()
                .remove(CastleRights::revoked_by(mv.from))
                .remove(CastleRights::revoked_by(mv.to)),
        );

        let en_passant = match mv.kind {
            MoveKind::DoublePawnPush => mv.from.offset(us.pawn_direction(), 0),
            _ => None,
        };
        self.set_en_passant(en_passant);

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(us.flip());

        Ok(undo)
    }

    /// Reject kind tags the piece on `mv.from` cannot carry out here.
    fn check_kind(&self, mv: Move, moved: Piece) -> Result<(), IllegalMove> {
        let us = moved.color;
        if self.side(us).contains(mv.to) {
            return Err(IllegalMove::OwnPieceOnTarget { square: mv.to });
        }

        if let Some(side) = castle_side(mv.kind) {
            let path = castle_path(us, side);
            let in_place = moved.kind == PieceKind::King
                && mv.from == path.king_from
                && mv.to == path.king_to
                && self.piece_on(path.rook_from) == Some(Piece::new(us, PieceKind::Rook))
                && (self.occupied() & path.between).is_empty();
            if !in_place {
                return Err(IllegalMove::CastlingUnavailable { mv });
            }
        }

        let last_rank = match us {
            Color::White => 7,
            Color::Black => 0,
        };
        let to_last_rank = moved.kind == PieceKind::Pawn && mv.to.rank() == last_rank;
        if mv.is_promotion() != to_last_rank {
            return Err(IllegalMove::InvalidPromotion { mv });
        }

        if mv.is_en_passant() {
            let victim = mv.to.offset(-us.pawn_direction(), 0);
            let valid = moved.kind == PieceKind::Pawn
                && self.en_passant() == Some(mv.to)
                && victim.and_then(|sq| self.piece_on(sq))
                    == Some(Piece::new(us.flip(), PieceKind::Pawn));
            if !valid {
                return Err(IllegalMove::InvalidEnPassant { mv });
            }
        }

        Ok(())
    }

    /// Reverse the move recorded in `undo`, restoring the exact prior position.
    pub fn unmake(&mut self, undo: Undo) {
        let Undo { mv, moved, captured, .. } = undo;
        let us = moved.color;

        if let Some(side) = castle_side(mv.kind) {
            let path = castle_path(us, side);
            let rook = Piece::new(us, PieceKind::Rook);
            self.take(path.rook_to, rook);
            self.put(path.rook_from, rook);
        }

        let landed = match mv.promotion_piece() {
            Some(kind) => Piece::new(us, kind),
            None => moved,
        };
        self.take(mv.to, landed);
        self.put(mv.from, moved);
        if let Some((sq, piece)) = captured {
            self.put(sq, piece);
        }

        self.set_side_to_move(us);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_halfmove_clock(undo.halfmove_clock);
        self.set_fullmove_number(undo.fullmove_number);
    }

    /// Make, test the mover's king, unmake. Used by the legality filter.
    pub(crate) fn keeps_king_safe(&mut self, mv: Move) -> bool {
        let us = self.side_to_move();
        match self.make(mv) {
            Ok(undo) => {
                let safe = !self.is_in_check(us);
                self.unmake(undo);
                safe
            }
            Err(_) => false,
        }
    }

    /// Play `mv` if it is legal in this position.
    ///
    /// On `Err` the board is exactly as it was before the call.
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.try_apply(mv)
            .inspect_err(|reason| trace!(%mv, %reason, fen = %self, "move rejected"))
    }

    fn try_apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.check_pseudo_legal(mv)?;
        let us = self.side_to_move();
        let undo = self.make(mv)?;
        if self.is_in_check(us) {
            self.unmake(undo);
            return Err(IllegalMove::LeavesKingInCheck { mv });
        }
        Ok(())
    }

    /// Confirm `mv` is among the pseudo-legal moves of the piece on its source square.
    fn check_pseudo_legal(&self, mv: Move) -> Result<(), IllegalMove> {
        let piece = self
            .piece_on(mv.from)
            .ok_or(IllegalMove::NoPieceOnSource { square: mv.from })?;
        if piece.color != self.side_to_move() {
            return Err(IllegalMove::NotSideToMove { square: mv.from });
        }
        if self.side(piece.color).contains(mv.to) {
            return Err(IllegalMove::OwnPieceOnTarget { square: mv.to });
        }

        let mut candidates = MoveList::new();
        movegen::generate_from(self, mv.from.bitboard(), &mut candidates);
        if candidates.contains(mv) {
            return Ok(());
        }

        Err(match mv.kind {
            MoveKind::KingCastle | MoveKind::QueenCastle => IllegalMove::CastlingUnavailable { mv },
            MoveKind::EnPassant => IllegalMove::InvalidEnPassant { mv },
            kind if kind.is_promotion() => IllegalMove::InvalidPromotion { mv },
            _ => IllegalMove::Unreachable { mv },
        })
    }

    /// The legal move matching `candidate`'s squares and promotion piece.
    ///
    /// Fills in the kind tag that UCI text cannot carry (capture, castling,
    /// en passant, double push).
    pub fn find_move(&self, candidate: Move) -> Option<Move> {
        self.legal_moves().iter().copied().find(|mv| {
            mv.from == candidate.from
                && mv.to == candidate.to
                && mv.promotion_piece() == candidate.promotion_piece()
        })
    }

    /// Parse UCI text, resolve it against the legal moves and play it.
    pub fn apply_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let candidate = Move::from_uci(text)?;
        let mv = self.find_move(candidate).unwrap_or(candidate);
        self.apply(mv)?;
        Ok(mv)
    }
}
