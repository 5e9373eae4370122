use crate::board::Board;

/// Terminal classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl Board {
    /// Classify the position with a single legal-move generation.
    pub fn status(&self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.is_in_check(self.side_to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// Side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    /// Side to move is not in check and has no legal move.
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}
