//! Static evaluation of a single position.
//!
//! The pipeline short-circuits decided games, then adds material, and only
//! while material is not lopsided the positional and tactical terms. Those
//! are scaled by the game phase before the tempo bonus is added.

use castellan_core::{Board, Color, GameStatus};

use crate::attack_map::AttackMap;
use crate::exchange::{evaluate_exchanges, evaluate_hanging};
use crate::king_safety::evaluate_king_safety;
use crate::material::material;
use crate::mobility::evaluate_mobility;
use crate::outposts::evaluate_outposts;
use crate::pawns::evaluate_pawns;
use crate::phase::{MAX_PHASE, game_phase};
use crate::pst::evaluate_pst;
use crate::rooks::evaluate_rooks;

/// Score of a checkmated position, from the winner's perspective.
pub const MATE_SCORE: i32 = 20_000;

/// Beyond this material imbalance only material is counted.
pub const DECISIVE_MATERIAL: i32 = 2_000;

/// Bonus for the side to move.
pub const TEMPO_BONUS: i32 = 15;

/// Individual evaluation terms, each from White's perspective in centipawns.
///
/// When material is decisive every term other than `material` is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub pst: i32,
    pub pawns: i32,
    pub rooks: i32,
    pub outposts: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub hanging: i32,
    pub exchanges: i32,
    pub phase: i32,
    pub tempo: i32,
}

impl EvalBreakdown {
    /// Positional terms before phase scaling.
    pub fn positional(&self) -> i32 {
        self.pst + self.pawns + self.rooks + self.outposts + self.mobility + self.king_safety
    }

    /// Tactical terms before phase scaling.
    pub fn tactical(&self) -> i32 {
        self.hanging + self.exchanges
    }

    /// Combine the terms into the final score.
    ///
    /// Division truncates toward zero, so mirrored positions scale to exactly
    /// negated values.
    pub fn total(&self) -> i32 {
        let scaled = (self.positional() + self.tactical()) * self.phase / MAX_PHASE;
        self.material + scaled + self.tempo
    }
}

/// Read-only scorer over one board snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    board: &'a Board,
    phase: i32,
    attacks: AttackMap,
}

impl<'a> Evaluator<'a> {
    pub fn new(board: &'a Board) -> Evaluator<'a> {
        Evaluator {
            board,
            phase: game_phase(board),
            attacks: AttackMap::new(board),
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Game phase in `0..=MAX_PHASE`.
    pub fn phase(&self) -> i32 {
        self.phase
    }

    pub fn attacks(&self) -> &AttackMap {
        &self.attacks
    }

    /// Centipawn score from White's perspective.
    ///
    /// A mated side to move scores `-MATE_SCORE` for White and `MATE_SCORE`
    /// for Black; stalemate is 0.
    pub fn evaluate(&self) -> i32 {
        match self.board.status() {
            GameStatus::Checkmate => match self.board.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            },
            GameStatus::Stalemate => 0,
            GameStatus::Ongoing => self.breakdown().total(),
        }
    }

    /// Per-term scores, ignoring terminal status.
    pub fn breakdown(&self) -> EvalBreakdown {
        let board = self.board;
        let material = material(board);
        if material.abs() > DECISIVE_MATERIAL {
            return EvalBreakdown {
                material,
                phase: self.phase,
                ..EvalBreakdown::default()
            };
        }

        EvalBreakdown {
            material,
            pst: evaluate_pst(board, self.phase),
            pawns: evaluate_pawns(board),
            rooks: evaluate_rooks(board),
            outposts: evaluate_outposts(board),
            mobility: evaluate_mobility(board),
            king_safety: evaluate_king_safety(board, self.phase),
            hanging: evaluate_hanging(board, &self.attacks),
            exchanges: evaluate_exchanges(board, &self.attacks),
            phase: self.phase,
            tempo: board.side_to_move().sign() * TEMPO_BONUS,
        }
    }
}

/// Evaluate `board` from White's perspective.
pub fn evaluate(board: &Board) -> i32 {
    Evaluator::new(board).evaluate()
}
