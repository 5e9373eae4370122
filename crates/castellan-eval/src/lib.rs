//! Hand-crafted static evaluation for castellan positions.

mod attack_map;
mod evaluator;
mod exchange;
mod king_safety;
mod material;
mod mobility;
mod outposts;
mod pawns;
mod phase;
mod pst;
mod rooks;

pub use attack_map::AttackMap;
pub use evaluator::{
    DECISIVE_MATERIAL, EvalBreakdown, Evaluator, MATE_SCORE, TEMPO_BONUS, evaluate,
};
pub use exchange::{EXCHANGE_THRESHOLD, EXCHANGE_VALUE, exchange_gain, static_exchange};
pub use king_safety::king_zone;
pub use material::{BISHOP_PAIR_BONUS, MATERIAL_VALUE, material};
pub use phase::{MAX_PHASE, game_phase};
pub use pst::pst_value;
