//! Tactical terms: hanging pieces and a static exchange estimate for every
//! attacked piece.
//!
//! The exchange walk collects all attackers and defenders of a square once,
//! orders each side cheapest first and lets the sides alternate. Either side
//! may stop capturing when continuing would lose material. Kings are never
//! targets.

use castellan_core::{Bitboard, Board, Color, PieceKind, Square};

use crate::attack_map::AttackMap;

/// Exchange values indexed by [`PieceKind::index()`].
pub const EXCHANGE_VALUE: [i32; PieceKind::COUNT] = [100, 325, 335, 500, 975, 20_000];

/// Smallest net gain worth scoring as a winning exchange.
pub const EXCHANGE_THRESHOLD: i32 = 20;

/// Upper bound on the capture sequence: 16 pieces per side.
const MAX_SEQUENCE: usize = 32;

/// Net gain for the side capturing first on a square holding `target`.
///
/// `attackers` and `defenders` are exchange values sorted ascending. The
/// first capture is forced; every later one is optional. Returns 0 when there
/// is no attacker.
pub fn static_exchange(target: i32, attackers: &[i32], defenders: &[i32]) -> i32 {
    let Some((&first, later_attackers)) = attackers.split_first() else {
        return 0;
    };

    let mut gain = [0i32; MAX_SEQUENCE];
    let mut depth = 0usize;
    gain[0] = target;

    let mut on_square = first;
    let mut attackers = later_attackers.iter();
    let mut defenders = defenders.iter();

    while depth + 1 < MAX_SEQUENCE {
        let next = if depth % 2 == 0 {
            defenders.next()
        } else {
            attackers.next()
        };
        let Some(&capturer) = next else {
            break;
        };
        depth += 1;
        gain[depth] = on_square - gain[depth - 1];
        on_square = capturer;
    }

    while depth > 0 {
        depth -= 1;
        gain[depth] = -((-gain[depth]).max(gain[depth + 1]));
    }
    gain[0]
}

/// Exchange values of the pieces in `squares`, cheapest first.
fn sorted_values(board: &Board, squares: Bitboard) -> Vec<i32> {
    let mut values: Vec<i32> = squares
        .filter_map(|sq| board.piece_on(sq))
        .map(|piece| EXCHANGE_VALUE[piece.kind.index()])
        .collect();
    values.sort_unstable();
    values
}

/// Favourable gain for `by` from starting captures on `target`, or 0.
///
/// Gains below [`EXCHANGE_THRESHOLD`] count as no gain.
pub fn exchange_gain(board: &Board, target: Square, by: Color) -> i32 {
    let Some(victim) = board.piece_on(target) else {
        return 0;
    };
    if victim.color == by || victim.kind == PieceKind::King {
        return 0;
    }

    let occupied = board.occupied();
    let attackers = sorted_values(board, board.attackers_to(target, by, occupied));
    let defenders = sorted_values(board, board.attackers_to(target, by.flip(), occupied));
    let gain = static_exchange(EXCHANGE_VALUE[victim.kind.index()], &attackers, &defenders);
    if gain >= EXCHANGE_THRESHOLD { gain } else { 0 }
}

fn non_king(board: &Board, color: Color) -> Bitboard {
    board.side(color) & !board.pieces(color, PieceKind::King)
}

/// Full value of every piece attacked and not defended, from White's perspective.
pub fn evaluate_hanging(board: &Board, attacks: &AttackMap) -> i32 {
    Color::ALL
        .into_iter()
        .map(|color| {
            let hanging = non_king(board, color) & attacks.side(color.flip()) & !attacks.side(color);
            let lost: i32 = sorted_values(board, hanging).iter().sum();
            -color.sign() * lost
        })
        .sum()
}

/// Sum of exchange gains on attacked pieces, from White's perspective.
pub fn evaluate_exchanges(board: &Board, attacks: &AttackMap) -> i32 {
    Color::ALL
        .into_iter()
        .map(|color| {
            let targets = non_king(board, color.flip()) & attacks.side(color);
            let won: i32 = targets.map(|sq| exchange_gain(board, sq, color)).sum();
            color.sign() * won
        })
        .sum()
}
