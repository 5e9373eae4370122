//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the leaf nodes of the legal move tree at `depth`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without making them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    let mut scratch = *board;
    walk(&mut scratch, depth)
}

fn walk(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        let Ok(undo) = board.make(mv) else {
            continue;
        };
        nodes += walk(board, depth - 1);
        board.unmake(undo);
    }
    nodes
}

/// Per-move breakdown of [`perft`], sorted by UCI text.
///
/// Depth 0 has no root moves to split by and returns an empty list.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut scratch = *board;
    let moves = generate_legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .filter_map(|&mv| {
            let undo = scratch.make(mv).ok()?;
            let count = walk(&mut scratch, depth - 1);
            scratch.unmake(undo);
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
