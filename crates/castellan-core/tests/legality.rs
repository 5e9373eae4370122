//! Cross-checks between the in-place legality filter and independent strategies,
//! plus invariant checks over deterministic playouts.

use std::collections::BTreeSet;

use castellan_core::{
    Board, Color, Move, PieceKind, Square, generate_legal_moves, generate_pseudo_legal_moves,
};

const POSITIONS: [&str; 8] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1",
    "4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1",
    "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
];

fn key(mv: &Move) -> (u8, u8, String) {
    (mv.from.index() as u8, mv.to.index() as u8, format!("{mv:?}"))
}

/// Legal set computed by copying the board for every candidate, never undoing.
fn copy_then_test(board: &Board) -> BTreeSet<(u8, u8, String)> {
    let us = board.side_to_move();
    generate_pseudo_legal_moves(board)
        .iter()
        .filter(|&&mv| {
            let mut copy = *board;
            copy.make(mv).is_ok() && !copy.is_in_check(us)
        })
        .map(key)
        .collect()
}

/// Legal king destinations from attacker sets, with the king lifted off the
/// board so sliders see through its start square.
fn king_moves_from_attack_map(board: &Board) -> BTreeSet<Square> {
    let us = board.side_to_move();
    let Some(king) = board.king_square(us) else {
        return BTreeSet::new();
    };
    let lifted = board.occupied().without(king);
    generate_pseudo_legal_moves(board)
        .iter()
        .filter(|mv| mv.from == king && !mv.is_castling())
        .filter(|mv| board.attackers_to(mv.to, us.flip(), lifted).is_empty())
        .map(|mv| mv.to)
        .collect()
}

#[test]
fn make_unmake_filter_matches_copy_filter() {
    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let in_place: BTreeSet<_> = generate_legal_moves(&board).iter().map(key).collect();
        assert_eq!(in_place, copy_then_test(&board), "{fen}");
    }
}

#[test]
fn king_moves_match_attack_map() {
    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let Some(king) = board.king_square(board.side_to_move()) else {
            continue;
        };
        let filtered: BTreeSet<Square> = generate_legal_moves(&board)
            .iter()
            .filter(|mv| mv.from == king && !mv.is_castling())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(filtered, king_moves_from_attack_map(&board), "{fen}");
    }
}

#[test]
fn horizontal_en_passant_pin_is_respected() {
    let board: Board = "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1".parse().unwrap();
    assert!(board.legal_moves().iter().all(|mv| !mv.is_en_passant()));
}

/// Xorshift64 PRNG driving the playouts.
struct Sequence(u64);

impl Sequence {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

fn assert_consistent(board: &Board) {
    let mut union = castellan_core::Bitboard::EMPTY;
    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let set = board.pieces(color, kind);
            assert!((union & set).is_empty());
            union |= set;
        }
    }
    assert_eq!(board.occupied(), union);
    assert!((board.side(Color::White) & board.side(Color::Black)).is_empty());
}

#[test]
fn playouts_keep_every_invariant() {
    let mut seq = Sequence(0x9E37_79B9_7F4A_7C15);
    for start in POSITIONS {
        let mut board: Board = start.parse().unwrap();
        for _ in 0..80 {
            let moves = board.legal_moves();
            if moves.is_empty() {
                assert!(board.status().is_terminal());
                break;
            }

            // An illegal candidate must bounce without touching the board.
            let before = board;
            for &mv in &board.pseudo_legal_moves() {
                if !moves.contains(mv) {
                    assert!(board.apply(mv).is_err());
                    assert_eq!(board, before);
                }
            }

            let mv = moves[(seq.next() % moves.len() as u64) as usize];
            let mover = board.side_to_move();
            board.apply(mv).unwrap();
            assert_consistent(&board);
            assert!(!board.is_in_check(mover), "{mv} left {mover:?} in check");

            let reparsed: Board = board.to_fen().parse().unwrap();
            assert_eq!(reparsed, board, "FEN round trip failed at {}", board.to_fen());
        }
    }
}

#[test]
fn undo_restores_positions_along_a_playout() {
    let mut seq = Sequence(0xDEAD_BEEF_CAFE_F00D);
    let mut board: Board = POSITIONS[1].parse().unwrap();
    let mut history = Vec::new();
    for _ in 0..40 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[(seq.next() % moves.len() as u64) as usize];
        let snapshot = board;
        let undo = board.make(mv).unwrap();
        history.push((snapshot, undo));
    }
    while let Some((snapshot, undo)) = history.pop() {
        board.unmake(undo);
        assert_eq!(board, snapshot);
    }
    assert_eq!(board, POSITIONS[1].parse::<Board>().unwrap());
}
