//! Rule-level behaviour of the public board API.

use castellan_core::{
    Bitboard, Board, CastleRights, CastleSide, Color, GameStatus, IllegalMove, Move, MoveKind,
    Piece, PieceKind, STARTING_FEN, Square,
};

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn union_of_piece_sets(board: &Board) -> Bitboard {
    let mut union = Bitboard::EMPTY;
    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let set = board.pieces(color, kind);
            assert!((union & set).is_empty(), "piece sets overlap");
            union |= set;
        }
    }
    union
}

fn assert_invariants(board: &Board) {
    assert_eq!(board.occupied(), union_of_piece_sets(board));
    assert!((board.side(Color::White) & board.side(Color::Black)).is_empty());
    assert_eq!(board.occupied(), board.side(Color::White) | board.side(Color::Black));
    assert!(board.validate().is_ok());
}

#[test]
fn starting_position_inventory() {
    let board = board(STARTING_FEN);
    assert_eq!(board.kind(PieceKind::Pawn).count(), 16);
    assert_eq!(board.kind(PieceKind::Rook).count(), 4);
    assert_eq!(board.kind(PieceKind::Knight).count(), 4);
    assert_eq!(board.kind(PieceKind::Bishop).count(), 4);
    assert_eq!(board.kind(PieceKind::Queen).count(), 2);
    assert_eq!(board.kind(PieceKind::King).count(), 2);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.castling(), CastleRights::ALL);
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.status(), GameStatus::Ongoing);
}

#[test]
fn en_passant_after_double_push() {
    let mut b = board("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    b.apply_uci("e2e4").unwrap();
    assert_eq!(b.en_passant(), Some(Square::E3));

    let mv = b.apply_uci("f4e3").unwrap();
    assert_eq!(mv.kind, MoveKind::EnPassant);
    assert_eq!(b.piece_on(Square::E4), None, "the passing pawn is removed");
    assert_eq!(b.piece_on(Square::E3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(b.kind(PieceKind::Pawn).count(), 1);
    assert_invariants(&b);
}

#[test]
fn en_passant_expires_after_one_ply() {
    let mut b = board("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    b.apply_uci("e2e4").unwrap();
    b.apply_uci("e8d8").unwrap();
    b.apply_uci("e1d1").unwrap();
    let late = Move::new(Square::F4, Square::E3, MoveKind::EnPassant);
    let before = b;
    assert_eq!(b.apply(late), Err(IllegalMove::InvalidEnPassant { mv: late }));
    assert_eq!(b, before);
}

#[test]
fn kingside_castle_from_cleared_start() {
    let mut b = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1");
    let mv = b.apply_uci("e1g1").unwrap();
    assert_eq!(mv.kind, MoveKind::KingCastle);
    assert_eq!(b.piece_on(Square::G1), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(b.piece_on(Square::F1), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(!b.castling().has(Color::White, CastleSide::KingSide));
    assert!(!b.castling().has(Color::White, CastleSide::QueenSide));
    assert!(b.castling().has(Color::Black, CastleSide::KingSide));
    assert_invariants(&b);
}

#[test]
fn castle_across_attacked_transit_square_is_refused() {
    // Black knight on h3 covers g1.
    let mut b = board("rnbqkb1r/pppppppp/8/8/8/7n/PPPPPPPP/RNBQK2R w KQkq - 0 1");
    let before = b;
    let mv = Move::new(Square::E1, Square::G1, MoveKind::KingCastle);
    assert_eq!(b.apply(mv), Err(IllegalMove::CastlingUnavailable { mv }));
    assert_eq!(b, before);
    assert!(b.apply_uci("e1g1").is_err());
    assert_eq!(b, before);
}

#[test]
fn queenside_castle_ignores_attack_on_rook_path() {
    // b1 is attacked, but only the king's squares matter.
    let mut b = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let mv = b.apply_uci("e1c1").unwrap();
    assert_eq!(mv.kind, MoveKind::QueenCastle);
    assert_eq!(b.piece_on(Square::D1), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(b.castling(), CastleRights::NONE);
}

#[test]
fn capturing_unmoved_rook_revokes_its_right() {
    let mut b = board("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    b.apply_uci("g2a8").unwrap();
    assert!(!b.castling().has(Color::Black, CastleSide::QueenSide));
    assert!(b.castling().has(Color::Black, CastleSide::KingSide));
    assert_eq!(b.to_fen(), "B3k2r/8/8/8/8/8/8/R3K2R b KQk - 0 1");
}

#[test]
fn promotion_to_each_piece() {
    for (suffix, kind) in [
        ("n", PieceKind::Knight),
        ("b", PieceKind::Bishop),
        ("r", PieceKind::Rook),
        ("q", PieceKind::Queen),
    ] {
        let mut b = board("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        let mv = b.apply_uci(&format!("b7b8{suffix}")).unwrap();
        assert!(mv.is_promotion());
        assert!(!mv.is_capture());
        assert_eq!(b.piece_on(Square::B8), Some(Piece::new(Color::White, kind)));
        assert_invariants(&b);
    }
}

#[test]
fn bare_pawn_push_to_last_rank_is_refused() {
    let mut b = board("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
    let before = b;
    assert!(b.apply_uci("b7b8").is_err());
    assert_eq!(b, before);
}

#[test]
fn counters_follow_the_rules() {
    let mut b = Board::starting_position();
    b.apply_uci("g1f3").unwrap();
    assert_eq!((b.halfmove_clock(), b.fullmove_number()), (1, 1));
    b.apply_uci("g8f6").unwrap();
    assert_eq!((b.halfmove_clock(), b.fullmove_number()), (2, 2));
    b.apply_uci("e2e4").unwrap();
    assert_eq!((b.halfmove_clock(), b.fullmove_number()), (0, 2));
    b.apply_uci("f6e4").unwrap();
    assert_eq!((b.halfmove_clock(), b.fullmove_number()), (0, 3));
}

#[test]
fn pinned_piece_cannot_expose_king() {
    let mut b = board("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let before = b;
    let mv = Move::new(Square::E2, Square::D3, MoveKind::Quiet);
    assert_eq!(b.apply(mv), Err(IllegalMove::LeavesKingInCheck { mv }));
    assert_eq!(b, before);
}

#[test]
fn scholars_mate_sequence() {
    let mut b = Board::starting_position();
    for uci in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        b.apply_uci(uci).unwrap();
        assert_invariants(&b);
    }
    assert!(b.is_checkmate());
    assert!(b.legal_moves().is_empty());
}

#[test]
fn lone_king_stalemate() {
    let b = board("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
    assert!(!b.is_in_check(Color::Black));
    assert!(b.is_stalemate());
    assert_eq!(b.status(), GameStatus::Stalemate);
}
