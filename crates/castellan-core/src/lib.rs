//! Core chess types: board representation, move generation, and game rules.

pub mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod status;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, IllegalMove, MoveError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use make_move::Undo;
pub use movegen::{MoveList, generate_legal_moves, generate_pseudo_legal_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use status::GameStatus;
