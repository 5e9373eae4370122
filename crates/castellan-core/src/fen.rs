//! FEN parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a six-field FEN string.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        parse(fen).inspect_err(|error| debug!(fen, %error, "rejected FEN"))
    }

    /// Serialize to FEN. Inverse of [`Board::from_fen`].
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

fn parse(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, color, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    };

    let mut board = Board::empty();
    parse_placement(&mut board, placement)?;

    let side_to_move = match color {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };
    board.set_side_to_move(side_to_move);
    board.set_castling(CastleRights::from_fen(castling)?);
    board.set_en_passant(parse_en_passant(en_passant, side_to_move)?);

    board.set_halfmove_clock(halfmove.parse().map_err(|_| FenError::InvalidMoveCounter {
        field: "halfmove clock",
        found: halfmove.to_string(),
    })?);
    let fullmove_number = fullmove
        .parse::<u32>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fullmove.to_string(),
        })?;
    board.set_fullmove_number(fullmove_number);

    board.validate()?;
    Ok(board)
}

/// Ranks run 8 down to 1; digits 1-8 skip empty squares.
fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, text) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file = 0usize;
        for c in text.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file + 1,
                        });
                    }
                    board.put(Square::from_index_unchecked(rank * 8 + file as u8), piece);
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file,
            });
        }
    }
    Ok(())
}

/// A target square only exists on the rank just passed over by the opponent.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    Square::from_notation(field)
        .ok()
        .filter(|sq| sq.rank() == expected_rank)
        .map(Some)
        .ok_or_else(|| FenError::InvalidEnPassant {
            found: field.to_string(),
        })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        Board::from_fen(fen)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match self.piece_on(Square::from_index_unchecked(rank * 8 + file)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
