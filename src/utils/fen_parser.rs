//! FEN piece-placement parser.
//!
//! Only the placement field is read; side to move and clocks are owned by the
//! game session. Trailing FEN fields are accepted and ignored.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_placement(fen: &str) -> ChessResult<Board> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;
            let pos = Position::new(row as u8, col as u8)
                .ok_or_else(|| ChessError::InvalidFen(format!("rank {} has too many files", 8 - row)))?;
            board.set(pos, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

/// Side-to-move field of a full FEN string, white when absent.
pub fn parse_side_to_move(fen: &str) -> ChessResult<Color> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {other}"))),
    }
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT_FEN;

    #[test]
    fn starting_placement_matches_initial_board() {
        let board = parse_placement(STARTING_PLACEMENT_FEN).expect("starting FEN should parse");
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn full_fen_side_to_move() {
        let fen = "4k3/8/8/8/8/8/8/4K3 b - - 0 1";
        let board = parse_placement(fen).expect("bare kings should parse");
        assert_eq!(board.piece_count(Color::White), 1);
        assert_eq!(parse_side_to_move(fen).expect("side field"), Color::Black);
        assert_eq!(parse_side_to_move("8/8/8/8/8/8/8/8").expect("absent side"), Color::White);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!(parse_placement("8/8/8").is_err());
        assert!(parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("x7/8/8/8/8/8/8/8").is_err());
    }
}
