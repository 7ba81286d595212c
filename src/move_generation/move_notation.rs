//! Algebraic-style notation for executed moves.
//!
//! Produces castling tokens, piece letters, pawn capture files, destination,
//! and `=Q` for promotion. There is no disambiguation and no `+`/`#` suffix.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Notation for `from -> to` computed against the board *before* the move.
pub fn move_notation(
    pre_move: &Board,
    from: Position,
    to: Position,
    captured: Option<Piece>,
    promoted: bool,
) -> String {
    let Some(piece) = pre_move.piece_at(from) else {
        return String::new();
    };

    if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        return if to.col() > from.col() { "O-O" } else { "O-O-O" }.to_owned();
    }

    let mut notation = String::with_capacity(6);
    if let Some(letter) = piece.kind.letter() {
        notation.push(letter);
    }

    if captured.is_some() {
        if piece.kind == PieceKind::Pawn {
            notation.push(from.file_char());
        }
        notation.push('x');
    }

    notation.push_str(&to.to_string());

    if promoted {
        notation.push_str("=Q");
    }

    notation
}
