//! Ray scanning shared by rook, bishop, and queen generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Walks each direction from `from` until the edge or the first occupied
/// square. An opposing piece on that square is included; an own piece is not.
pub fn slide(board: &Board, from: Position, color: Color, directions: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(piece) => {
                    if piece.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Single-step targets for knight and king offsets.
pub fn step(board: &Board, from: Position, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(to),
        }
    }
}
