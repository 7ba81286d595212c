use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::slider::step;

pub fn knight_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(8);
    step(board, from, color, &KNIGHT_OFFSETS, &mut out);
    out
}
