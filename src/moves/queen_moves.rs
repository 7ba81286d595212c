use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::slider::slide;

/// Union of rook and bishop rays from the same square.
pub fn queen_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(27);
    slide(board, from, color, &ROOK_DIRECTIONS, &mut out);
    slide(board, from, color, &BISHOP_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_on_empty_d4_reaches_twenty_seven_squares() {
        let d4 = Position::new(4, 3).expect("d4");
        let board = Board::empty().with_piece(d4, Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(queen_moves(&board, d4, Color::White).len(), 27);
    }
}
