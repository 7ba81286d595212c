use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::slider::slide;

pub fn bishop_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(13);
    slide(board, from, color, &BISHOP_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_on_empty_d4_reaches_thirteen_squares() {
        let d4 = Position::new(4, 3).expect("d4");
        let board = Board::empty().with_piece(d4, Some(Piece::new(PieceKind::Bishop, Color::Black)));
        assert_eq!(bishop_moves(&board, d4, Color::Black).len(), 13);
    }

    #[test]
    fn bishops_are_boxed_in_at_start() {
        let board = Board::initial();
        let c1 = Position::new(7, 2).expect("c1");
        assert!(bishop_moves(&board, c1, Color::White).is_empty());
    }
}
