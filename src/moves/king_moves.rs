//! King step generation. Castling is executed by the move applier on the
//! two-column pattern but is never generated here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::slider::step;

pub fn king_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(8);
    step(board, from, color, &KING_OFFSETS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_never_generates_castling_steps() {
        let e1 = Position::new(7, 4).expect("e1");
        let board = Board::initial()
            .with_piece(Position::new(7, 5).unwrap(), None)
            .with_piece(Position::new(7, 6).unwrap(), None);
        let moves = king_moves(&board, e1, Color::White);
        assert_eq!(moves, vec![Position::new(7, 5).unwrap()]);
    }

    #[test]
    fn lone_king_in_centre_has_eight_steps() {
        let e4 = Position::new(4, 4).expect("e4");
        let board = Board::empty().with_piece(e4, Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(king_moves(&board, e4, Color::White).len(), 8);
    }
}
