use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::slider::slide;

pub fn rook_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    slide(board, from, color, &ROOK_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square on board")
    }

    #[test]
    fn rook_on_empty_d4_reaches_fourteen_squares() {
        let d4 = pos(4, 3);
        let board = Board::empty().with_piece(d4, Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(rook_moves(&board, d4, Color::White).len(), 14);
    }

    #[test]
    fn rook_stops_at_first_blocker() {
        let a1 = pos(7, 0);
        let board = Board::empty()
            .with_piece(a1, Some(Piece::new(PieceKind::Rook, Color::White)))
            .with_piece(pos(4, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)))
            .with_piece(pos(7, 2), Some(Piece::new(PieceKind::Knight, Color::White)));

        let moves = rook_moves(&board, a1, Color::White);
        assert!(moves.contains(&pos(4, 0)), "enemy blocker is capturable");
        assert!(!moves.contains(&pos(3, 0)), "nothing beyond the enemy blocker");
        assert!(moves.contains(&pos(7, 1)));
        assert!(!moves.contains(&pos(7, 2)), "own blocker is excluded");
        assert!(!moves.contains(&pos(7, 3)));
        assert_eq!(moves.len(), 4);
    }
}
