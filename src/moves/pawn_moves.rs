//! Pawn pushes and diagonal captures. En passant is not generated.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn pawn_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(4);
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if matches!(board.piece_at(to), Some(piece) if piece.color != color) {
            out.push(to);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square on board")
    }

    #[test]
    fn starting_pawns_have_single_and_double_push() {
        let board = Board::initial();
        for col in 0..8 {
            assert_eq!(pawn_moves(&board, pos(6, col), Color::White), vec![pos(5, col), pos(4, col)]);
            assert_eq!(pawn_moves(&board, pos(1, col), Color::Black), vec![pos(2, col), pos(3, col)]);
        }
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::initial().with_piece(pos(5, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(pawn_moves(&board, pos(6, 4), Color::White).is_empty());

        let board = Board::initial().with_piece(pos(4, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(pawn_moves(&board, pos(6, 4), Color::White), vec![pos(5, 4)]);
    }

    #[test]
    fn pawn_captures_only_enemies_diagonally() {
        let board = Board::empty()
            .with_piece(pos(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)))
            .with_piece(pos(3, 3), Some(Piece::new(PieceKind::Rook, Color::Black)))
            .with_piece(pos(3, 5), Some(Piece::new(PieceKind::Rook, Color::White)))
            .with_piece(pos(3, 4), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(pawn_moves(&board, pos(4, 4), Color::White), vec![pos(3, 3)]);
    }

    #[test]
    fn empty_diagonal_is_not_en_passant() {
        // Black pawn just double-pushed beside the white pawn.
        let board = Board::empty()
            .with_piece(pos(3, 4), Some(Piece::new(PieceKind::Pawn, Color::White)))
            .with_piece(pos(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(pawn_moves(&board, pos(3, 4), Color::White), vec![pos(2, 4)]);
    }
}
