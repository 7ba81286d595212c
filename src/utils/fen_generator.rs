//! Board-to-FEN placement generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            let Some(piece) = Position::new(row, col).and_then(|pos| board.piece_at(pos)) else {
                empty_run += 1;
                continue;
            };
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
                empty_run = 0;
            }
            out.push(piece_to_fen_char(piece));
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

/// Full FEN with `side` to move. Castling and en passant fields are always
/// `-` since the engine tracks neither.
pub fn generate_fen(board: &Board, side: Color) -> String {
    let side = match side {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {side} - - 0 1", generate_placement(board))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, generate_placement};
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_PLACEMENT_FEN;
    use crate::move_generation::legal_move_apply::move_piece;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::{parse_placement, parse_side_to_move};

    #[test]
    fn initial_board_generates_starting_placement() {
        assert_eq!(generate_placement(&Board::initial()), STARTING_PLACEMENT_FEN);
    }

    #[test]
    fn placement_after_e4() {
        let e2 = Position::new(6, 4).unwrap();
        let e4 = Position::new(4, 4).unwrap();
        let result = move_piece(&Board::initial(), e2, e4, Color::White, &[]).expect("e4 is legal");
        let fen = generate_placement(&result.new_board);
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
        assert_eq!(parse_placement(&fen).expect("generated FEN parses"), result.new_board);
    }

    #[test]
    fn full_fen_carries_side_to_move() {
        let fen = generate_fen(&Board::initial(), Color::Black);
        assert_eq!(fen, format!("{STARTING_PLACEMENT_FEN} b - - 0 1"));
        assert_eq!(parse_side_to_move(&fen).expect("side field parses"), Color::Black);
    }
}
