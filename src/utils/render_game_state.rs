//! Terminal renderer for boards and sessions.
//!
//! Glyphs come from a fixed `(color, kind)` table. The board is drawn with
//! rank 8 on top, matching row 0 of the board model.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_session::GameSession;

/// Render the board to a string for terminal output. `unicode` selects chess
/// glyphs over FEN letters.
pub fn render_board(board: &Board, unicode: bool, highlights: &[Position]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let Some(pos) = Position::new(row, col) else {
                continue;
            };
            let glyph = match board.piece_at(pos) {
                Some(piece) if unicode => piece_to_unicode(piece),
                Some(piece) => piece_to_letter(piece),
                None if highlights.contains(&pos) => '*',
                None => '·',
            };
            out.push(glyph);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// `m:ss` clock display.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Move list paired by full move, e.g. `1. e4 e5`.
pub fn format_move_list(history: &[MoveHistoryEntry]) -> Vec<String> {
    history
        .chunks(2)
        .enumerate()
        .map(|(idx, pair)| match pair {
            [white, black] => format!("{}. {} {}", idx + 1, white.notation, black.notation),
            [white] => format!("{}. {}", idx + 1, white.notation),
            _ => String::new(),
        })
        .collect()
}

/// Full session view: black's clock and captures, board, white's clock and
/// captures, status line.
pub fn render_session(session: &GameSession, unicode: bool) -> String {
    let glyphs = |color: Color| -> String {
        session
            .captured()
            .by(color)
            .iter()
            .map(|piece| if unicode { piece_to_unicode(*piece) } else { piece_to_letter(*piece) })
            .collect()
    };

    let active = |color: Color| if session.to_move() == color { ">" } else { " " };

    let mut out = String::new();
    out.push_str(&format!(
        "{} black {}  {}\n",
        active(Color::Black),
        format_clock(session.clock().remaining(Color::Black)),
        glyphs(Color::Black)
    ));
    out.push_str(&render_board(session.board(), unicode, &session.legal_targets()));
    out.push('\n');
    out.push_str(&format!(
        "{} white {}  {}\n",
        active(Color::White),
        format_clock(session.clock().remaining(Color::White)),
        glyphs(Color::White)
    ));
    out.push_str(&session.status().to_string());
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

fn piece_to_letter(piece: Piece) -> char {
    let letter = piece.kind.letter().unwrap_or('P');
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}
