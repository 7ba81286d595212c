//! PGN export of a session's move history.
//!
//! Movetext uses the engine's own notation, so check suffixes and
//! disambiguation are absent.

use chrono::Local;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_session::GameSession;
use crate::game_state::game_status::GameStatus;
use crate::utils::fen_generator::generate_fen;

pub fn result_token(session: &GameSession) -> &'static str {
    match session.status() {
        GameStatus::Checkmate { winner: Color::White } => "1-0",
        GameStatus::Checkmate { winner: Color::Black } => "0-1",
        GameStatus::Timeout => match session.clock().flagged_color() {
            Some(Color::White) => "0-1",
            Some(Color::Black) => "1-0",
            None => "*",
        },
        _ => "*",
    }
}

/// Seven Tag Roster in standard order, plus `SetUp`/`FEN` for games that do
/// not begin from the initial position.
pub fn write_pgn(session: &GameSession) -> String {
    let mut headers: Vec<(String, String)> = vec![
        ("Event".to_owned(), "Casual Game".to_owned()),
        ("Site".to_owned(), "Local".to_owned()),
        ("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string()),
        ("Round".to_owned(), "-".to_owned()),
        ("White".to_owned(), "White".to_owned()),
        ("Black".to_owned(), "Black".to_owned()),
        ("Result".to_owned(), result_token(session).to_owned()),
    ];

    if *session.initial_board() != Board::initial() || session.initial_to_move() != Color::White {
        headers.push(("SetUp".to_owned(), "1".to_owned()));
        headers.push((
            "FEN".to_owned(),
            generate_fen(session.initial_board(), session.initial_to_move()),
        ));
    }
    if session.status() == GameStatus::Timeout {
        headers.push(("Termination".to_owned(), "time forfeit".to_owned()));
    }

    write_pgn_with_headers(session, &headers)
}

/// Writes `headers` in the given order followed by the movetext.
pub fn write_pgn_with_headers(session: &GameSession, headers: &[(String, String)]) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // A black first move opens as "1..." and white continues at "2."
    let first_ply = usize::from(session.initial_to_move() == Color::Black);
    let mut movetext_parts = Vec::<String>::with_capacity(session.history().len() + 1);
    for (index, entry) in session.history().iter().enumerate() {
        let ply = index + first_ply;
        let number = (ply / 2) + 1;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{number}. {}", entry.notation));
        } else if index == 0 {
            movetext_parts.push(format!("{number}... {}", entry.notation));
        } else {
            movetext_parts.push(entry.notation.clone());
        }
    }

    let result = headers
        .iter()
        .find(|(key, _)| key == "Result")
        .map(|(_, value)| value.as_str())
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Position;
    use crate::utils::fen_parser::parse_placement;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square on board")
    }

    #[test]
    fn fools_mate_exports_black_win() {
        let mut session = GameSession::default();
        session.play(pos(6, 5), pos(5, 5)).expect("f3");
        session.play(pos(1, 4), pos(3, 4)).expect("e5");
        session.play(pos(6, 6), pos(4, 6)).expect("g4");
        session.play(pos(0, 3), pos(4, 7)).expect("Qh4");

        let pgn = write_pgn(&session);
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(pgn.ends_with("1. f3 e5 2. g4 Qh4 0-1\n"));
    }

    #[test]
    fn unfinished_game_has_open_result() {
        let headers = vec![("Event".to_owned(), "Club \"Open\"".to_owned())];
        let pgn = write_pgn_with_headers(&GameSession::default(), &headers);
        assert_eq!(pgn, "[Event \"Club \\\"Open\\\"\"]\n\n*\n");
    }

    #[test]
    fn headers_follow_seven_tag_roster_order() {
        let pgn = write_pgn(&GameSession::default());
        let tags: Vec<&str> = pgn
            .lines()
            .take_while(|line| line.starts_with('['))
            .filter_map(|line| line[1..].split(' ').next())
            .collect();
        assert_eq!(tags, ["Event", "Site", "Date", "Round", "White", "Black", "Result"]);
    }

    #[test]
    fn custom_start_with_black_to_move_carries_fen() {
        let board = parse_placement("4k3/8/8/8/8/8/4P3/4K3").expect("placement parses");
        let mut session = GameSession::from_position(board, Color::Black, 300);
        session.play(pos(0, 4), pos(0, 3)).expect("Kd8");
        session.play(pos(6, 4), pos(4, 4)).expect("e4");
        session.play(pos(0, 3), pos(0, 2)).expect("Kc8");

        let pgn = write_pgn(&session);
        assert!(pgn.contains("[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 1\"]\n"));
        assert!(pgn.ends_with("\n1... Kd8 2. e4 Kc8 *\n"));
    }
}
