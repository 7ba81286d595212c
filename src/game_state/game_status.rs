//! Derived game status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::clock::Clock;
use crate::move_generation::legal_move_checks::{is_check, is_checkmate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    /// The named side is in check.
    Check(Color),
    Checkmate { winner: Color },
    Timeout,
}

impl GameStatus {
    /// Recomputes status for the side to move. A flagged clock wins over
    /// every board condition, then checkmate, then check.
    pub fn evaluate(board: &Board, to_move: Color, clock: &Clock) -> Self {
        if clock.is_flagged() {
            GameStatus::Timeout
        } else if is_checkmate(board, to_move) {
            GameStatus::Checkmate {
                winner: to_move.opposite(),
            }
        } else if is_check(board, to_move) {
            GameStatus::Check(to_move)
        } else {
            GameStatus::Ongoing
        }
    }

    pub const fn mated(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner.opposite()),
            _ => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Timeout)
    }

    /// Status tag as shown by the presentation layer, e.g. `check-white`.
    pub fn tag(self) -> String {
        match self {
            GameStatus::Ongoing => "ongoing".to_owned(),
            GameStatus::Check(color) => format!("check-{color}"),
            GameStatus::Checkmate { winner } => format!("checkmate-{winner}"),
            GameStatus::Timeout => "timeout".to_owned(),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("Game in progress"),
            GameStatus::Check(color) => write!(f, "{} is in check!", color.title()),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner.title()),
            GameStatus::Timeout => f.write_str("Time out!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn fresh_game_is_ongoing() {
        let status = GameStatus::evaluate(&Board::initial(), Color::White, &Clock::default());
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(status.tag(), "ongoing");
        assert!(!status.is_terminal());
    }

    #[test]
    fn flagged_clock_beats_board_conditions() {
        let mut clock = Clock::new(1);
        clock.tick(Color::White);
        let status = GameStatus::evaluate(&Board::initial(), Color::White, &clock);
        assert_eq!(status, GameStatus::Timeout);
        assert!(status.is_terminal());
    }

    #[test]
    fn checkmate_tag_names_the_winner() {
        let at = |row, col| Position::new(row, col).expect("on board");
        let board = Board::empty()
            .with_piece(at(7, 4), Some(Piece::new(PieceKind::King, Color::White)))
            .with_piece(at(6, 4), Some(Piece::new(PieceKind::Queen, Color::Black)))
            .with_piece(at(1, 4), Some(Piece::new(PieceKind::Rook, Color::Black)))
            .with_piece(at(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        let status = GameStatus::evaluate(&board, Color::White, &Clock::default());
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Black });
        assert_eq!(status.mated(), Some(Color::White));
        assert_eq!(status.tag(), "checkmate-black");
        assert_eq!(status.to_string(), "Checkmate! Black wins!");
    }

    #[test]
    fn messages_match_the_status_banner() {
        assert_eq!(GameStatus::Ongoing.to_string(), "Game in progress");
        assert_eq!(GameStatus::Check(Color::White).to_string(), "White is in check!");
        assert_eq!(GameStatus::Check(Color::Black).to_string(), "Black is in check!");
        assert_eq!(GameStatus::Timeout.to_string(), "Time out!");
    }
}
