//! Saved games as YAML.
//!
//! The starting placement, the history and the clocks are stored. Loading
//! replays the history through the rules engine, so a tampered file cannot
//! produce an impossible position.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, MoveHistoryEntry};
use crate::game_state::clock::Clock;
use crate::game_state::game_session::GameSession;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Serialize, Deserialize)]
struct SavedGame {
    start: String,
    to_move: Color,
    initial_seconds: u32,
    moves: Vec<MoveHistoryEntry>,
    /// Remaining time per side. Files without it resume on full clocks.
    #[serde(default)]
    clock: Option<Clock>,
}

pub fn session_to_yaml(session: &GameSession) -> ChessResult<String> {
    let saved = SavedGame {
        start: generate_placement(session.initial_board()),
        to_move: session.initial_to_move(),
        initial_seconds: session.initial_seconds(),
        moves: session.history().to_vec(),
        clock: Some(*session.clock()),
    };
    serde_yaml::to_string(&saved).map_err(|err| ChessError::Config(err.to_string()))
}

pub fn session_from_yaml(content: &str) -> ChessResult<GameSession> {
    let saved: SavedGame = serde_yaml::from_str(content).map_err(|err| ChessError::Config(err.to_string()))?;
    let board = parse_placement(&saved.start)?;
    let session = GameSession::replay(board, saved.to_move, saved.initial_seconds, &saved.moves)?;
    Ok(match saved.clock {
        Some(clock) => session.with_clock(clock),
        None => session,
    })
}

pub fn save_session(path: &Path, session: &GameSession) -> ChessResult<()> {
    fs::write(path, session_to_yaml(session)?)?;
    log::info!("saved {} moves to {}", session.history().len(), path.display());
    Ok(())
}

pub fn load_session(path: &Path) -> ChessResult<GameSession> {
    session_from_yaml(&fs::read_to_string(path)?)
}
