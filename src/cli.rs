//! Command-line arguments and the interactive command grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chess_clock_engine::utils::algebraic::algebraic_to_position;
use chess_clock_engine::{ChessResult, Position};

#[derive(Parser, Debug)]
#[command(name = "chess_clock", version, about = "Two-player chess with countdown clocks")]
pub struct Cli {
    /// YAML configuration file. Falls back to CHESS_CLOCK_CONFIG.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seconds per side, overriding the configuration.
    #[arg(long)]
    pub seconds: Option<u32>,

    /// Start from a FEN placement instead of the standard position.
    #[arg(long)]
    pub fen: Option<String>,

    /// Resume a game saved with `save`.
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Draw pieces as letters instead of chess glyphs.
    #[arg(long)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count leaf positions from the start position.
    Perft {
        depth: u8,
        /// Print per-move node counts.
        #[arg(long)]
        divide: bool,
    },
}

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(Position),
    Move(Position, Position),
    Undo,
    NewGame,
    Board,
    Moves,
    Pgn,
    Save(PathBuf),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> ChessResult<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "undo" | "u" => Command::Undo,
        "new" | "reset" => Command::NewGame,
        "board" | "b" => Command::Board,
        "moves" | "m" => Command::Moves,
        "pgn" => Command::Pgn,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "save" => Command::Save(PathBuf::from(words.next().unwrap_or("game.yaml"))),
        square if square.len() == 4 && square.is_ascii() => {
            Command::Move(algebraic_to_position(&square[..2])?, algebraic_to_position(&square[2..])?)
        }
        square => {
            let from = algebraic_to_position(square)?;
            match words.next() {
                Some(to) => Command::Move(from, algebraic_to_position(to)?),
                None => Command::Select(from),
            }
        }
    };

    Ok(Some(command))
}

pub const HELP: &str = "\
commands:
  e2          select (or deselect) a square
  e2 e4       move; also e2e4
  undo        take back the last move
  new         start over
  board       redraw the board
  moves       list moves played
  pgn         print the game as PGN
  save [file] save the game (default game.yaml)
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square on board")
    }

    #[test]
    fn parses_squares_and_moves() {
        assert_eq!(parse_command("e2").unwrap(), Some(Command::Select(pos(6, 4))));
        assert_eq!(parse_command("e2 e4").unwrap(), Some(Command::Move(pos(6, 4), pos(4, 4))));
        assert_eq!(parse_command("g1f3").unwrap(), Some(Command::Move(pos(7, 6), pos(5, 5))));
        assert_eq!(parse_command("  ").unwrap(), None);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_command("undo").unwrap(), Some(Command::Undo));
        assert_eq!(parse_command("NEW").unwrap(), Some(Command::NewGame));
        assert_eq!(parse_command("save x.yaml").unwrap(), Some(Command::Save(PathBuf::from("x.yaml"))));
        assert!(parse_command("z9").is_err());
    }
}
