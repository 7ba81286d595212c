//! Turn-based game session.
//!
//! `GameSession` owns the board, move history, captured pieces, clocks,
//! selection, and status. Every interaction goes through [`GameSession::handle`]
//! (or the by-value [`GameSession::apply`]) and is processed to completion;
//! status is recomputed after each change.

use serde::Serialize;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::captured::CapturedPieces;
use crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS;
use crate::game_state::chess_types::*;
use crate::game_state::clock::Clock;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_apply::{move_piece, try_move_piece, MoveResult};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A click on a square.
    Select(Position),
    /// One second of wall-clock time elapsed.
    Tick,
    Undo,
    NewGame,
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(Position),
    Deselected,
    Moved(MoveHistoryEntry),
    Ticked,
    Undone,
    Reset,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    initial_board: Board,
    initial_to_move: Color,
    initial_seconds: u32,
    board: Board,
    to_move: Color,
    selected: Option<Position>,
    history: Vec<MoveHistoryEntry>,
    captured: CapturedPieces,
    clock: Clock,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_SECONDS)
    }
}

impl GameSession {
    /// Standard start, white to move, `initial_seconds` on both clocks.
    pub fn new(initial_seconds: u32) -> Self {
        Self::from_position(Board::initial(), Color::White, initial_seconds)
    }

    /// Starts from an arbitrary placement. Undo and new game return here.
    pub fn from_position(board: Board, to_move: Color, initial_seconds: u32) -> Self {
        let clock = Clock::new(initial_seconds);
        Self {
            initial_board: board,
            initial_to_move: to_move,
            initial_seconds,
            board,
            to_move,
            selected: None,
            history: Vec::new(),
            captured: CapturedPieces::default(),
            clock,
            status: GameStatus::evaluate(&board, to_move, &clock),
        }
    }

    /// Rebuilds a session by replaying `history` from the standard start.
    /// Fails on the first entry that is not a legal move.
    pub fn from_history(history: &[MoveHistoryEntry], initial_seconds: u32) -> ChessResult<Self> {
        Self::replay(Board::initial(), Color::White, initial_seconds, history)
    }

    /// Rebuilds a session by replaying `history` from `board`.
    pub fn replay(board: Board, to_move: Color, initial_seconds: u32, history: &[MoveHistoryEntry]) -> ChessResult<Self> {
        let mut session = Self::from_position(board, to_move, initial_seconds);
        for entry in history {
            let result = try_move_piece(&session.board, entry.from, entry.to, session.to_move, &session.history)?;
            session.commit(result);
        }
        Ok(session)
    }

    /// Replaces both clocks, e.g. when resuming a saved game.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.refresh_status();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    pub fn initial_to_move(&self) -> Color {
        self.initial_to_move
    }

    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn history(&self) -> &[MoveHistoryEntry] {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Legal destinations of the selected piece, empty without a selection.
    pub fn legal_targets(&self) -> Vec<Position> {
        self.selected
            .map(|from| legal_moves(&self.board, from))
            .unwrap_or_default()
    }

    /// By-value transition.
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        self.handle(event);
        self
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        let outcome = match event {
            Event::Select(pos) => self.select(pos),
            Event::Tick => self.tick(),
            Event::Undo => self.undo(),
            Event::NewGame => self.reset(),
        };
        self.refresh_status();
        outcome
    }

    /// Convenience for two clicks: select `from`, then `to`.
    pub fn play(&mut self, from: Position, to: Position) -> ChessResult<MoveHistoryEntry> {
        self.selected = None;
        self.handle(Event::Select(from));
        match self.handle(Event::Select(to)) {
            Outcome::Moved(entry) => Ok(entry),
            _ => {
                self.selected = None;
                Err(ChessError::IllegalMove { from, to })
            }
        }
    }

    fn owns(&self, pos: Position) -> bool {
        matches!(self.board.piece_at(pos), Some(piece) if piece.color == self.to_move)
    }

    fn select(&mut self, pos: Position) -> Outcome {
        if self.status.is_terminal() {
            log::debug!("ignoring selection of {pos}: game over ({})", self.status.tag());
            return Outcome::Ignored;
        }

        let Some(from) = self.selected else {
            if self.owns(pos) {
                self.selected = Some(pos);
                return Outcome::Selected(pos);
            }
            return Outcome::Ignored;
        };

        if from == pos {
            self.selected = None;
            return Outcome::Deselected;
        }

        if self.owns(pos) {
            self.selected = Some(pos);
            return Outcome::Selected(pos);
        }

        match move_piece(&self.board, from, pos, self.to_move, &self.history) {
            Some(result) => {
                let entry = result.entry.clone();
                log::info!("{} plays {} ({from}->{pos})", self.to_move, entry.notation);
                self.commit(result);
                Outcome::Moved(entry)
            }
            // Selection survives an illegal target.
            None => Outcome::Ignored,
        }
    }

    fn commit(&mut self, result: MoveResult) {
        if let Some(piece) = result.captured {
            self.captured.record(self.to_move, piece);
        }
        self.board = result.new_board;
        self.history.push(result.entry);
        self.to_move = self.to_move.opposite();
        self.selected = None;
        self.refresh_status();
    }

    fn tick(&mut self) -> Outcome {
        if self.status != GameStatus::Ongoing {
            return Outcome::Ignored;
        }
        self.clock.tick(self.to_move);
        if self.clock.is_flagged() {
            log::info!("{} ran out of time", self.to_move);
        }
        Outcome::Ticked
    }

    fn undo(&mut self) -> Outcome {
        if self.history.pop().is_none() {
            return Outcome::Ignored;
        }

        let remaining = std::mem::take(&mut self.history);
        self.board = self.initial_board;
        self.to_move = self.initial_to_move;
        self.captured = CapturedPieces::default();
        self.selected = None;

        for entry in &remaining {
            match move_piece(&self.board, entry.from, entry.to, self.to_move, &self.history) {
                Some(result) => self.commit(result),
                None => log::warn!("skipping unreplayable history entry {}", entry.notation),
            }
        }
        log::info!("undo: {} moves replayed", self.history.len());
        Outcome::Undone
    }

    fn reset(&mut self) -> Outcome {
        *self = Self::from_position(self.initial_board, self.initial_to_move, self.initial_seconds);
        log::info!("new game");
        Outcome::Reset
    }

    fn refresh_status(&mut self) {
        let status = GameStatus::evaluate(&self.board, self.to_move, &self.clock);
        if status != self.status {
            log::info!("status: {} -> {}", self.status.tag(), status.tag());
            self.status = status;
        }
    }
}
