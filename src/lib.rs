//! Crate root module declarations for the chess clock engine.
//!
//! Exposes the board model and game session (`game_state`), per-piece move
//! generation (`moves`), legality, execution, and notation
//! (`move_generation`), and text utilities used by the terminal driver.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod captured;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod clock;
    pub mod game_session;
    pub mod game_status;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod pseudo_legal;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_notation;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod config;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
    pub mod session_file;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, MoveHistoryEntry, Piece, PieceKind, Position};
pub use game_state::game_session::{Event, GameSession, Outcome};
pub use game_state::game_status::GameStatus;
pub use move_generation::legal_move_apply::{move_piece, MoveResult};
pub use move_generation::legal_move_checks::{is_check, is_checkmate};
pub use move_generation::legal_move_generator::legal_moves;

/// Fresh board in the standard starting position.
pub fn initialize_board() -> Board {
    Board::initial()
}
