//! Canonical chess-rule constants.
//!
//! Stores the standard starting placement and the default clock budget used
//! to set up a fresh game session.

use crate::game_state::chess_types::PieceKind;

/// Piece placement field of the standard starting position in FEN.
pub const STARTING_PLACEMENT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Seconds on each clock at the start of a game (five minutes).
pub const DEFAULT_CLOCK_SECONDS: u32 = 300;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
