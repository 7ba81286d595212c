//! Per-piece dispatch of pseudo-legal destination generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations of the piece on `from`, ignoring self-check. Empty when the
/// square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color),
        PieceKind::Knight => knight_moves(board, from, piece.color),
        PieceKind::Bishop => bishop_moves(board, from, piece.color),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color),
        PieceKind::King => king_moves(board, from, piece.color),
    }
}
