//! Legal move filtering.
//!
//! Generates pseudo-legal destinations, simulates each one as a plain
//! relocation on a scratch board, and drops any that leave the mover's king
//! attacked. Castling rook relocation and en passant removal are not replayed
//! during the simulation.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::moves::pseudo_legal::pseudo_legal_moves;

/// Legal destinations for the piece on `from`. Empty for an empty square.
///
/// A simulated board that has lost the mover's king keeps the candidate.
/// Use [`try_legal_moves`] to surface that condition instead.
pub fn legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|&to| match leaves_king_safe(board, from, to, piece.color) {
            Ok(safe) => safe,
            Err(err) => {
                log::warn!("keeping {from}->{to} unchecked: {err}");
                true
            }
        })
        .collect()
}

/// Like [`legal_moves`] but fails with [`ChessError::MissingKing`] when a
/// candidate cannot be checked because the mover has no king.
pub fn try_legal_moves(board: &Board, from: Position) -> ChessResult<Vec<Position>> {
    let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;

    let mut legal = Vec::new();
    for to in pseudo_legal_moves(board, from) {
        if leaves_king_safe(board, from, to, piece.color)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Every legal `(from, to)` pair for `color`, in board scan order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<(Position, Position)> {
    board
        .pieces(color)
        .flat_map(|(from, _)| legal_moves(board, from).into_iter().map(move |to| (from, to)))
        .collect()
}

fn leaves_king_safe(board: &Board, from: Position, to: Position, color: Color) -> ChessResult<bool> {
    let mut scratch = *board;
    scratch.set(to, board.piece_at(from));
    scratch.set(from, None);

    let king = king_square(&scratch, color).ok_or(ChessError::MissingKing(color))?;
    Ok(!is_square_attacked(&scratch, king, color.opposite()))
}
