//! Move execution.
//!
//! `apply_move` performs the geometric execution on a fresh copy of the
//! board: castling rook relocation when a king travels two columns, en
//! passant removal when a pawn moves diagonally onto an empty square, and
//! automatic promotion to a queen. `move_piece` validates ownership and
//! legality first and is the only entry point the game session uses.

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_notation::move_notation;

/// Outcome of an executed move; `board` is independent of the input board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub new_board: Board,
    pub captured: Option<Piece>,
    pub entry: MoveHistoryEntry,
}

/// Executes `from -> to` without any legality check. Returns `None` only when
/// `from` is empty.
pub fn apply_move(board: &Board, from: Position, to: Position) -> Option<MoveResult> {
    let piece = board.piece_at(from)?;
    let mut next = *board;

    if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        let (rook_col, landing) = if to.col() > from.col() {
            (7, to.offset(0, -1))
        } else {
            (0, to.offset(0, 1))
        };
        if let (Some(rook_from), Some(landing)) = (Position::new(from.row(), rook_col), landing) {
            next.set(landing, next.piece_at(rook_from));
            next.set(rook_from, None);
        }
    }

    if piece.kind == PieceKind::Pawn && from.col() != to.col() && next.is_empty_at(to) {
        if let Some(victim) = Position::new(from.row(), to.col()) {
            next.set(victim, None);
        }
    }

    let promoted = piece.kind == PieceKind::Pawn && (to.row() == 0 || to.row() == 7);
    let placed = if promoted {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    };

    let captured = next.piece_at(to);
    next.set(to, Some(placed));
    next.set(from, None);

    let notation = move_notation(board, from, to, captured, promoted);

    Some(MoveResult {
        new_board: next,
        captured,
        entry: MoveHistoryEntry { from, to, notation },
    })
}

/// Validated move execution. `None` when `from` is empty, holds a piece of
/// the other side, or `to` is not one of its legal destinations. The caller's
/// board is never modified.
///
/// `history` is accepted for API parity with the session and does not
/// influence the result.
pub fn move_piece(
    board: &Board,
    from: Position,
    to: Position,
    current_player: Color,
    history: &[MoveHistoryEntry],
) -> Option<MoveResult> {
    match try_move_piece(board, from, to, current_player, history) {
        Ok(result) => Some(result),
        Err(err) => {
            log::debug!("rejected move: {err}");
            None
        }
    }
}

/// [`move_piece`] with the rejection reason.
pub fn try_move_piece(
    board: &Board,
    from: Position,
    to: Position,
    current_player: Color,
    _history: &[MoveHistoryEntry],
) -> ChessResult<MoveResult> {
    let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    if piece.color != current_player {
        return Err(ChessError::WrongColor {
            position: from,
            expected: current_player,
        });
    }
    if !legal_moves(board, from).contains(&to) {
        return Err(ChessError::IllegalMove { from, to });
    }
    apply_move(board, from, to).ok_or(ChessError::EmptySquare(from))
}
