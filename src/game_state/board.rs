//! 8x8 board snapshot.
//!
//! `Board` is plain data: every mutation produces a new copy and no rule is
//! enforced at this layer.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(*kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Returns a copy of this board with `pos` set to `piece`.
    #[must_use]
    pub fn with_piece(mut self, pos: Position, piece: Option<Piece>) -> Self {
        self.set(pos, piece);
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Scans for the king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        Position::all().find(|pos| {
            self.piece_at(*pos) == Some(Piece::new(PieceKind::King, color))
        })
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.piece_at(pos) {
            Some(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}
