//! Captured pieces, keyed by the side that made the capture.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Piece};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn record(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Pieces taken by `capturer`, in capture order.
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn material(&self, capturer: Color) -> u32 {
        self.by(capturer).iter().map(|piece| piece.kind.material()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn records_in_order_per_capturer() {
        let mut captured = CapturedPieces::default();
        captured.record(Color::White, Piece::new(PieceKind::Pawn, Color::Black));
        captured.record(Color::White, Piece::new(PieceKind::Rook, Color::Black));
        captured.record(Color::Black, Piece::new(PieceKind::Knight, Color::White));

        assert_eq!(captured.by(Color::White).len(), 2);
        assert_eq!(captured.by(Color::White)[1].kind, PieceKind::Rook);
        assert_eq!(captured.material(Color::White), 6);
        assert_eq!(captured.material(Color::Black), 3);
    }
}
