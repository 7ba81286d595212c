//! Square conversions between algebraic coordinates and board positions.
//!
//! `e2` is `(row 6, col 4)`: rows count down from rank 8.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a board position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Position::new(b'8' - rank, file - b'a').ok_or_else(|| ChessError::InvalidAlgebraic(square.to_owned()))
}

#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::chess_types::Position;

    #[test]
    fn corner_and_centre_conversions() {
        assert_eq!(algebraic_to_position("a8").expect("a8 should parse"), Position::new(0, 0).unwrap());
        assert_eq!(algebraic_to_position("h1").expect("h1 should parse"), Position::new(7, 7).unwrap());
        assert_eq!(algebraic_to_position("E2").expect("upper-case file"), Position::new(6, 4).unwrap());
        assert_eq!(position_to_algebraic(Position::new(4, 4).unwrap()), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e9", "i1", "e22", "4e"] {
            assert!(algebraic_to_position(bad).is_err(), "{bad} should not parse");
        }
    }
}
