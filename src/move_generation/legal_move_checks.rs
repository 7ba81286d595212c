//! Attack detection, check, and checkmate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.find_king(color)
}

/// True when any piece of `by` could move onto `target` in one pseudo-legal
/// move. Checks run pawn, knight, orthogonal, diagonal, then king, each
/// returning on the first hit.
pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    attacked_by_pawn(board, target, by)
        || attacked_by_step(board, target, by, &KNIGHT_OFFSETS, PieceKind::Knight)
        || attacked_along_rays(board, target, by, &ROOK_DIRECTIONS, PieceKind::Rook)
        || attacked_along_rays(board, target, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
        || attacked_by_step(board, target, by, &KING_OFFSETS, PieceKind::King)
}

fn attacked_by_pawn(board: &Board, target: Position, by: Color) -> bool {
    let pawn = Some(Piece::new(PieceKind::Pawn, by));
    [-1i8, 1].into_iter().any(|d_col| {
        target
            .offset(-by.forward(), d_col)
            .is_some_and(|from| board.piece_at(from) == pawn)
    })
}

fn attacked_by_step(board: &Board, target: Position, by: Color, offsets: &[(i8, i8)], kind: PieceKind) -> bool {
    let attacker = Some(Piece::new(kind, by));
    offsets.iter().any(|&(d_row, d_col)| {
        target
            .offset(d_row, d_col)
            .is_some_and(|from| board.piece_at(from) == attacker)
    })
}

/// The first occupied square on each ray must be a `slider` or queen of `by`.
fn attacked_along_rays(board: &Board, target: Position, by: Color, directions: &[(i8, i8)], slider: PieceKind) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = target;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}

/// Whether the king of `color` is attacked. A board without that king is
/// never in check.
pub fn is_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        log::warn!("is_check called on a board without a {color} king");
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// In check with no legal reply. Stalemate is not detected.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_check(board, color) && !has_any_legal_move(board, color)
}
