//! Perft node counting over this engine's move rules.
//!
//! Castling and en passant are never generated, so counts diverge from
//! standard tables once those moves become reachable (depth 5 and beyond
//! from the starting position).

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_check};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    /// King moves of two files. Only reachable from hand-built positions
    /// through `apply_move`, so zero for generated trees.
    pub castles: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in all_legal_moves(board, to_move) {
        let Some(result) = apply_move(board, from, to) else {
            continue;
        };

        if depth == 1 {
            let defender = to_move.opposite();
            let in_check = is_check(&result.new_board, defender);
            total.merge(PerftCounts {
                nodes: 1,
                captures: u64::from(result.captured.is_some()),
                promotions: u64::from(result.entry.notation.ends_with("=Q")),
                castles: u64::from(result.entry.notation.starts_with("O-O")),
                checks: u64::from(in_check),
                checkmates: u64::from(in_check && !has_any_legal_move(&result.new_board, defender)),
            });
        } else {
            total.merge(perft(&result.new_board, to_move.opposite(), depth - 1));
        }
    }

    total
}

/// Node counts per root move, sorted by notation.
pub fn perft_divide(board: &Board, to_move: Color, depth: u8) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = all_legal_moves(board, to_move)
        .into_iter()
        .filter_map(|(from, to)| apply_move(board, from, to))
        .map(|result| {
            let nodes = perft(&result.new_board, to_move.opposite(), depth.saturating_sub(1)).nodes;
            (result.entry.notation, nodes)
        })
        .collect();
    out.sort();
    out
}
