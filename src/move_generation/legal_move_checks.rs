//! Attack oracle.
//!
//! A square is attacked by a color when any of that color's pieces has it in
//! its attack-probe move set. Probing never castles and never filters for
//! self-check, so these queries do not recurse back into king safety.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::move_generation::move_generator::{generate_piece_moves, SafetyBudget};
use crate::moves::move_descriptions::GenerationMode;

pub fn is_square_attacked(
    board: &Board,
    square: Square,
    attacker_color: Color,
    budget: SafetyBudget,
) -> bool {
    board.pieces_of(attacker_color).any(|piece| {
        generate_piece_moves(piece, board, GenerationMode::AttackProbe, None, budget)
            .contains_key(&square)
    })
}

/// Pieces of `attacker_color` that attack `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
    budget: SafetyBudget,
) -> Vec<Piece> {
    board
        .pieces_of(attacker_color)
        .filter(|piece| {
            generate_piece_moves(piece, board, GenerationMode::AttackProbe, None, budget)
                .contains_key(&square)
        })
        .copied()
        .collect()
}

/// Whether `color`'s king is attacked. Panics if that king is missing.
pub fn is_king_in_check(board: &Board, color: Color, budget: SafetyBudget) -> bool {
    let king = board.expect_king(color);
    is_square_attacked(board, king.square, color.opposite(), budget)
}
