//! Knight destinations: eight fixed jumps filtered by board bounds.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::{GenerationMode, MoveMap};
use crate::moves::step_moves::step_set;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (-1, -2),
    (1, -2),
    (-2, 1),
    (-2, -1),
];

pub fn knight_moves(piece: &Piece, board: &Board, mode: GenerationMode) -> MoveMap {
    let mut out = MoveMap::new();
    step_set(piece, board, &KNIGHT_OFFSETS, mode, &mut out);
    out
}
