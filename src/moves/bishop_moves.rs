//! Bishop destinations: four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::{GenerationMode, MoveMap};
use crate::moves::step_moves::line_moves;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

pub fn bishop_moves(piece: &Piece, board: &Board, mode: GenerationMode) -> MoveMap {
    let mut out = MoveMap::new();
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        line_moves(piece, board, d_file, d_rank, mode, &mut out);
    }
    out
}
