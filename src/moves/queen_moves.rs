//! Queen destinations: union of rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::move_descriptions::{GenerationMode, MoveMap};
use crate::moves::rook_moves::rook_moves;

pub fn queen_moves(piece: &Piece, board: &Board, mode: GenerationMode) -> MoveMap {
    let mut out = rook_moves(piece, board, mode);
    out.extend(bishop_moves(piece, board, mode));
    out
}
