//! Rook destinations: four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::{GenerationMode, MoveMap};
use crate::moves::step_moves::line_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub fn rook_moves(piece: &Piece, board: &Board, mode: GenerationMode) -> MoveMap {
    let mut out = MoveMap::new();
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        line_moves(piece, board, d_file, d_rank, mode, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::GenerationMode;

    #[test]
    fn rook_on_d4_has_fourteen_squares() {
        let d4 = Square::new(3, 3).expect("d4");
        let rook = Piece::new(Color::White, PieceKind::Rook, d4);
        let mut board = Board::empty();
        board.place(rook);
        assert_eq!(rook_moves(&rook, &board, GenerationMode::Play).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Square::new(0, 0).expect("a1");
        let a4 = Square::new(0, 3).expect("a4");
        let a5 = Square::new(0, 4).expect("a5");
        let rook = Piece::new(Color::White, PieceKind::Rook, a1);
        let mut board = Board::empty();
        board.place(rook);
        board.place(Piece::new(Color::Black, PieceKind::Knight, a4));

        let moves = rook_moves(&rook, &board, GenerationMode::Play);
        assert!(moves.contains_key(&a4));
        assert!(!moves.contains_key(&a5));
    }
}
