//! Per-piece generator dispatch and the king-safety recursion budget.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_KING_SAFETY_DEPTH;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_descriptions::{GenerationMode, LastMove, MoveMap};
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Remaining nesting allowed for attack queries issued on behalf of king
/// safety (castling paths, self-check filtering).
///
/// Each nested query receives `descend()`; once exhausted, castling is no
/// longer offered. Self-check filtering runs at any budget.
///
/// Attack probes never generate castling, so nesting stops after one level
/// and every budget of 1 or more behaves the same. Zero only turns castling
/// off, which is why `GameSettings` refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SafetyBudget(u8);

impl SafetyBudget {
    #[inline]
    pub const fn new(depth: u8) -> Self {
        SafetyBudget(depth)
    }

    #[inline]
    pub const fn remaining(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn descend(self) -> Self {
        SafetyBudget(self.0.saturating_sub(1))
    }
}

impl Default for SafetyBudget {
    fn default() -> Self {
        SafetyBudget(DEFAULT_KING_SAFETY_DEPTH)
    }
}

/// Pseudo-legal destinations for `piece` (or its attacked squares when probing).
pub fn generate_piece_moves(
    piece: &Piece,
    board: &Board,
    mode: GenerationMode,
    last_move: Option<&LastMove>,
    budget: SafetyBudget,
) -> MoveMap {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board, mode, last_move),
        PieceKind::Knight => knight_moves(piece, board, mode),
        PieceKind::Bishop => bishop_moves(piece, board, mode),
        PieceKind::Rook => rook_moves(piece, board, mode),
        PieceKind::Queen => queen_moves(piece, board, mode),
        PieceKind::King => king_moves(piece, board, mode, budget),
    }
}
