//! Self-check filtering of pseudo-legal candidates.
//!
//! Each candidate is tried on a scratch copy of the board: the mover is
//! displaced (lifting any captured piece), the attack oracle is asked about
//! the mover's king, and the displacement is undone. The scratch board is
//! cloned once per call and then mutated in place.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::{generate_piece_moves, SafetyBudget};
use crate::moves::move_descriptions::{CandidateMove, GenerationMode, LastMove, MoveMap};

/// Legal destinations of `piece`. Castling arrives pre-filtered from the king
/// generator and is kept as is.
pub fn legal_moves(
    piece: &Piece,
    board: &Board,
    last_move: Option<&LastMove>,
    budget: SafetyBudget,
) -> MoveMap {
    let mut candidates = generate_piece_moves(piece, board, GenerationMode::Play, last_move, budget);
    let mut scratch = board.clone();
    let probe_budget = budget.descend();
    candidates.retain(|_, mv| {
        mv.kind.is_castle() || !leaves_king_attacked(&mut scratch, piece, mv, probe_budget)
    });
    candidates
}

/// Every legal `(piece, move)` pair for `color`.
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    last_move: Option<&LastMove>,
    budget: SafetyBudget,
) -> Vec<(Piece, CandidateMove)> {
    board
        .pieces_of(color)
        .flat_map(|piece| {
            legal_moves(piece, board, last_move, budget)
                .into_values()
                .map(move |mv| (*piece, mv))
        })
        .collect()
}

pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    last_move: Option<&LastMove>,
    budget: SafetyBudget,
) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !legal_moves(piece, board, last_move, budget).is_empty())
}

fn leaves_king_attacked(
    scratch: &mut Board,
    piece: &Piece,
    mv: &CandidateMove,
    budget: SafetyBudget,
) -> bool {
    let capture_at = mv.kind.captured().map(|victim| victim.square);
    let undo = scratch.displace(piece.square, mv.destination, capture_at);
    let king_square = if piece.kind == PieceKind::King {
        mv.destination
    } else {
        scratch.expect_king(piece.color).square
    };
    let attacked = is_square_attacked(scratch, king_square, piece.color.opposite(), budget);
    scratch.restore(undo);
    attacked
}
