//! Single-step and sliding-ray move probes.
//!
//! Every per-piece generator is composed from these two primitives. Both
//! respect board edges; friendly occupants are skipped in `Play` mode and
//! counted (as defended squares) in `AttackProbe` mode.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::{CandidateMove, GenerationMode, MoveKind, MoveMap};

/// One candidate destination at `(d_file, d_rank)` from `piece`.
pub fn single_step(
    piece: &Piece,
    board: &Board,
    d_file: i8,
    d_rank: i8,
    mode: GenerationMode,
) -> Option<CandidateMove> {
    let target = piece.square.offset(d_file, d_rank)?;
    match board.get(target) {
        None => Some(CandidateMove::new(target, MoveKind::Quiet)),
        Some(occupant) if occupant.color == piece.color && mode == GenerationMode::Play => None,
        Some(occupant) => Some(CandidateMove::new(target, MoveKind::Capture(*occupant))),
    }
}

/// Adds every step of `offsets` that lands on a usable square.
pub fn step_set(
    piece: &Piece,
    board: &Board,
    offsets: &[(i8, i8)],
    mode: GenerationMode,
    out: &mut MoveMap,
) {
    for &(d_file, d_rank) in offsets {
        if let Some(mv) = single_step(piece, board, d_file, d_rank, mode) {
            out.insert(mv.destination, mv);
        }
    }
}

/// Slides from `piece` along `(d_file, d_rank)` until the edge or the first
/// occupied square. That square is included when it holds an enemy, or any
/// piece while probing attacks.
pub fn line_moves(
    piece: &Piece,
    board: &Board,
    d_file: i8,
    d_rank: i8,
    mode: GenerationMode,
    out: &mut MoveMap,
) {
    let mut current = piece.square;
    while let Some(next) = current.offset(d_file, d_rank) {
        match board.get(next) {
            None => {
                out.insert(next, CandidateMove::new(next, MoveKind::Quiet));
            }
            Some(occupant) => {
                if occupant.color != piece.color || mode == GenerationMode::AttackProbe {
                    out.insert(next, CandidateMove::new(next, MoveKind::Capture(*occupant)));
                }
                break;
            }
        }
        current = next;
    }
}
