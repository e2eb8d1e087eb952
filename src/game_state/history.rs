//! Committed move records.
//!
//! A `HistoryEntry` keeps the moving piece exactly as it stood before the
//! move, which is everything needed to walk the board backwards again.

use crate::game_state::chess_types::{Piece, PromotionKind, Square};
use crate::moves::move_descriptions::{LastMove, MoveKind};

/// How much of the origin square notation must spell out to tell the moving
/// piece apart from another piece of the same kind that could also reach the
/// destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disambiguation {
    #[default]
    None,
    File,
    Rank,
    Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique across the whole game, including truncated branches.
    pub id: u64,
    /// Snapshot of the mover before the move (origin square, moved flag, kind).
    pub moved_piece: Piece,
    pub destination: Square,
    pub kind: MoveKind,
    /// Whether this move reached the last rank with a pawn.
    pub promotes: bool,
    /// Chosen promotion, attached after the commit.
    pub promotion: Option<PromotionKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub disambiguation: Disambiguation,
}

impl HistoryEntry {
    #[inline]
    pub fn last_move(&self) -> LastMove {
        LastMove {
            piece: self.moved_piece,
            destination: self.destination,
        }
    }

    #[inline]
    pub fn is_awaiting_promotion(&self) -> bool {
        self.promotes && self.promotion.is_none()
    }

    #[inline]
    pub fn captured(&self) -> Option<&Piece> {
        self.kind.captured()
    }
}
