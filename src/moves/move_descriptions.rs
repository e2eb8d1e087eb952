//! Candidate move descriptions produced by the per-piece generators.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// What a move does besides relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    /// Captures the given piece. For en passant the victim stands beside the
    /// destination rather than on it.
    Capture(Piece),
    KingsideCastle,
    QueensideCastle,
}

impl MoveKind {
    #[inline]
    pub const fn captured(&self) -> Option<&Piece> {
        match self {
            MoveKind::Capture(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self, MoveKind::KingsideCastle | MoveKind::QueensideCastle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub destination: Square,
    pub kind: MoveKind,
    /// Set when a pawn reaches its last rank; the move is incomplete until a
    /// promotion kind is chosen.
    pub pending_promotion: bool,
}

impl CandidateMove {
    #[inline]
    pub const fn new(destination: Square, kind: MoveKind) -> Self {
        Self {
            destination,
            kind,
            pending_promotion: false,
        }
    }
}

/// Destinations of one piece, keyed by square.
pub type MoveMap = BTreeMap<Square, CandidateMove>;

/// Whether a generator produces playable moves or only probes threatened squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Playable candidates: friendly-occupied squares are excluded, pawns push
    /// forward, kings may castle.
    Play,
    /// Squares the piece attacks or defends: friendly-occupied squares count,
    /// pawns only hit diagonally, kings never castle.
    AttackProbe,
}

/// The minimum a generator needs to know about the previous move (en passant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub destination: Square,
}

impl LastMove {
    /// True when the previous move was a pawn leaving its start square by two ranks.
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && !self.piece.has_moved
            && (self.destination.rank() - self.piece.square.rank()).abs() == 2
    }
}
