//! Sparse board representation.
//!
//! A `Board` maps squares to the piece standing on them. Every piece stored
//! under a key carries that same key as its `square`; all mutation goes
//! through the methods below so the two never drift apart.

use std::collections::BTreeMap;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
}

/// Undo record for a speculative relocation (see `Board::displace`).
#[derive(Debug, Clone, Copy)]
pub struct Displacement {
    moved: Piece,
    landed_on: Square,
    captured: Option<Piece>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_rank();
            let pawns = back + color.pawn_direction();
            for (file, kind) in (0i8..).zip(BACK_RANK_LAYOUT) {
                if let Some(sq) = Square::new(file, back) {
                    board.place(Piece::new(color, kind, sq));
                }
                if let Some(sq) = Square::new(file, pawns) {
                    board.place(Piece::new(color, PieceKind::Pawn, sq));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        !self.pieces.contains_key(&square)
    }

    /// Puts `piece` on its own square, returning whatever stood there.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.pieces.insert(piece.square, piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    /// Moves the piece on `from` to `to` and marks it moved.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.pieces.remove(&from)?.moved_to(to);
        self.pieces.insert(to, piece);
        Some(piece)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.color == color)
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// The king of `color`. A board without one is corrupt, so this panics.
    pub fn expect_king(&self, color: Color) -> &Piece {
        match self.king(color) {
            Some(king) => king,
            None => panic!("board has no {color} king"),
        }
    }

    /// Speculatively relocates the piece on `from` to `to`, first lifting any
    /// piece on `capture_at`. Undo with `restore`.
    pub fn displace(&mut self, from: Square, to: Square, capture_at: Option<Square>) -> Displacement {
        let captured = capture_at.and_then(|sq| self.pieces.remove(&sq));
        let Some(moved) = self.pieces.remove(&from) else {
            panic!("no piece on {from} to displace");
        };
        self.pieces.insert(to, Piece { square: to, ..moved });
        Displacement {
            moved,
            landed_on: to,
            captured,
        }
    }

    pub fn restore(&mut self, displacement: Displacement) {
        self.pieces.remove(&displacement.landed_on);
        self.place(displacement.moved);
        if let Some(captured) = displacement.captured {
            self.place(captured);
        }
    }

    /// Checks the structural invariants: keys match piece squares and each
    /// color has exactly one king.
    pub fn validate(&self) -> ChessResult<()> {
        for (key, piece) in &self.pieces {
            if *key != piece.square {
                return Err(ChessErrors::CorruptBoard(format!(
                    "piece stored under {key} claims to stand on {}",
                    piece.square
                )));
            }
        }
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::CorruptBoard(format!(
                    "expected one {color} king, found {kings}"
                )));
            }
        }
        Ok(())
    }
}
