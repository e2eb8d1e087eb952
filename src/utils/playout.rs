//! Seeded random playouts.
//!
//! Plays uniformly random legal moves on a `GameState` until the game ends or
//! a ply limit is hit. Used to stress move generation and history reversal,
//! and by the `playout` binary and bench. This is not a search engine.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, PromotionKind};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// A checkmate was committed; carries the winner.
    Checkmate(Color),
    /// The side to move had no legal move and no checkmate was declared.
    NoLegalMoves(Color),
    PlyLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutReport {
    pub plies: usize,
    pub end: PlayoutEnd,
}

/// Plays at most `max_plies` random moves on `game`.
pub fn random_playout<R: Rng>(
    game: &mut GameState,
    rng: &mut R,
    max_plies: usize,
) -> ChessResult<PlayoutReport> {
    let mut plies = 0;
    let end = loop {
        if let Some(winner) = game.winner() {
            break PlayoutEnd::Checkmate(winner);
        }
        if plies == max_plies {
            break PlayoutEnd::PlyLimit;
        }

        let moves = game.all_legal_moves();
        let Some(&(piece, mv)) = moves.choose(rng) else {
            break PlayoutEnd::NoLegalMoves(game.side_to_move());
        };
        game.play(piece.square, mv.destination)?;

        if game.pending_promotion().is_some() {
            let kind = PromotionKind::ALL[rng.random_range(0..PromotionKind::ALL.len())];
            game.resolve_promotion(kind)?;
        }
        plies += 1;
    };

    Ok(PlayoutReport { plies, end })
}
