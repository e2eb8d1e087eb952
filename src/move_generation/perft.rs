//! Perft: legal-move tree node counting.
//!
//! Walks every legal line to a fixed depth and counts the leaves, with a few
//! move-kind tallies at the last ply. Promotions branch three ways (rook,
//! bishop, queen), so positions whose tree promotes will differ from
//! published tables that also count knight promotions.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PromotionKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::relocate;
use crate::move_generation::legal_move_filter::all_legal_moves;
use crate::move_generation::move_generator::SafetyBudget;
use crate::moves::move_descriptions::{CandidateMove, LastMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn count_leaf(&mut self, mv: &CandidateMove) {
        let branches = if mv.pending_promotion {
            PromotionKind::ALL.len() as u64
        } else {
            1
        };
        self.nodes += branches;
        if let Some(victim) = mv.kind.captured() {
            self.captures += branches;
            if victim.square != mv.destination {
                self.en_passant += 1;
            }
        }
        if mv.kind.is_castle() {
            self.castles += 1;
        }
        if mv.pending_promotion {
            self.promotions += branches;
        }
    }
}

/// Perft from the position displayed by `game`.
pub fn perft(game: &GameState, depth: u8) -> PerftCounts {
    perft_from(
        game.board(),
        game.side_to_move(),
        game.last_move().as_ref(),
        depth,
        game.rules().budget(),
    )
}

pub fn perft_from(
    board: &Board,
    side: Color,
    last_move: Option<&LastMove>,
    depth: u8,
    budget: SafetyBudget,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (piece, mv) in all_legal_moves(board, side, last_move, budget) {
        if depth == 1 {
            total.count_leaf(&mv);
            continue;
        }
        for child in successors(board, &piece, &mv) {
            let last = LastMove {
                piece,
                destination: mv.destination,
            };
            total.merge(perft_from(&child, side.opposite(), Some(&last), depth - 1, budget));
        }
    }
    total
}

/// Node count below each root move, keyed by `e2e4`-style text (with the
/// promotion letter appended where one applies).
pub fn perft_divide(game: &GameState, depth: u8) -> Vec<(String, u64)> {
    let board = game.board();
    let side = game.side_to_move();
    let budget = game.rules().budget();
    let mut out = Vec::new();

    for (piece, mv) in all_legal_moves(board, side, game.last_move().as_ref(), budget) {
        let last = LastMove {
            piece,
            destination: mv.destination,
        };
        let children = successors(board, &piece, &mv);
        let promotions = mv.pending_promotion.then_some(PromotionKind::ALL);
        for (i, child) in children.iter().enumerate() {
            let mut label = format!("{}{}", piece.square, mv.destination);
            if let Some(kinds) = promotions {
                label.push_str(&piece_suffix(kinds[i]));
            }
            let nodes = perft_from(child, side.opposite(), Some(&last), depth.saturating_sub(1), budget).nodes;
            out.push((label, nodes));
        }
    }
    out.sort();
    out
}

/// Boards reached by `mv`, one per promotion choice when the move promotes.
fn successors(board: &Board, piece: &Piece, mv: &CandidateMove) -> Vec<Board> {
    let next = relocate(board, piece, mv);
    if !mv.pending_promotion {
        return vec![next];
    }
    PromotionKind::ALL
        .iter()
        .map(|kind| {
            let mut promoted = next.clone();
            if let Some(pawn) = promoted.get(mv.destination).copied() {
                promoted.place(Piece {
                    kind: (*kind).into(),
                    ..pawn
                });
            }
            promoted
        })
        .collect()
}

fn piece_suffix(kind: PromotionKind) -> String {
    match kind {
        PromotionKind::Rook => "r",
        PromotionKind::Bishop => "b",
        PromotionKind::Queen => "q",
    }
    .to_owned()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::game_state::GameState;
    use crate::game_state::settings::RuleSettings;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen, RuleSettings::default()).expect("perft FEN should parse")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(
            perft(&GameState::new(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let game = GameState::new();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.castles, 0);
    }

    #[test]
    fn kiwipete_counts_castles_and_en_passant() {
        let game = game(KIWIPETE);
        let depth1 = perft(&game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
    }

    #[test]
    fn position_3_node_counts() {
        let game = game(POSITION_3);
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = game(POSITION_3);
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 14);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 191);
        assert!(divided.iter().any(|(mv, _)| mv == "b4b1"));
    }

    #[test]
    fn promotions_branch_three_ways() {
        let game = game("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let counts = perft(&game, 1);
        // a8 three ways plus five king steps.
        assert_eq!(counts.nodes, 3 + 5);
        assert_eq!(counts.promotions, 3);

        let divided = perft_divide(&game, 1);
        assert!(divided.iter().any(|(mv, _)| mv == "a7a8q"));
        assert!(!divided.iter().any(|(mv, _)| mv == "a7a8n"));
    }
}
