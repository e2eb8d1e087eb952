//! King destinations: the eight adjacent squares plus castling.
//!
//! Castling is evaluated here rather than in the legality filter because it
//! needs attack queries on squares the king only passes through. Those
//! queries descend the safety budget; with the budget exhausted castling is
//! not offered at all.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_GAP_FILES, KINGSIDE_KING_LANDING_FILE, KINGSIDE_ROOK_FILE, KINGSIDE_SAFE_FILES,
    QUEENSIDE_GAP_FILES, QUEENSIDE_KING_LANDING_FILE, QUEENSIDE_ROOK_FILE, QUEENSIDE_SAFE_FILES,
};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::SafetyBudget;
use crate::moves::move_descriptions::{CandidateMove, GenerationMode, MoveKind, MoveMap};
use crate::moves::step_moves::step_set;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
];

pub fn king_moves(
    piece: &Piece,
    board: &Board,
    mode: GenerationMode,
    budget: SafetyBudget,
) -> MoveMap {
    let mut out = MoveMap::new();
    step_set(piece, board, &KING_OFFSETS, mode, &mut out);

    if mode == GenerationMode::Play && !budget.is_exhausted() {
        for castle in castling_moves(piece, board, budget) {
            out.insert(castle.destination, castle);
        }
    }
    out
}

struct CastleSide {
    kind: MoveKind,
    rook_file: i8,
    king_landing_file: i8,
    gap_files: &'static [i8],
    safe_files: &'static [i8],
}

const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        kind: MoveKind::KingsideCastle,
        rook_file: KINGSIDE_ROOK_FILE,
        king_landing_file: KINGSIDE_KING_LANDING_FILE,
        gap_files: &KINGSIDE_GAP_FILES,
        safe_files: &KINGSIDE_SAFE_FILES,
    },
    CastleSide {
        kind: MoveKind::QueensideCastle,
        rook_file: QUEENSIDE_ROOK_FILE,
        king_landing_file: QUEENSIDE_KING_LANDING_FILE,
        gap_files: &QUEENSIDE_GAP_FILES,
        safe_files: &QUEENSIDE_SAFE_FILES,
    },
];

fn castling_moves(king: &Piece, board: &Board, budget: SafetyBudget) -> Vec<CandidateMove> {
    let mut out = Vec::new();
    if king.has_moved {
        return out;
    }
    let enemy = king.color.opposite();
    let probe_budget = budget.descend();

    for side in &CASTLE_SIDES {
        let rook_ready = king
            .square
            .with_file(side.rook_file)
            .and_then(|sq| board.get(sq))
            .is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
            });
        if !rook_ready {
            continue;
        }

        let gap_clear = side
            .gap_files
            .iter()
            .filter_map(|file| king.square.with_file(*file))
            .all(|sq| board.is_empty_square(sq));
        if !gap_clear {
            continue;
        }

        let path_safe = side
            .safe_files
            .iter()
            .filter_map(|file| king.square.with_file(*file))
            .all(|sq| !is_square_attacked(board, sq, enemy, probe_budget));
        if !path_safe {
            continue;
        }

        if let Some(landing) = king.square.with_file(side.king_landing_file) {
            out.push(CandidateMove::new(landing, side.kind));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};
    use crate::move_generation::move_generator::SafetyBudget;
    use crate::moves::move_descriptions::{GenerationMode, MoveKind};
    use crate::utils::fen_parser::parse_fen;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square on board")
    }

    fn board_from(fen: &str) -> Board {
        parse_fen(fen).expect("test FEN should parse").0
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        let board = board_from("7k/8/8/8/8/8/8/K7 w - - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::default());
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn both_castles_offered_when_clear_and_unattacked() {
        let board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::default());
        assert_eq!(moves[&sq(6, 0)].kind, MoveKind::KingsideCastle);
        assert_eq!(moves[&sq(2, 0)].kind, MoveKind::QueensideCastle);
    }

    #[test]
    fn castling_through_attacked_square_is_refused() {
        // Black rook on f8 covers f1.
        let board = board_from("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::default());
        assert!(!moves.contains_key(&sq(6, 0)));
        assert_eq!(moves[&sq(2, 0)].kind, MoveKind::QueensideCastle);
    }

    #[test]
    fn castling_out_of_check_is_refused() {
        let board = board_from("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::default());
        assert!(moves.values().all(|mv| !mv.kind.is_castle()));
    }

    #[test]
    fn moved_rook_disables_that_side_only() {
        let board = board_from("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::default());
        assert!(!moves.contains_key(&sq(6, 0)));
        assert!(moves.contains_key(&sq(2, 0)));
    }

    #[test]
    fn exhausted_budget_skips_castling() {
        let board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let king = *board.expect_king(Color::White);
        let moves = king_moves(&king, &board, GenerationMode::Play, SafetyBudget::new(0));
        assert!(moves.values().all(|mv| !mv.kind.is_castle()));
    }
}
