//! Move execution.
//!
//! `relocate` performs the board update alone (capture removal, castling rook,
//! moving piece). `commit_move` wraps it into a history entry, tagging check
//! and checkmate from the opponent's point of view.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_LANDING_FILE, QUEENSIDE_ROOK_FILE,
    QUEENSIDE_ROOK_LANDING_FILE,
};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::history::{Disambiguation, HistoryEntry};
use crate::game_state::settings::{CheckmateRule, RuleSettings};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_filter::{has_any_legal_move, legal_moves};
use crate::move_generation::move_generator::SafetyBudget;
use crate::moves::move_descriptions::{CandidateMove, LastMove, MoveKind};

/// Rook origin and landing squares for a castle whose king lands on `king_landing`.
pub fn castling_rook_squares(kind: &MoveKind, king_landing: Square) -> Option<(Square, Square)> {
    let (from_file, to_file) = match kind {
        MoveKind::KingsideCastle => (KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_LANDING_FILE),
        MoveKind::QueensideCastle => (QUEENSIDE_ROOK_FILE, QUEENSIDE_ROOK_LANDING_FILE),
        _ => return None,
    };
    Some((king_landing.with_file(from_file)?, king_landing.with_file(to_file)?))
}

/// Applies `mv` for `piece` to a copy of `board`.
pub fn relocate(board: &Board, piece: &Piece, mv: &CandidateMove) -> Board {
    let mut next = board.clone();
    if let Some(captured) = mv.kind.captured() {
        next.remove(captured.square);
    }
    if let Some((rook_from, rook_to)) = castling_rook_squares(&mv.kind, mv.destination) {
        if next.move_piece(rook_from, rook_to).is_none() {
            panic!("castling without a rook on {rook_from}");
        }
    }
    if next.move_piece(piece.square, mv.destination).is_none() {
        panic!("no {:?} on {} to move", piece.kind, piece.square);
    }
    next
}

/// Commits `mv`, returning the new board and its history entry.
pub fn commit_move(
    board: &Board,
    piece: &Piece,
    mv: &CandidateMove,
    last_move: Option<&LastMove>,
    id: u64,
    rules: &RuleSettings,
) -> (Board, HistoryEntry) {
    let budget = rules.budget();
    let disambiguation = disambiguate(board, piece, mv.destination, last_move, budget);
    let next = relocate(board, piece, mv);

    let mut entry = HistoryEntry {
        id,
        moved_piece: *piece,
        destination: mv.destination,
        kind: mv.kind,
        promotes: mv.pending_promotion,
        promotion: None,
        is_check: false,
        is_checkmate: false,
        disambiguation,
    };
    tag_check_status(&next, &mut entry, rules);
    (next, entry)
}

/// Recomputes `is_check` / `is_checkmate` of `entry` against the position
/// `board` it produced.
pub fn tag_check_status(board: &Board, entry: &mut HistoryEntry, rules: &RuleSettings) {
    let budget = rules.budget();
    let mover = entry.moved_piece.color;
    let defender = mover.opposite();
    let king = board.expect_king(defender);
    let last = entry.last_move();

    entry.is_check = is_square_attacked(board, king.square, mover, budget);
    entry.is_checkmate = entry.is_check
        && match rules.checkmate_rule {
            CheckmateRule::KingEscape => {
                legal_moves(king, board, Some(&last), budget).is_empty()
                    && !is_square_attacked(board, entry.destination, defender, budget)
            }
            CheckmateRule::NoLegalReply => !has_any_legal_move(board, defender, Some(&last), budget),
        };
}

fn disambiguate(
    board: &Board,
    piece: &Piece,
    destination: Square,
    last_move: Option<&LastMove>,
    budget: SafetyBudget,
) -> Disambiguation {
    if matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
        return Disambiguation::None;
    }
    let rivals: Vec<Square> = board
        .pieces_of(piece.color)
        .filter(|other| other.kind == piece.kind && other.square != piece.square)
        .filter(|other| legal_moves(other, board, last_move, budget).contains_key(&destination))
        .map(|other| other.square)
        .collect();

    if rivals.is_empty() {
        Disambiguation::None
    } else if rivals.iter().all(|sq| sq.file() != piece.square.file()) {
        Disambiguation::File
    } else if rivals.iter().all(|sq| sq.rank() != piece.square.rank()) {
        Disambiguation::Rank
    } else {
        Disambiguation::Square
    }
}

#[cfg(test)]
mod tests {
    use super::{commit_move, relocate};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::history::Disambiguation;
    use crate::game_state::settings::{CheckmateRule, RuleSettings};
    use crate::move_generation::legal_move_filter::legal_moves;
    use crate::moves::move_descriptions::LastMove;
    use crate::utils::fen_parser::parse_fen;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square on board")
    }

    #[test]
    fn castling_relocates_king_and_rook() {
        let (board, _) = parse_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        let king = *board.expect_king(Color::White);
        let rules = RuleSettings::default();
        let castle = legal_moves(&king, &board, None, rules.budget())[&sq(6, 0)];
        let next = relocate(&board, &king, &castle);

        let rook = next.get(sq(5, 0)).expect("rook lands on f1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert_eq!(next.get(sq(6, 0)).map(|p| p.kind), Some(PieceKind::King));
        assert!(next.get(sq(7, 0)).is_none());
        assert!(next.get(sq(4, 0)).is_none());
    }

    #[test]
    fn en_passant_removes_the_bypassing_pawn() {
        let (board, _) = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").expect("fen");
        let white = *board.get(sq(4, 4)).expect("pawn on e5");
        let black = *board.get(sq(3, 4)).expect("pawn on d5");
        let last = LastMove {
            piece: Piece::new(Color::Black, PieceKind::Pawn, sq(3, 6)),
            destination: black.square,
        };
        let rules = RuleSettings::default();
        let moves = legal_moves(&white, &board, Some(&last), rules.budget());
        let ep = moves[&sq(3, 5)];
        let (next, entry) = commit_move(&board, &white, &ep, Some(&last), 1, &rules);
        assert!(next.get(sq(3, 4)).is_none());
        assert_eq!(entry.captured().map(|p| p.square), Some(sq(3, 4)));
    }

    #[test]
    fn check_is_tagged_including_discovered_check() {
        // Moving the bishop off the e-file uncovers the rook.
        let (board, _) = parse_fen("4k3/8/8/8/8/8/4B3/4R1K1 w - - 0 1").expect("fen");
        let bishop = *board.get(sq(4, 1)).expect("bishop on e2");
        let rules = RuleSettings::default();
        let mv = legal_moves(&bishop, &board, None, rules.budget())[&sq(3, 2)];
        let (_, entry) = commit_move(&board, &bishop, &mv, None, 7, &rules);
        assert_eq!(entry.id, 7);
        assert!(entry.is_check);
        assert!(!entry.is_checkmate);
    }

    #[test]
    fn back_rank_mate_is_tagged_under_both_rules() {
        let (board, _) = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen");
        let rook = *board.get(sq(0, 0)).expect("rook on a1");
        let king_escape = RuleSettings::default();
        let no_reply = RuleSettings {
            checkmate_rule: CheckmateRule::NoLegalReply,
            ..RuleSettings::default()
        };
        let mv = legal_moves(&rook, &board, None, king_escape.budget())[&sq(0, 7)];

        let (_, first) = commit_move(&board, &rook, &mv, None, 1, &king_escape);
        let (_, second) = commit_move(&board, &rook, &mv, None, 2, &no_reply);
        assert!(first.is_check && first.is_checkmate);
        assert!(second.is_check && second.is_checkmate);
    }

    #[test]
    fn attacked_destination_is_not_mate() {
        // The f3 bishop covers a8.
        let (board, _) = parse_fen("6k1/5ppp/8/8/8/5b2/8/R5K1 w - - 0 1").expect("fen");
        let rook = *board.get(sq(0, 0)).expect("rook on a1");
        let rules = RuleSettings::default();
        let mv = legal_moves(&rook, &board, None, rules.budget())[&sq(0, 7)];
        let (_, entry) = commit_move(&board, &rook, &mv, None, 1, &rules);
        assert!(entry.is_check);
        assert!(!entry.is_checkmate);
    }

    #[test]
    fn king_escape_rule_ignores_interposition_by_other_pieces() {
        // The d2 rook can block on d8; only NoLegalReply sees that.
        let (board, _) = parse_fen("6k1/5ppp/8/8/8/8/3r4/R5K1 w - - 0 1").expect("fen");
        let rook = *board.get(sq(0, 0)).expect("rook on a1");
        let king_escape = RuleSettings::default();
        let no_reply = RuleSettings {
            checkmate_rule: CheckmateRule::NoLegalReply,
            ..RuleSettings::default()
        };
        let mv = legal_moves(&rook, &board, None, king_escape.budget())[&sq(0, 7)];

        let (_, loose) = commit_move(&board, &rook, &mv, None, 1, &king_escape);
        assert!(loose.is_checkmate);

        let (_, strict) = commit_move(&board, &rook, &mv, None, 2, &no_reply);
        assert!(strict.is_check);
        assert!(!strict.is_checkmate);
    }

    #[test]
    fn rival_knights_force_file_disambiguation() {
        let (board, _) = parse_fen("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1").expect("fen");
        let knight = *board.get(sq(1, 0)).expect("knight on b1");
        let rules = RuleSettings::default();
        let mv = legal_moves(&knight, &board, None, rules.budget())[&sq(3, 1)];
        let (_, entry) = commit_move(&board, &knight, &mv, None, 1, &rules);
        assert_eq!(entry.disambiguation, Disambiguation::File);
    }
}
