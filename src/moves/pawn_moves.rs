//! Pawn destinations: pushes, diagonal captures, en passant, promotion flag.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::move_descriptions::{
    CandidateMove, GenerationMode, LastMove, MoveKind, MoveMap,
};

pub fn pawn_moves(
    piece: &Piece,
    board: &Board,
    mode: GenerationMode,
    last_move: Option<&LastMove>,
) -> MoveMap {
    let mut out = MoveMap::new();
    let dir = piece.color.pawn_direction();

    for side in [-1i8, 1] {
        let Some(target) = piece.square.offset(side, dir) else {
            continue;
        };
        match (board.get(target), mode) {
            (occupant, GenerationMode::AttackProbe) => {
                let kind = occupant.map_or(MoveKind::Quiet, |o| MoveKind::Capture(*o));
                out.insert(target, CandidateMove::new(target, kind));
            }
            (Some(occupant), GenerationMode::Play) if occupant.color != piece.color => {
                out.insert(target, CandidateMove::new(target, MoveKind::Capture(*occupant)));
            }
            (None, GenerationMode::Play) => {
                if let Some(victim) = en_passant_victim(piece, board, side, last_move) {
                    out.insert(target, CandidateMove::new(target, MoveKind::Capture(victim)));
                }
            }
            _ => {}
        }
    }

    if mode == GenerationMode::Play {
        if let Some(single) = piece.square.offset(0, dir).filter(|sq| board.is_empty_square(*sq)) {
            out.insert(single, CandidateMove::new(single, MoveKind::Quiet));
            if !piece.has_moved {
                if let Some(double) = single.offset(0, dir).filter(|sq| board.is_empty_square(*sq)) {
                    out.insert(double, CandidateMove::new(double, MoveKind::Quiet));
                }
            }
        }
    }

    let promotion_rank = piece.color.promotion_rank();
    for mv in out.values_mut() {
        mv.pending_promotion = mv.destination.rank() == promotion_rank;
    }
    out
}

/// The enemy pawn beside `piece` on `side` when it just advanced two squares.
fn en_passant_victim(
    piece: &Piece,
    board: &Board,
    side: i8,
    last_move: Option<&LastMove>,
) -> Option<Piece> {
    let last = last_move?;
    let beside = piece.square.offset(side, 0)?;
    let neighbour = board.get(beside)?;
    let qualifies = neighbour.color != piece.color
        && neighbour.kind == PieceKind::Pawn
        && last.destination == beside
        && last.piece.color == neighbour.color
        && last.is_double_pawn_advance();
    qualifies.then_some(*neighbour)
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::{GenerationMode, LastMove, MoveKind};

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square on board")
    }

    #[test]
    fn unmoved_pawn_pushes_one_or_two() {
        let board = Board::standard();
        let pawn = *board.get(sq(4, 1)).expect("pawn on e2");
        let moves = pawn_moves(&pawn, &board, GenerationMode::Play, None);
        assert_eq!(moves.keys().copied().collect::<Vec<_>>(), vec![sq(4, 2), sq(4, 3)]);
    }

    #[test]
    fn blocked_single_push_also_blocks_double() {
        let mut board = Board::standard();
        board.place(Piece::new(Color::Black, PieceKind::Knight, sq(4, 2)));
        let pawn = *board.get(sq(4, 1)).expect("pawn on e2");
        assert!(pawn_moves(&pawn, &board, GenerationMode::Play, None).is_empty());
    }

    #[test]
    fn probe_counts_both_diagonals_and_never_pushes() {
        let board = Board::standard();
        let pawn = *board.get(sq(0, 1)).expect("pawn on a2");
        let probe = pawn_moves(&pawn, &board, GenerationMode::AttackProbe, None);
        assert_eq!(probe.keys().copied().collect::<Vec<_>>(), vec![sq(1, 2)]);
    }

    #[test]
    fn en_passant_only_right_after_double_advance() {
        let mut board = Board::empty();
        let white = Piece::new(Color::White, PieceKind::Pawn, sq(4, 4)).moved_to(sq(4, 4));
        let black_before = Piece::new(Color::Black, PieceKind::Pawn, sq(3, 6));
        board.place(white);
        board.place(black_before.moved_to(sq(3, 4)));

        let double = LastMove {
            piece: black_before,
            destination: sq(3, 4),
        };
        let moves = pawn_moves(&white, &board, GenerationMode::Play, Some(&double));
        let ep = moves.get(&sq(3, 5)).expect("en passant onto d6");
        assert!(matches!(ep.kind, MoveKind::Capture(p) if p.square == sq(3, 4)));

        let unrelated = LastMove {
            piece: Piece::new(Color::Black, PieceKind::Knight, sq(6, 7)),
            destination: sq(5, 5),
        };
        let later = pawn_moves(&white, &board, GenerationMode::Play, Some(&unrelated));
        assert!(!later.contains_key(&sq(3, 5)));
    }

    #[test]
    fn reaching_last_rank_flags_pending_promotion() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn, sq(0, 6)).moved_to(sq(0, 6));
        board.place(pawn);
        board.place(Piece::new(Color::Black, PieceKind::Rook, sq(1, 7)));
        let moves = pawn_moves(&pawn, &board, GenerationMode::Play, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.values().all(|mv| mv.pending_promotion));
    }
}
