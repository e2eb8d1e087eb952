//! Replaying and reversing committed moves.
//!
//! `backward` and `forward` are exact inverses on the board: walking back
//! over a sequence of entries and then forward again reproduces every piece,
//! including `has_moved` flags and promoted kinds.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::game_state::history::HistoryEntry;
use crate::move_generation::legal_move_apply::castling_rook_squares;

/// Undoes `entry` on `board`.
pub fn backward(entry: &HistoryEntry, board: &mut Board) {
    board.remove(entry.destination);
    board.place(entry.moved_piece);

    if let Some((rook_home, rook_landing)) = castling_rook_squares(&entry.kind, entry.destination) {
        let Some(rook) = board.remove(rook_landing) else {
            panic!("castle {} has no rook on {rook_landing} to undo", entry.id);
        };
        board.place(Piece {
            square: rook_home,
            has_moved: false,
            ..rook
        });
    }

    if let Some(captured) = entry.captured() {
        board.place(*captured);
    }
}

/// Replays `entry` on `board`, applying its promotion if one was chosen.
pub fn forward(entry: &HistoryEntry, board: &mut Board) {
    if let Some(captured) = entry.captured() {
        board.remove(captured.square);
    }

    if let Some((rook_home, rook_landing)) = castling_rook_squares(&entry.kind, entry.destination) {
        if board.move_piece(rook_home, rook_landing).is_none() {
            panic!("castle {} has no rook on {rook_home} to replay", entry.id);
        }
    }

    let from = entry.moved_piece.square;
    if board.remove(from).is_none() {
        panic!("entry {} expects a piece on {from}", entry.id);
    }
    let mut arrived = entry.moved_piece.moved_to(entry.destination);
    if let Some(promotion) = entry.promotion {
        arrived.kind = promotion.into();
    }
    board.place(arrived);
}

/// Moves `board` from the position after `history[current]` to the position
/// after `history[target]` (`None` meaning the initial position). Each entry in
/// between is applied exactly once.
pub fn navigate(
    history: &[HistoryEntry],
    board: &mut Board,
    current: Option<usize>,
    target: Option<usize>,
) {
    let after = |index: Option<usize>| index.map_or(0, |i| i + 1);
    let (from, to) = (after(current), after(target));
    if to > from {
        for entry in &history[from..to] {
            forward(entry, board);
        }
    } else {
        for entry in history[to..from].iter().rev() {
            backward(entry, board);
        }
    }
}
