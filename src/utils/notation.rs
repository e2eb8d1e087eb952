//! Standard algebraic notation for committed moves.
//!
//! Everything needed is stored on the `HistoryEntry` at commit time
//! (disambiguation, check flags, promotion), so formatting needs no board.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::history::{Disambiguation, HistoryEntry};
use crate::moves::move_descriptions::MoveKind;
use crate::utils::algebraic::{file_letter, rank_digit};

/// Renders `entry` as SAN, e.g. `Nbd2`, `exd6`, `O-O-O`, `a8=Q+`, `Qh4#`.
pub fn move_notation(entry: &HistoryEntry) -> String {
    let mut out = match entry.kind {
        MoveKind::KingsideCastle => "O-O".to_owned(),
        MoveKind::QueensideCastle => "O-O-O".to_owned(),
        MoveKind::Quiet | MoveKind::Capture(_) => piece_move_text(entry),
    };

    if entry.is_checkmate {
        out.push('#');
    } else if entry.is_check {
        out.push('+');
    }
    out
}

fn piece_move_text(entry: &HistoryEntry) -> String {
    let origin = entry.moved_piece.square;
    let is_capture = entry.captured().is_some();
    let mut out = String::with_capacity(8);

    if entry.moved_piece.kind == PieceKind::Pawn {
        if is_capture {
            out.push(file_letter(origin));
        }
    } else {
        out.push_str(entry.moved_piece.kind.notation_letter());
        match entry.disambiguation {
            Disambiguation::None => {}
            Disambiguation::File => out.push(file_letter(origin)),
            Disambiguation::Rank => out.push(rank_digit(origin)),
            Disambiguation::Square => {
                out.push(file_letter(origin));
                out.push(rank_digit(origin));
            }
        }
    }

    if is_capture {
        out.push('x');
    }
    out.push_str(&entry.destination.to_string());

    if let Some(promotion) = entry.promotion {
        out.push('=');
        out.push_str(PieceKind::from(promotion).notation_letter());
    }
    out
}
