//! Errors used throughout the chess core.
//!
//! `ChessErrors` is the single error type of the crate. Parsing and settings
//! variants describe bad input. Session variants describe an action that was
//! rejected; the session is left exactly as it was, so callers that treat
//! rejections as no-ops can simply ignore them.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate such as `e4` could not be parsed.
    InvalidAlgebraicString(String),
    /// A FEN string could not be parsed; payload describes the problem.
    InvalidFen(String),
    /// Board invariants do not hold (missing king, mismatched keys, ...).
    CorruptBoard(String),
    /// `GameSettings::set_option` was given a name it does not know.
    UnknownOption(String),
    /// `GameSettings::set_option` was given a value it cannot parse.
    InvalidOptionValue { name: String, value: String },

    /// A move was played while no piece was selected.
    NothingSelected,
    /// The destination is not among the selected piece's legal moves.
    IllegalDestination(Square),
    /// A promotion choice must be made before anything else.
    PromotionPending,
    /// `resolve_promotion` was called with no promotion outstanding.
    NoPromotionPending,
    /// The game already has a winner.
    GameOver(Color),
    /// History navigation hit the start or the end of the log.
    AtHistoryBoundary,
    /// No history entry with this id is on the current log.
    UnknownHistoryEntry(u64),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::CorruptBoard(msg) => write!(f, "corrupt board: {msg}"),
            ChessErrors::UnknownOption(name) => write!(f, "unknown option: {name}"),
            ChessErrors::InvalidOptionValue { name, value } => {
                write!(f, "invalid value '{value}' for option {name}")
            }
            ChessErrors::NothingSelected => write!(f, "no piece is selected"),
            ChessErrors::IllegalDestination(sq) => {
                write!(f, "{sq} is not a legal destination for the selected piece")
            }
            ChessErrors::PromotionPending => write!(f, "a promotion choice is pending"),
            ChessErrors::NoPromotionPending => write!(f, "no promotion is pending"),
            ChessErrors::GameOver(winner) => write!(f, "game is over, {winner} won"),
            ChessErrors::AtHistoryBoundary => write!(f, "already at the edge of the move history"),
            ChessErrors::UnknownHistoryEntry(id) => write!(f, "no history entry with id {id}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn display_names_the_offending_value() {
        let e4 = Square::new(4, 3).expect("e4 is on the board");
        assert_eq!(
            ChessErrors::IllegalDestination(e4).to_string(),
            "e4 is not a legal destination for the selected piece"
        );
        assert_eq!(
            ChessErrors::GameOver(Color::Black).to_string(),
            "game is over, black won"
        );
    }
}
