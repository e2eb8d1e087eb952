//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry, and the default recursion budget used
//! by king-safety evaluation.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_FILE: i8 = 4;

pub const KINGSIDE_ROOK_FILE: i8 = 7;
pub const KINGSIDE_ROOK_LANDING_FILE: i8 = 5;
pub const KINGSIDE_KING_LANDING_FILE: i8 = 6;
/// Files that must be empty between king and rook.
pub const KINGSIDE_GAP_FILES: [i8; 2] = [5, 6];
/// Files the king stands on, crosses, or lands on; none may be attacked.
pub const KINGSIDE_SAFE_FILES: [i8; 3] = [4, 5, 6];

pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const QUEENSIDE_ROOK_LANDING_FILE: i8 = 3;
pub const QUEENSIDE_KING_LANDING_FILE: i8 = 2;
pub const QUEENSIDE_GAP_FILES: [i8; 3] = [1, 2, 3];
pub const QUEENSIDE_SAFE_FILES: [i8; 3] = [4, 3, 2];

/// Default nesting budget for attack queries issued from king-safety checks.
pub const DEFAULT_KING_SAFETY_DEPTH: u8 = 2;
