//! Crate root module declarations for the Parlor Chess core.
//!
//! This file exposes the subsystems (game state and sessions, per-piece move
//! generation, legality and history handling, and utility helpers) so the
//! playout binary, benches, and host applications can import stable module
//! paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history;
    pub mod match_session;
    pub mod scoreboard;
    pub mod settings;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod step_moves;
}

pub mod move_generation {
    pub mod history_navigation;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod notation;
    pub mod pgn;
    pub mod playout;
    pub mod render_game_state;
}
