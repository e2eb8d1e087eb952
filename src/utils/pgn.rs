//! PGN export of the displayed game.
//!
//! Serializes the played history path (entries after the displayed one are
//! left out) with Seven-Tag-Roster headers. Custom starting positions add the
//! `SetUp`/`FEN` pair.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::notation::move_notation;

/// Result token for a session: a winner, or `*` while the game is open.
pub fn result_token(winner: Option<Color>) -> &'static str {
    match winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

pub fn write_pgn(game: &GameState, white: &str, black: &str, date: NaiveDate) -> String {
    let result = result_token(game.winner());

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Parlor Chess Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("Round", "-".to_owned());
    headers.insert("White", white.to_owned());
    headers.insert("Black", black.to_owned());
    headers.insert("Result", result.to_owned());
    if let Some(fen) = game.starting_fen() {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("FEN", fen.to_owned());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    out.push_str(&movetext(game));
    if !game.played_history().is_empty() {
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');
    out
}

fn movetext(game: &GameState) -> String {
    // A Black-to-move start puts the first move at an odd ply.
    let offset = usize::from(game.initial_side() == Color::Black);
    let mut parts = Vec::<String>::with_capacity(game.played_history().len());

    for (i, entry) in game.played_history().iter().enumerate() {
        let ply = i + offset;
        let number = ply / 2 + 1;
        let san = move_notation(entry);
        if ply % 2 == 0 {
            parts.push(format!("{number}. {san}"));
        } else if i == 0 {
            parts.push(format!("{number}... {san}"));
        } else {
            parts.push(san);
        }
    }
    parts.join(" ")
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{result_token, write_pgn};
    use chrono::NaiveDate;

    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::game_state::settings::RuleSettings;
    use crate::utils::algebraic::algebraic_to_square;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    fn play(game: &mut GameState, from: &str, to: &str) {
        let from = algebraic_to_square(from).expect("from square");
        let to = algebraic_to_square(to).expect("to square");
        game.play(from, to).expect("move should commit");
    }

    #[test]
    fn fools_mate_exports_with_result_and_headers() {
        let mut game = GameState::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            play(&mut game, from, to);
        }

        let pgn = write_pgn(&game, "Ada", "Grace \"G\"", date());
        assert!(pgn.contains("[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[White \"Ada\"]\n"));
        assert!(pgn.contains("[Black \"Grace \\\"G\\\"\"]\n"));
        assert!(pgn.contains("[Result \"0-1\"]\n"));
        assert!(!pgn.contains("SetUp"));
        assert!(pgn.ends_with("\n1. f3 e5 2. g4 Qh4# 0-1\n"));
    }

    #[test]
    fn only_the_displayed_path_is_exported() {
        let mut game = GameState::new();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        game.step_backward().expect("back");

        let pgn = write_pgn(&game, "W", "B", date());
        assert!(pgn.ends_with("\n1. e4 *\n"));
    }

    #[test]
    fn black_to_move_start_uses_ellipsis_and_fen_headers() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 b Q - 0 1";
        let mut game = GameState::from_fen(fen, RuleSettings::default()).expect("fen");
        play(&mut game, "e8", "d7");
        play(&mut game, "e1", "c1");

        let pgn = write_pgn(&game, "W", "B", date());
        assert!(pgn.contains("[SetUp \"1\"]\n"));
        assert!(pgn.contains(&format!("[FEN \"{fen}\"]\n")));
        assert!(pgn.ends_with("\n1... Kd7 2. O-O-O+ *\n"));
    }

    #[test]
    fn result_tokens() {
        assert_eq!(result_token(Some(Color::White)), "1-0");
        assert_eq!(result_token(None), "*");
    }
}
