//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! playout binary. `flip` puts Black at the bottom.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board, flip: bool) -> String {
    let files: Vec<i8> = if flip { (0..8).rev().collect() } else { (0..8).collect() };
    let ranks: Vec<i8> = if flip { (0..8).collect() } else { (0..8).rev().collect() };

    let file_header: String = files
        .iter()
        .map(|f| char::from(b'a' + *f as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&file_header);
    out.push('\n');

    for &rank in &ranks {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for (i, &file) in files.iter().enumerate() {
            let piece = Square::new(file, rank).and_then(|sq| board.get(sq));
            match piece {
                Some(p) => out.push(piece_to_unicode(p.color, p.kind)),
                None => out.push('·'),
            }
            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&file_header);
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
