//! FEN-to-board parser.
//!
//! Builds a sparse `Board` and the side to move from a Forsyth-Edwards
//! Notation string. The board keeps no castling or en-passant state of its
//! own, so the castling field is folded into `has_moved` flags instead:
//!
//! - a pawn off its starting rank has moved;
//! - a king or rook keeps `has_moved == false` only when the castling field
//!   still grants a right that needs it;
//! - every other piece starts unmoved.
//!
//! The en-passant field is validated but otherwise ignored; en passant is
//! only offered after a double advance played on the board itself.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_START_FILE, KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

/// Castling rights as read from the FEN castling field, indexed by `Color::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingField {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

pub fn parse_fen(fen: &str) -> ChessResult<(Board, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    // Clocks are optional; when present they must be numbers.
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u32>()
            .map_err(|_| invalid(&format!("bad move clock '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let castling = parse_castling_field(castling_part)?;
    if en_passant_part != "-" {
        algebraic_to_square(en_passant_part)
            .map_err(|_| invalid(&format!("bad en-passant square '{en_passant_part}'")))?;
    }

    let mut board = parse_board(board_part)?;
    apply_castling_field(&mut board, castling);
    board
        .validate()
        .map_err(|err| invalid(&err.to_string()))?;

    Ok((board, side_to_move))
}

fn invalid(msg: &str) -> ChessErrors {
    ChessErrors::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(invalid(&format!("rank {} has too many files", rank + 1)));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let square = Square::new(file, rank)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", rank + 1)))?;
            if kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                return Err(invalid(&format!("pawn on back rank at {square}")));
            }

            let start_rank = color.back_rank() + color.pawn_direction();
            let has_moved = kind == PieceKind::Pawn && rank != start_rank;
            board.place(Piece {
                color,
                kind,
                square,
                has_moved,
            });
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_field(castling_part: &str) -> ChessResult<CastlingField> {
    let mut field = CastlingField::default();
    if castling_part == "-" {
        return Ok(field);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => field.kingside[Color::White.index()] = true,
            'Q' => field.queenside[Color::White.index()] = true,
            'k' => field.kingside[Color::Black.index()] = true,
            'q' => field.queenside[Color::Black.index()] = true,
            _ => return Err(invalid(&format!("invalid castling character '{ch}'"))),
        }
    }
    Ok(field)
}

/// Marks kings and rooks moved unless a castling right keeps them fresh.
fn apply_castling_field(board: &mut Board, castling: CastlingField) {
    let kings_and_rooks: Vec<Piece> = board
        .pieces()
        .filter(|p| matches!(p.kind, PieceKind::King | PieceKind::Rook))
        .copied()
        .collect();

    for piece in kings_and_rooks {
        let c = piece.color.index();
        let on_back_rank = piece.square.rank() == piece.color.back_rank();
        let file = piece.square.file();
        let keeps_right = on_back_rank
            && match piece.kind {
                PieceKind::King => {
                    file == KING_START_FILE && (castling.kingside[c] || castling.queenside[c])
                }
                _ => {
                    (file == KINGSIDE_ROOK_FILE && castling.kingside[c])
                        || (file == QUEENSIDE_ROOK_FILE && castling.queenside[c])
                }
            };
        board.place(Piece {
            has_moved: !keeps_right,
            ..piece
        });
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
