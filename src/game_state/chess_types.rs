//! Primitive chess types shared by every subsystem.
//!
//! Squares are validated on construction so an off-board coordinate can never
//! be stored in a board, a move, or a history entry.

use std::fmt;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at game start.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used by algebraic notation; pawns have none.
    pub const fn notation_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

/// Kinds a pawn may be promoted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    Rook,
    Bishop,
    Queen,
}

impl PromotionKind {
    pub const ALL: [PromotionKind; 3] = [
        PromotionKind::Rook,
        PromotionKind::Bishop,
        PromotionKind::Queen,
    ];
}

impl From<PromotionKind> for PieceKind {
    fn from(kind: PromotionKind) -> Self {
        match kind {
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Queen => PieceKind::Queen,
        }
    }
}

/// Board square (`0 == a1`, `7 == h1`, `63 == h8`).
///
/// The wrapped index doubles as the canonical map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Builds a square from file and rank, `None` when either is outside `0..=7`.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Square> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Square shifted by the given file and rank deltas, `None` off the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        Square::new(self.file() + d_file, self.rank() + d_rank)
    }

    /// Same rank, different file. Used for castling rook and king squares.
    #[inline]
    pub const fn with_file(self, file: i8) -> Option<Square> {
        Square::new(file, self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file() as u8);
        let rank = char::from(b'1' + self.rank() as u8);
        write!(f, "{file}{rank}")
    }
}

/// A piece on the board, including where it stands and whether it ever moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            color,
            kind,
            square,
            has_moved: false,
        }
    }

    /// Copy of this piece standing on `square` with the moved flag set.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Self {
        Self {
            square,
            has_moved: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PieceKind, PromotionKind, Square};

    #[test]
    fn square_rejects_off_board_coordinates() {
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(8, 3).is_none());
        assert_eq!(Square::new(7, 7).map(Square::index), Some(63));
    }

    #[test]
    fn offset_stops_at_board_edges() {
        let h1 = Square::new(7, 0).expect("h1 is on the board");
        assert!(h1.offset(1, 0).is_none());
        assert!(h1.offset(0, -1).is_none());
        assert_eq!(h1.offset(-1, 1).map(|sq| sq.to_string()), Some("g2".to_owned()));
    }

    #[test]
    fn promotion_rank_is_opponent_back_rank() {
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
        assert_eq!(Color::Black.pawn_direction(), -1);
    }

    #[test]
    fn promotion_kinds_convert_to_piece_kinds() {
        let kinds: Vec<PieceKind> = PromotionKind::ALL.iter().map(|k| (*k).into()).collect();
        assert_eq!(kinds, vec![PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen]);
    }
}
