//! Core value types shared by the board, the move rules and the session.
//!
//! Squares are addressed as (row, col) with row 0 holding the black back
//! rank and row 7 the white back rank, matching how the board is drawn top
//! to bottom.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move, and the color of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
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
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn token(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.color.symbol());
        out.push(self.kind.symbol());
        out
    }

    /// Placement letter: upper case for white, lower case for black.
    pub const fn placement_char(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    pub fn from_placement_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_symbol(ch.to_ascii_lowercase())?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.symbol(), self.kind.symbol())
    }
}

/// Board square as (row, col).
///
/// Coordinates are stored signed so that deltas and off-board candidates can
/// be represented; [`Square::new`] and [`Board`] accessors reject anything
/// outside `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    /// Build a square, failing with `OutOfBounds` off the board.
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        let square = Self { row, col };
        square.validate()?;
        Ok(square)
    }

    /// Build a square without a bounds check. Accessors still validate.
    #[inline]
    pub const fn unchecked(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    pub fn validate(self) -> ChessResult<()> {
        if self.is_on_board() {
            Ok(())
        } else {
            Err(ChessErrors::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Signed (row, col) delta from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i32, i32) {
        (other.row - self.row, other.col - self.col)
    }

    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Square {
        Square::unchecked(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_tokens_print_color_then_kind() {
        let queen = Piece::new(Color::White, PieceKind::Queen);
        assert_eq!(queen.token(), "wq");
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).to_string(), "bn");
    }

    #[test]
    fn placement_chars_follow_case_convention() {
        let rook = Piece::from_placement_char('R').expect("R is a piece");
        assert_eq!(rook, Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(Piece::new(Color::Black, PieceKind::King).placement_char(), 'k');
        assert!(Piece::from_placement_char('x').is_none());
    }

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessErrors::OutOfBounds { row: 8, col: 0 })
        );
        assert!(Square::new(0, -1).is_err());
    }

    #[test]
    fn pawn_direction_per_color() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
