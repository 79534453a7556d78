//! Canonical chess-rule constants.
//!
//! Static layout literals used to set up the starting board and to recognise
//! a pawn's two-step opening move.

use crate::game_state::chess_types::{Color, PieceKind};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Back-rank order from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Starting position as a piece-placement string, row 0 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Row holding the back rank of `color`.
#[inline]
pub const fn back_rank_row(color: Color) -> i32 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row the pawns of `color` start on; a pawn here may step two squares.
#[inline]
pub const fn pawn_home_row(color: Color) -> i32 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}
