//! Bishop movement rule.
//!
//! Pure diagonal moves of any length, provided the squares crossed are empty.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Square};
use crate::moves::path_clearance::is_path_clear;

/// Equal travel on both axes.
#[inline]
pub(crate) const fn is_bishop_geometry(d_row: i32, d_col: i32) -> bool {
    d_row.abs() == d_col.abs()
}

pub(crate) fn is_valid_bishop_move(start: Square, end: Square, board: &Board) -> ChessResult<bool> {
    let (d_row, d_col) = start.delta_to(end);
    if !is_bishop_geometry(d_row, d_col) {
        return Ok(false);
    }
    is_path_clear(start, end, board)
}
