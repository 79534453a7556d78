use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Square};
use crate::moves::path_clearance::is_path_clear;

/// Straight along a row or column.
#[inline]
pub(crate) const fn is_rook_geometry(d_row: i32, d_col: i32) -> bool {
    d_row == 0 || d_col == 0
}

/// Rook move: straight line with nothing in between.
///
/// Assumes `start != end`; the null move is rejected by `is_valid_move`.
pub(crate) fn is_valid_rook_move(start: Square, end: Square, board: &Board) -> ChessResult<bool> {
    let (d_row, d_col) = start.delta_to(end);
    if !is_rook_geometry(d_row, d_col) {
        return Ok(false);
    }
    is_path_clear(start, end, board)
}
