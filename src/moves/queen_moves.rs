use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::is_bishop_geometry;
use crate::moves::path_clearance::is_path_clear;
use crate::moves::rook_moves::is_rook_geometry;

/// Queen move: rook or bishop geometry with a clear path.
///
/// Assumes `start != end`; the null move is rejected by `is_valid_move`.
pub(crate) fn is_valid_queen_move(start: Square, end: Square, board: &Board) -> ChessResult<bool> {
    let (d_row, d_col) = start.delta_to(end);
    if !(is_rook_geometry(d_row, d_col) || is_bishop_geometry(d_row, d_col)) {
        return Ok(false);
    }
    is_path_clear(start, end, board)
}
