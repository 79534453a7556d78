//! Obstruction test for sliding pieces.
//!
//! Walks the straight line between two squares one step at a time and reports
//! whether every square strictly between them is empty. The destination is
//! never inspected; its occupant is handled by the caller.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Square};

/// True when all squares strictly between `start` and `end` are empty.
///
/// The step on each axis is the sign of that axis' delta, so callers must
/// only pass pairs on a shared row, column or diagonal. Pairs that are not
/// aligned would walk past `end`; the walk stops at the board edge and
/// reports the path as blocked in that case.
pub(crate) fn is_path_clear(start: Square, end: Square, board: &Board) -> ChessResult<bool> {
    let (d_row, d_col) = start.delta_to(end);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut current = start.offset(step_row, step_col);
    while current != end {
        if !current.is_on_board() {
            return Ok(false);
        }
        if !board.is_empty(current)? {
            return Ok(false);
        }
        current = current.offset(step_row, step_col);
    }

    Ok(true)
}
