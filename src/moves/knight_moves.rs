use crate::game_state::chess_types::Square;

/// Knight move: an L of (2,1) or (1,2). Knights jump, so occupancy along the
/// way is irrelevant.
#[inline]
pub(crate) fn is_valid_knight_move(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
