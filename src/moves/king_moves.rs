use crate::game_state::chess_types::Square;

/// King move: one square in any direction.
#[inline]
pub(crate) fn is_valid_king_move(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row.abs().max(d_col.abs()) == 1
}
