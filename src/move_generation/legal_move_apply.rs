use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Piece, Square};

/// Move the occupant of `start` to `end`, overwriting whatever stood there.
///
/// No legality check is made; call this only for moves already accepted by
/// [`is_valid_move`](crate::move_generation::legal_move_checks::is_valid_move).
/// Returns the piece that was on `end`, i.e. the capture, if any. Both
/// squares are validated before the board is touched, so an `OutOfBounds`
/// error leaves the board unchanged.
pub fn apply_move(board: &mut Board, start: Square, end: Square) -> ChessResult<Option<Piece>> {
    let moved = board.get(start)?;
    let captured = board.get(end)?;

    board.set(start, None)?;
    board.set(end, moved)?;

    Ok(captured)
}
