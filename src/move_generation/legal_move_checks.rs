//! Single-move legality.
//!
//! `is_valid_move` answers whether one piece may travel from one square to
//! another on the current board. It borrows the board read-only and never
//! mutates it. Rules are purely geometric plus occupancy: there is no notion
//! of check, castling, en passant or promotion.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::king_moves::is_valid_king_move;
use crate::moves::knight_moves::is_valid_knight_move;
use crate::moves::pawn_moves::is_valid_pawn_move;
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// Decide whether `piece` may move from `start` to `end`.
///
/// The caller guarantees that `piece` is the occupant of `start`; this is not
/// re-checked. Returns `Ok(false)` for any illegal move and
/// `Err(ChessErrors::OutOfBounds)` if either square is off the board.
///
/// Order of checks:
/// 1. both squares on the board,
/// 2. `start != end`,
/// 3. the destination does not hold a piece of the mover's color,
/// 4. per-kind geometry, with a clear path for rooks, bishops and queens.
pub fn is_valid_move(piece: Piece, start: Square, end: Square, board: &Board) -> ChessResult<bool> {
    start.validate()?;
    let target = board.get(end)?;

    if start == end {
        trace!(%piece, %start, "null move rejected");
        return Ok(false);
    }

    if target.is_some_and(|occupant| occupant.color == piece.color) {
        trace!(%piece, %start, %end, "self-capture rejected");
        return Ok(false);
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(piece.color, start, end, board),
        PieceKind::Rook => is_valid_rook_move(start, end, board),
        PieceKind::Bishop => is_valid_bishop_move(start, end, board),
        PieceKind::Queen => is_valid_queen_move(start, end, board),
        PieceKind::Knight => Ok(is_valid_knight_move(start, end)),
        PieceKind::King => Ok(is_valid_king_move(start, end)),
    }
}
