//! Pawn movement rule.
//!
//! Pawns step straight forward onto empty squares, may take two steps from
//! their home row when both squares are empty, and move diagonally forward
//! only to capture. There is no en passant and no promotion.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Board, Color, Square};

/// Pawn move for a pawn of `color`.
///
/// The destination is known not to hold a piece of `color`; any occupant is
/// therefore an opponent.
pub(crate) fn is_valid_pawn_move(
    color: Color,
    start: Square,
    end: Square,
    board: &Board,
) -> ChessResult<bool> {
    let forward = color.forward();
    let (d_row, d_col) = start.delta_to(end);
    let target = board.get(end)?;

    if d_col == 0 && target.is_none() {
        if d_row == forward {
            return Ok(true);
        }
        if start.row == pawn_home_row(color) && d_row == 2 * forward {
            return board.is_empty(start.offset(forward, 0));
        }
        return Ok(false);
    }

    if d_col.abs() == 1 && d_row == forward {
        return Ok(target.is_some_and(|piece| piece.color != color));
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::is_valid_pawn_move;
    use crate::game_state::chess_types::{Board, Color, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::unchecked(row, col)
    }

    #[test]
    fn white_pawn_single_and_double_step_from_home_row() {
        let board = Board::create_initial();
        assert!(is_valid_pawn_move(Color::White, sq(6, 4), sq(5, 4), &board).unwrap());
        assert!(is_valid_pawn_move(Color::White, sq(6, 4), sq(4, 4), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(3, 4), &board).unwrap());
    }

    #[test]
    fn black_pawn_moves_toward_higher_rows() {
        let board = Board::create_initial();
        assert!(is_valid_pawn_move(Color::Black, sq(1, 4), sq(2, 4), &board).unwrap());
        assert!(is_valid_pawn_move(Color::Black, sq(1, 4), sq(3, 4), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::Black, sq(1, 4), sq(0, 4), &board).unwrap());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let middle_blocked = Board::from_placement("8/8/8/8/8/4n3/4P3/8").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(4, 4), &middle_blocked).unwrap());

        let end_blocked = Board::from_placement("8/8/8/8/4n3/8/4P3/8").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(4, 4), &end_blocked).unwrap());
        assert!(is_valid_pawn_move(Color::White, sq(6, 4), sq(5, 4), &end_blocked).unwrap());
    }

    #[test]
    fn double_step_only_from_home_row() {
        let board = Board::from_placement("8/8/8/8/8/4P3/8/8").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(5, 4), sq(3, 4), &board).unwrap());
    }

    #[test]
    fn forward_step_onto_piece_is_illegal() {
        let board = Board::from_placement("8/8/8/8/8/4p3/4P3/8").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(5, 4), &board).unwrap());
    }

    #[test]
    fn diagonal_only_captures() {
        let empty_diagonal = Board::create_initial();
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(5, 3), &empty_diagonal).unwrap());

        let with_target = Board::from_placement("8/8/8/8/8/3p4/4P3/8").unwrap();
        assert!(is_valid_pawn_move(Color::White, sq(6, 4), sq(5, 3), &with_target).unwrap());
    }

    #[test]
    fn black_pawn_captures_toward_higher_rows() {
        let board = Board::from_placement("8/4p3/3P4/8/8/8/8/8").unwrap();
        assert!(is_valid_pawn_move(Color::Black, sq(1, 4), sq(2, 3), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::Black, sq(1, 4), sq(2, 5), &board).unwrap());
    }

    #[test]
    fn white_pawn_cannot_capture_backward() {
        let board = Board::from_placement("8/8/8/8/8/8/4P3/3p4").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(6, 4), sq(7, 3), &board).unwrap());
    }

    #[test]
    fn black_double_step_blocked_by_middle_piece() {
        let board = Board::from_placement("8/4p3/4N3/8/8/8/8/8").unwrap();
        assert!(!is_valid_pawn_move(Color::Black, sq(1, 4), sq(3, 4), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::Black, sq(1, 4), sq(2, 4), &board).unwrap());
    }

    #[test]
    fn pawn_never_moves_backward_or_sideways() {
        let board = Board::from_placement("8/8/8/8/8/3pPp2/8/8").unwrap();
        assert!(!is_valid_pawn_move(Color::White, sq(5, 4), sq(6, 4), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::White, sq(5, 4), sq(5, 3), &board).unwrap());
        assert!(!is_valid_pawn_move(Color::White, sq(5, 4), sq(6, 5), &board).unwrap());
    }
}
