//! Turn coordination over a single board.
//!
//! `GameState` owns the board and the side to move. It is the only holder of
//! a mutable board handle: legality checks borrow the board immutably, and a
//! move is written back only after it has been accepted. The state machine
//! has two states (white to move, black to move) and no terminal state.

use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_valid_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::create_initial(), Color::White)
    }

    /// Arbitrary position. The board is not checked for well-formedness.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// Hand the move to the other side.
    #[inline]
    pub(crate) fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Attempt to play the piece on `start` to `end`.
    ///
    /// Returns `Ok(true)` when the move was legal and has been applied (board
    /// updated, turn flipped). Returns `Ok(false)` without changing anything
    /// when `start` is empty, the piece belongs to the side not on move, or
    /// the move is illegal; these cases are deliberately indistinguishable to
    /// the caller. Off-board squares are `Err(OutOfBounds)`.
    pub fn try_move(&mut self, start: Square, end: Square) -> ChessResult<bool> {
        end.validate()?;
        let Some(piece) = self.board.get(start)? else {
            debug!(%start, "no piece on start square");
            return Ok(false);
        };

        if piece.color != self.turn {
            debug!(%piece, turn = %self.turn, "piece does not belong to side to move");
            return Ok(false);
        }

        if !is_valid_move(piece, start, end, &self.board)? {
            debug!(%piece, %start, %end, "illegal move");
            return Ok(false);
        }

        let captured = apply_move(&mut self.board, start, end)?;
        match captured {
            Some(taken) => info!(%piece, %start, %end, captured = %taken, "move applied"),
            None => info!(%piece, %start, %end, "move applied"),
        }
        self.toggle_turn();
        Ok(true)
    }
}
