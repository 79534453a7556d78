//! Two-click move entry.
//!
//! The first click selects a piece of the side to move, the second click
//! names the destination. Whatever the outcome of that second click, the
//! selection is cleared. Pixel coordinates are mapped to squares using the
//! configured board size.

use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{GameState, Square};
use crate::session::session_config::SessionConfig;

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected piece moved; the turn has passed.
    Moved { start: Square, end: Square },
    /// The move was refused; the selection is dropped.
    Rejected { start: Square, end: Square },
    /// The selected square no longer held a piece; the selection is dropped.
    Deselected,
    /// Nothing selected and the click was not on a piece of the side to move.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ClickSession {
    game: GameState,
    selected: Option<Square>,
    config: SessionConfig,
}

impl ClickSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(GameState::new_game(), config)
    }

    pub fn with_game(game: GameState, config: SessionConfig) -> Self {
        Self {
            game,
            selected: None,
            config,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct access for callers that bypass clicking (typed moves).
    #[inline]
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Drop the pending selection, if any.
    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start over from the initial position with nothing selected.
    pub fn reset(&mut self) {
        self.game = GameState::new_game();
        self.selected = None;
    }

    /// Map a pixel on the drawing surface to the square under it.
    pub fn square_from_pixel(&self, x: i32, y: i32) -> ChessResult<Square> {
        let size = i32::try_from(self.config.square_pixels().max(1)).unwrap_or(i32::MAX);
        Square::new(y.div_euclid(size), x.div_euclid(size))
    }

    pub fn click_pixel(&mut self, x: i32, y: i32) -> ChessResult<ClickOutcome> {
        let square = self.square_from_pixel(x, y)?;
        self.click(square)
    }

    pub fn click(&mut self, square: Square) -> ChessResult<ClickOutcome> {
        square.validate()?;

        if let Some(start) = self.selected.take() {
            if self.game.board().is_empty(start)? {
                debug!(%start, "selection pointed at an empty square");
                return Ok(ClickOutcome::Deselected);
            }
            return if self.game.try_move(start, square)? {
                Ok(ClickOutcome::Moved { start, end: square })
            } else {
                Ok(ClickOutcome::Rejected { start, end: square })
            };
        }

        match self.game.board().get(square)? {
            Some(piece) if piece.color == self.game.current_turn() => {
                debug!(%piece, %square, "selected");
                self.selected = Some(square);
                Ok(ClickOutcome::Selected(square))
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }
}
