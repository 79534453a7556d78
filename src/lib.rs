//! Crate root module declarations for the Diddy Chess move engine.
//!
//! The engine answers one question: may this piece move from this square to
//! that one on the current board? Around it sit the board model, a turn
//! coordinator that applies accepted moves, a two-click selection session and
//! a small text front-end.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod path_clearance;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
}

pub mod session {
    pub mod click_session;
    pub mod session_config;
    pub mod text_frontend;
}

pub mod utils {
    pub mod logging;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board::create_initial_board;
pub use game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_valid_move;
