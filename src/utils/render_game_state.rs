//! Terminal-oriented board renderer.
//!
//! Produces a human-readable view of the board for the text front-end and
//! for test diagnostics. Row 0 (black's back rank) is printed first.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::session::session_config::SessionConfig;

/// Render `board`, bracketing `selected` if given.
pub fn render_board(board: &Board, selected: Option<Square>, config: &SessionConfig) -> String {
    let mut grid: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
    for (square, piece) in board.occupied_squares() {
        grid[square.row as usize][square.col as usize] = Some(piece);
    }

    let mut out = String::new();

    if config.show_coordinates {
        out.push_str(&column_header(config.unicode));
        out.push('\n');
    }

    for (row, cells) in grid.iter().enumerate() {
        if config.show_coordinates {
            out.push(char::from(b'0' + row as u8));
            out.push(' ');
        }

        for (col, cell) in cells.iter().enumerate() {
            let square = Square::unchecked(row as i32, col as i32);
            let is_selected = selected == Some(square);
            out.push(if is_selected { '[' } else { ' ' });
            match *cell {
                Some(piece) if config.unicode => out.push(piece_to_unicode(piece)),
                Some(piece) => out.push_str(&piece.token()),
                None if config.unicode => out.push('·'),
                None => out.push_str(".."),
            }
            out.push(if is_selected { ']' } else { ' ' });
        }

        out.push('\n');
    }

    out
}

fn column_header(unicode: bool) -> String {
    let mut header = String::from("  ");
    for col in 0..8u8 {
        header.push(' ');
        header.push(char::from(b'0' + col));
        header.push(' ');
        if !unicode {
            header.push(' ');
        }
    }
    header.trim_end().to_owned()
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
