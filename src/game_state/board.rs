//! 8x8 occupancy grid.
//!
//! `Board` stores at most one piece per square and nothing else. It performs
//! no legality checks; every read and write goes through a bounds-checked
//! accessor so an off-board square surfaces as `ChessErrors::OutOfBounds`
//! instead of a panic.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with no pieces on it.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn create_initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color) as usize;
            let pawns = pawn_home_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(color, *kind));
                board.cells[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Read the occupant of `square`.
    #[inline]
    pub fn get(&self, square: Square) -> ChessResult<Option<Piece>> {
        let (row, col) = Self::index(square)?;
        Ok(self.cells[row][col])
    }

    /// Unconditionally overwrite `square`.
    #[inline]
    pub fn set(&mut self, square: Square, value: Option<Piece>) -> ChessResult<()> {
        let (row, col) = Self::index(square)?;
        self.cells[row][col] = value;
        Ok(())
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> ChessResult<bool> {
        Ok(self.get(square)?.is_none())
    }

    /// All occupied squares in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::unchecked(row as i32, col as i32), piece))
            })
        })
    }

    /// Parse a piece-placement field such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// The first group is row 0. Digits count empty squares, upper case is
    /// white, lower case is black.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ChessErrors::InvalidPlacement(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_str.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(ChessErrors::InvalidPlacement(format!(
                            "invalid empty-square count '{ch}'"
                        )));
                    }
                    col += run as usize;
                    continue;
                }

                let piece = Piece::from_placement_char(ch).ok_or_else(|| {
                    ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
                })?;
                if col >= 8 {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "row {row} has too many columns"
                    )));
                }
                board.cells[row][col] = Some(piece);
                col += 1;
            }

            if col != 8 {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "row {row} does not sum to 8 columns"
                )));
            }
        }

        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty_run = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        out.push(piece.placement_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
            }
        }
        out
    }

    #[inline]
    fn index(square: Square) -> ChessResult<(usize, usize)> {
        square.validate()?;
        Ok((square.row as usize, square.col as usize))
    }
}

/// Starting board; free-function form of [`Board::create_initial`].
#[inline]
pub fn create_initial_board() -> Board {
    Board::create_initial()
}
