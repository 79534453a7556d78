//! Line-oriented text front-end.
//!
//! Reads commands from stdin, routes them to a [`ClickSession`] and writes
//! the rendered board to stdout. Input errors are reported and the loop
//! keeps going; only I/O failures end it early.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Board, Color, GameState, Square};
use crate::session::click_session::{ClickOutcome, ClickSession};
use crate::session::session_config::SessionConfig;
use crate::utils::render_game_state::render_board;

const HELP_TEXT: &str = "\
commands:
  click <row> <col>            select a piece, or move the selected piece
  pixel <x> <y>                click at a pixel position on the board surface
  move <r1> <c1> <r2> <c2>     move directly from one square to another
  board                        show the board
  turn                         show the side to move
  new                          start a new game
  load <placement> <w|b>       set up a position, e.g. load 8/8/8/8/8/8/4P3/8 w
  help                         show this text
  quit                         exit";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut frontend = TextFrontend::new(config);

    frontend.show_board(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = frontend.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextFrontend {
    session: ClickSession,
}

impl TextFrontend {
    pub fn new(config: SessionConfig) -> Self {
        info!(?config, "new game");
        Self {
            session: ClickSession::new(config),
        }
    }

    pub fn session(&self) -> &ClickSession {
        &self.session
    }

    /// Process one input line. Returns `Ok(true)` when the user asked to quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
                return Ok(false);
            }
            "board" => {
                self.show_board(out)?;
                return Ok(false);
            }
            "turn" => {
                writeln!(out, "{} to move", self.session.game().current_turn())?;
                return Ok(false);
            }
            "new" => {
                self.session.reset();
                info!("new game");
                Ok("new game".to_owned())
            }
            "click" => self.handle_click(&args),
            "pixel" => self.handle_pixel(&args),
            "move" => self.handle_move(&args),
            "load" => self.handle_load(&args),
            other => Err(ChessErrors::InvalidCommand(format!(
                "unknown command '{other}' (try 'help')"
            ))),
        };

        match result {
            Ok(message) => {
                writeln!(out, "{message}")?;
                self.show_board(out)?;
            }
            Err(err) => {
                warn!(%err, line = trimmed, "command failed");
                writeln!(out, "error: {err}")?;
            }
        }

        Ok(false)
    }

    pub fn show_board(&self, out: &mut impl Write) -> io::Result<()> {
        let rendered = render_board(
            self.session.game().board(),
            self.session.selected(),
            self.session.config(),
        );
        write!(out, "{rendered}")?;
        writeln!(out, "{} to move", self.session.game().current_turn())
    }

    fn handle_click(&mut self, args: &[&str]) -> ChessResult<String> {
        let [row, col] = parse_numbers::<2>("click", args)?;
        let outcome = self.session.click(Square::new(row, col)?)?;
        Ok(describe(outcome))
    }

    fn handle_pixel(&mut self, args: &[&str]) -> ChessResult<String> {
        let [x, y] = parse_numbers::<2>("pixel", args)?;
        let outcome = self.session.click_pixel(x, y)?;
        Ok(describe(outcome))
    }

    fn handle_move(&mut self, args: &[&str]) -> ChessResult<String> {
        let [r1, c1, r2, c2] = parse_numbers::<4>("move", args)?;
        let start = Square::new(r1, c1)?;
        let end = Square::new(r2, c2)?;
        self.session.clear_selection();
        if self.session.game_mut().try_move(start, end)? {
            Ok(describe(ClickOutcome::Moved { start, end }))
        } else {
            Ok(describe(ClickOutcome::Rejected { start, end }))
        }
    }

    fn handle_load(&mut self, args: &[&str]) -> ChessResult<String> {
        let [placement, side] = args else {
            return Err(ChessErrors::InvalidCommand(
                "'load' takes a placement and a side (w or b)".to_owned(),
            ));
        };
        let turn = match *side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessErrors::InvalidCommand(format!(
                    "side must be 'w' or 'b', got '{other}'"
                )))
            }
        };
        let board = Board::from_placement(placement)?;
        let config = self.session.config().clone();
        self.session = ClickSession::with_game(GameState::from_board(board, turn), config);
        info!(placement = *placement, %turn, "position loaded");
        Ok(format!("loaded position, {turn} to move"))
    }
}

fn parse_numbers<const N: usize>(cmd: &str, args: &[&str]) -> ChessResult<[i32; N]> {
    if args.len() != N {
        return Err(ChessErrors::InvalidCommand(format!(
            "'{cmd}' takes {N} numbers, got {}",
            args.len()
        )));
    }
    let mut values = [0i32; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg
            .parse()
            .map_err(|_| ChessErrors::InvalidCommand(format!("'{arg}' is not a number")))?;
    }
    Ok(values)
}

fn describe(outcome: ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Selected(square) => format!("selected {square}"),
        ClickOutcome::Moved { start, end } => format!("moved {start} -> {end}"),
        ClickOutcome::Rejected { start, end } => format!("move {start} -> {end} rejected"),
        ClickOutcome::Deselected => "selection cleared".to_owned(),
        ClickOutcome::Ignored => "nothing to select there".to_owned(),
    }
}
