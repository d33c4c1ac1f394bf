//! Interactive terminal game: a human against the alpha-beta engine.
//!
//! Reads one command per line, keeps the current position, and lets the
//! engine answer every accepted human move. Output is plain text so the loop
//! can be driven from tests through any `Write` sink.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::engines::engine_alpha_beta::{AlphaBetaEngine, DEFAULT_DEPTH};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::GameStatus;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::{render_game_state, render_with_highlights};

const HELP_TEXT: &str = "\
commands:
  <move>         play a move in long algebraic form, e.g. e2e3 or a7a8q
  moves [square] list legal moves, or highlight one piece's destinations
  board          show the board
  fen            print the position as FEN
  depth <n>      set the engine search depth (n >= 1)
  new            restart from the session's starting position
  help           show this text
  quit           leave";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub depth: u32,
    pub human_color: Color,
    pub start_fen: Option<String>,
    /// Echo the engine's info lines.
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            human_color: Color::Light,
            start_fen: None,
            verbose: false,
        }
    }
}

impl SessionConfig {
    /// Parse `--depth N`, `--black`, `--fen "<fen>"` and `--verbose`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--depth" | "-d" => {
                    let value = args.next().ok_or("--depth needs a value")?;
                    config.depth = parse_depth(&value)?;
                }
                "--black" => config.human_color = Color::Dark,
                "--white" => config.human_color = Color::Light,
                "--fen" => {
                    let value = args.next().ok_or("--fen needs a value")?;
                    GameState::from_fen(&value)?;
                    config.start_fen = Some(value);
                }
                "--verbose" | "-v" => config.verbose = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(config)
    }
}

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    session.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    config: SessionConfig,
    /// Position `new` returns to: the `--fen` position if given.
    start_state: GameState,
    game_state: GameState,
    engine: AlphaBetaEngine,
    game_over: bool,
}

impl TerminalSession {
    pub fn new(config: SessionConfig) -> Result<Self, String> {
        let start_state = match &config.start_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };
        let engine = AlphaBetaEngine::new(config.depth);

        Ok(Self {
            config,
            game_state: start_state.clone(),
            start_state,
            engine,
            game_over: false,
        })
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.engine.default_depth()
    }

    /// Greet, show the board, and let the engine open if it plays White.
    pub fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "minimax chess, session started {}",
            Local::now().format("%Y-%m-%d %H:%M")
        )?;
        writeln!(
            out,
            "you play {}, engine depth {}. type 'help' for commands.",
            color_name(self.config.human_color),
            self.depth()
        )?;
        self.begin_game(out)
    }

    fn begin_game(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.game_over = false;
        self.engine.new_game();
        writeln!(out, "{}", render_game_state(&self.game_state))?;

        if self.report_status(out)? {
            return Ok(());
        }
        if self.game_state.side_to_move != self.config.human_color {
            self.engine_turn(out)?;
        }
        Ok(())
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => writeln!(out, "{}", render_game_state(&self.game_state))?,
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "new" => {
                self.game_state = self.start_state.clone();
                self.begin_game(out)?;
            }
            "depth" => match parts.next().map(parse_depth) {
                Some(Ok(depth)) => {
                    self.engine.set_default_depth(depth);
                    writeln!(out, "engine depth set to {depth}")?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "engine depth is {}", self.depth())?,
            },
            "moves" => self.handle_moves(parts.next(), out)?,
            _ => self.handle_move_text(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_moves(&self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let moves = match square {
            None => self.game_state.legal_moves(self.game_state.side_to_move),
            Some(text) => match algebraic_to_square(text) {
                Ok((row, col)) => self.game_state.piece_legal_moves(row, col),
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    return Ok(());
                }
            },
        };
        let moves = match moves {
            Ok(moves) => moves,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        };

        if square.is_some() {
            let targets: Vec<(u8, u8)> = moves.iter().map(|mv| mv.to()).collect();
            writeln!(out, "{}", render_with_highlights(&self.game_state, &targets))?;
        }

        let listed: Vec<String> = moves
            .iter()
            .filter_map(|mv| move_to_long_algebraic(*mv).ok())
            .collect();
        if listed.is_empty() {
            writeln!(out, "no legal moves")?;
        } else {
            writeln!(out, "{}", listed.join(" "))?;
        }
        Ok(())
    }

    fn handle_move_text(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match long_algebraic_to_move(text) {
            Ok(mv) => mv,
            Err(_) => {
                writeln!(out, "unknown command: {text} (type 'help')")?;
                return Ok(());
            }
        };

        if self.game_over {
            writeln!(out, "the game is over; type 'new' to play again")?;
            return Ok(());
        }
        if self.game_state.side_to_move != self.config.human_color {
            writeln!(out, "it is not your turn")?;
            return Ok(());
        }

        match self.game_state.apply_move(mv) {
            Ok(next) => self.game_state = next,
            Err(err) => {
                writeln!(out, "illegal move {text}: {err}")?;
                return Ok(());
            }
        }

        writeln!(out, "you play {}", text.to_ascii_lowercase())?;
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        if self.report_status(out)? {
            return Ok(());
        }

        self.engine_turn(out)
    }

    fn engine_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        let output = match self.engine.choose_move(&self.game_state, &GoParams::default()) {
            Ok(output) => output,
            Err(err) => {
                writeln!(out, "engine error: {err}")?;
                return Ok(());
            }
        };

        if self.config.verbose {
            for line in &output.info_lines {
                writeln!(out, "{line}")?;
            }
        }

        let Some(mv) = output.best_move else {
            return self.report_status(out).map(|_| ());
        };

        match self.game_state.apply_move(mv) {
            Ok(next) => self.game_state = next,
            Err(err) => {
                writeln!(out, "engine error: {err}")?;
                return Ok(());
            }
        }

        let lan = move_to_long_algebraic(mv).unwrap_or_else(|_| "????".to_owned());
        match output.score {
            Some(score) => writeln!(out, "engine plays {lan} (score {score})")?,
            None => writeln!(out, "engine plays {lan}")?,
        }
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        self.report_status(out).map(|_| ())
    }

    /// Print check/checkmate/stalemate notices. Returns `true` if the game ended.
    fn report_status(&mut self, out: &mut impl Write) -> io::Result<bool> {
        let status = match self.game_state.status() {
            Ok(status) => status,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(false);
            }
        };

        match status {
            GameStatus::Checkmate { winner } => {
                writeln!(out, "checkmate! {} wins.", color_name(winner))?;
                self.game_over = true;
            }
            GameStatus::Stalemate => {
                writeln!(out, "stalemate. the game is drawn.")?;
                self.game_over = true;
            }
            GameStatus::Ongoing => {
                let side = self.game_state.side_to_move;
                if self.game_state.is_in_check(side) {
                    writeln!(out, "{} is in check.", color_name(side))?;
                }
            }
        }

        Ok(self.game_over)
    }
}

fn parse_depth(text: &str) -> Result<u32, String> {
    match text.parse::<u32>() {
        Ok(depth) if depth >= 1 => Ok(depth),
        _ => Err(format!("depth must be a positive integer, got '{text}'")),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Light => "white",
        Color::Dark => "black",
    }
}
