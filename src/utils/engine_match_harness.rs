//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any terminal
//! I/O, with an optional seeded random opening prefix.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{game_status, generate_legal_moves, GameStatus};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    #[inline]
    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::Light),
            MatchOutcome::BlackWinCheckmate => Some(Color::Dark),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        }
    }

    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner: Color::Light } => Some(MatchOutcome::WhiteWinCheckmate),
            GameStatus::Checkmate { winner: Color::Dark } => Some(MatchOutcome::BlackWinCheckmate),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

/// A game's result seen from the players rather than the colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

/// Engine moves made by one side and the wall time spent choosing them.
/// Random opening plies are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideClock {
    pub moves: u32,
    pub total_time_ns: u128,
}

impl SideClock {
    fn record(&mut self, elapsed_ns: u128) {
        self.moves = self.moves.saturating_add(1);
        self.total_time_ns = self.total_time_ns.saturating_add(elapsed_ns);
    }

    fn merged(self, other: SideClock) -> SideClock {
        SideClock {
            moves: self.moves.saturating_add(other.moves),
            total_time_ns: self.total_time_ns.saturating_add(other.total_time_ns),
        }
    }

    /// Mean time per move in milliseconds, 0 when no move was made.
    pub fn avg_move_time_ms(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            (self.total_time_ns as f64) / f64::from(self.moves) / 1_000_000.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white: SideClock,
    pub black: SideClock,
}

impl MatchResult {
    pub fn clock(&self, color: Color) -> SideClock {
        match color {
            Color::Light => self.white,
            Color::Dark => self.black,
        }
    }

    pub fn total_plies(&self) -> usize {
        self.opening_moves_lan.len() + self.played_moves_lan.len()
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

/// One player's totals across a series, whichever colour they had.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerTally {
    pub wins: u16,
    pub clock: SideClock,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub draws: u16,
    pub player1: PlayerTally,
    pub player2: PlayerTally,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn overall_avg_move_time_ms(&self) -> f64 {
        self.player1.clock.merged(self.player2.clock).avg_move_time_ms()
    }

    fn tally_mut(&mut self, player: PlayerId) -> &mut PlayerTally {
        match player {
            PlayerId::Player1 => &mut self.player1,
            PlayerId::Player2 => &mut self.player2,
        }
    }

    /// Fold one finished game in, returning its player-relative outcome.
    fn record(&mut self, result: &MatchResult, player1_color: Color) -> SeriesOutcome {
        let player_of = |color: Color| {
            if color == player1_color {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };

        for color in [Color::Light, Color::Dark] {
            let tally = self.tally_mut(player_of(color));
            tally.clock = tally.clock.merged(result.clock(color));
        }

        let mapped = match (result.outcome, result.outcome.winner()) {
            (_, Some(color)) => {
                let player = player_of(color);
                self.tally_mut(player).wins += 1;
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            (MatchOutcome::DrawStalemate, None) => SeriesOutcome::DrawStalemate,
            (_, None) => SeriesOutcome::DrawMaxPlies,
        };
        if result.outcome.is_draw() {
            self.draws += 1;
        }
        self.outcomes.push(mapped);
        mapped
    }
}

impl fmt::Display for MatchSeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: player1 {} wins ({:.3} ms/move), player2 {} wins ({:.3} ms/move), {} draws, {:.3} ms/move overall",
            self.games,
            self.player1.wins,
            self.player1.clock.avg_move_time_ms(),
            self.player2.wins,
            self.player2.clock.avg_move_time_ms(),
            self.draws,
            self.overall_avg_move_time_ms()
        )
    }
}

/// Running record of one game, turned into a `MatchResult` when it ends.
struct MatchLog {
    started_at: DateTime<Local>,
    opening_moves_lan: Vec<String>,
    played_moves_lan: Vec<String>,
    white: SideClock,
    black: SideClock,
}

impl MatchLog {
    fn record_time(&mut self, mover: Color, elapsed_ns: u128) {
        match mover {
            Color::Light => self.white.record(elapsed_ns),
            Color::Dark => self.black.record(elapsed_ns),
        }
    }

    fn finish(self, outcome: MatchOutcome, final_state: GameState) -> MatchResult {
        MatchResult {
            outcome,
            started_at: self.started_at,
            final_state,
            opening_moves_lan: self.opening_moves_lan,
            played_moves_lan: self.played_moves_lan,
            white: self.white,
            black: self.black,
        }
    }
}

/// Play a single seeded engine-vs-engine match from the start position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_state_internal(
        GameState::new_game(),
        &mut engine_white,
        &mut engine_black,
        seed,
        config,
        true,
    )
}

/// Play a match from a caller-provided state, without random opening plies.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_state_internal(
        start_state,
        &mut engine_white,
        &mut engine_black,
        seed,
        config,
        false,
    )
}

fn play_engine_match_from_state_internal(
    mut state: GameState,
    engine_white: &mut Box<dyn Engine>,
    engine_black: &mut Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();
    let started_at = Local::now();

    let opening_moves_lan = if apply_random_opening {
        let (state_after_opening, opening_moves_lan) = apply_seeded_random_opening(
            &state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?;
        state = state_after_opening;
        opening_moves_lan
    } else {
        Vec::new()
    };

    let mut log = MatchLog {
        started_at,
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        white: SideClock::default(),
        black: SideClock::default(),
    };

    for _ in 0..config.max_plies {
        let status = game_status(&state).map_err(|e| format!("failed to classify position: {e}"))?;
        if let Some(outcome) = MatchOutcome::from_status(status) {
            return Ok(log.finish(outcome, state));
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = if mover == Color::Light {
            engine_white.choose_move(&state, &config.go_params)?
        } else {
            engine_black.choose_move(&state, &config.go_params)?
        };
        log.record_time(mover, started.elapsed().as_nanos());

        let chosen = out
            .best_move
            .ok_or("engine returned no move in an ongoing position")?;
        let lan = move_to_long_algebraic(chosen)?;
        state = apply_move(&state, chosen).map_err(|e| format!("engine move {lan}: {e}"))?;
        log.played_moves_lan.push(lan);
    }

    Ok(log.finish(MatchOutcome::DrawMaxPlies, state))
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colours are drawn per game from a generator seeded by `base_seed`,
/// and game `i` uses opening seed `base_seed + i`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for game in 1..=config.games {
        let player1_color = if color_rng.random_bool(0.5) {
            Color::Light
        } else {
            Color::Dark
        };
        let seed = config.base_seed.wrapping_add(u64::from(game - 1));

        let (white, black) = match player1_color {
            Color::Light => (player1_factory(), player2_factory()),
            Color::Dark => (player2_factory(), player1_factory()),
        };
        if config.verbose {
            println!(
                "[series] game {game}/{} seed={seed} white={} black={}",
                config.games,
                white.name(),
                black.name()
            );
        }

        let result = play_engine_match(white, black, seed, config.per_game.clone())?;
        let mapped = stats.record(&result, player1_color);

        if config.verbose {
            println!(
                "[series] game {game}/{} started={} plies={} result={mapped:?} ({stats})\n",
                config.games,
                result.started_at.format("%Y-%m-%d %H:%M:%S"),
                result.total_plies()
            );
        }
    }

    Ok(stats)
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = generate_legal_moves(&state, state.side_to_move)
            .map_err(|e| format!("failed to generate legal opening moves: {e}"))?;
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves_lan.push(move_to_long_algebraic(chosen)?);
        state = apply_move(&state, chosen).map_err(|e| e.to_string())?;
    }

    Ok((state, opening_moves_lan))
}
