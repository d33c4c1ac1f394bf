//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximises and Black minimises an absolute material score. Moves are
//! explored in generation order; a later move only replaces the current best
//! when strictly better, so the first of several equal moves is kept. Nodes
//! with no legal move are scored like horizon nodes (material only).
//!
//! Two interchangeable walkers exist: a recursive one and one driven by an
//! explicit stack of frames. They visit the same nodes in the same order and
//! return identical results; the explicit stack is used for depths beyond
//! `RECURSION_DEPTH_LIMIT` so deep requests cannot exhaust the call stack.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::search::board_scoring::BoardScorer;

pub const SCORE_INFINITY: i32 = i32::MAX;
pub const RECURSION_DEPTH_LIMIT: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Recursive,
    ExplicitStack,
    /// Recursive up to `RECURSION_DEPTH_LIMIT`, explicit stack beyond.
    Auto,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u32,
    pub strategy: SearchStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            strategy: SearchStrategy::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u32,
    pub nodes: u64,
}

pub fn search<S: BoardScorer>(
    game_state: &GameState,
    side: Color,
    scorer: &S,
    config: SearchConfig,
) -> MoveGenResult<SearchResult> {
    search_with_generator(game_state, side, &LegalMoveGenerator, scorer, config)
}

pub fn search_with_generator<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    side: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> MoveGenResult<SearchResult> {
    let use_stack = match config.strategy {
        SearchStrategy::Recursive => false,
        SearchStrategy::ExplicitStack => true,
        SearchStrategy::Auto => config.depth > RECURSION_DEPTH_LIMIT,
    };

    let mut nodes = 0u64;
    let (best_score, best_move) = if use_stack {
        alpha_beta_explicit_stack(game_state, side, generator, scorer, config.depth, &mut nodes)?
    } else {
        alpha_beta(
            game_state,
            side,
            generator,
            scorer,
            config.depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            &mut nodes,
        )?
    };

    Ok(SearchResult {
        best_move,
        best_score,
        depth: config.depth,
        nodes,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    side: Color,
    generator: &G,
    scorer: &S,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> MoveGenResult<(i32, Option<Move>)> {
    *nodes += 1;

    if depth == 0 {
        return Ok((scorer.score(game_state), None));
    }

    let moves = generator.generate_legal_moves(game_state, side)?;
    if moves.is_empty() {
        return Ok((scorer.score(game_state), None));
    }

    let maximizing = side == Color::Light;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;

    for mv in moves {
        let next = apply_move_unchecked(game_state, mv)?;
        let (score, _) = alpha_beta(
            &next,
            side.opposite(),
            generator,
            scorer,
            depth - 1,
            alpha,
            beta,
            nodes,
        )?;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    Ok((best_score, best_move))
}

struct Frame {
    state: GameState,
    side: Color,
    depth: u32,
    alpha: i32,
    beta: i32,
    moves: Vec<Move>,
    next: usize,
    best_score: i32,
    best_move: Option<Move>,
}

impl Frame {
    fn new(state: GameState, side: Color, depth: u32, alpha: i32, beta: i32, moves: Vec<Move>) -> Self {
        let best_score = if side == Color::Light {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        Self {
            state,
            side,
            depth,
            alpha,
            beta,
            moves,
            next: 0,
            best_score,
            best_move: None,
        }
    }

    /// Fold a child's score into this frame; a cutoff skips the remaining moves.
    fn absorb(&mut self, mv: Move, score: i32) {
        if self.side == Color::Light {
            if score > self.best_score {
                self.best_score = score;
                self.best_move = Some(mv);
            }
            self.alpha = self.alpha.max(score);
        } else {
            if score < self.best_score {
                self.best_score = score;
                self.best_move = Some(mv);
            }
            self.beta = self.beta.min(score);
        }

        if self.beta <= self.alpha {
            self.next = self.moves.len();
        }
    }
}

pub fn alpha_beta_explicit_stack<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    side: Color,
    generator: &G,
    scorer: &S,
    depth: u32,
    nodes: &mut u64,
) -> MoveGenResult<(i32, Option<Move>)> {
    *nodes += 1;

    if depth == 0 {
        return Ok((scorer.score(game_state), None));
    }

    let root_moves = generator.generate_legal_moves(game_state, side)?;
    if root_moves.is_empty() {
        return Ok((scorer.score(game_state), None));
    }

    let mut stack = Vec::<Frame>::with_capacity(depth.min(RECURSION_DEPTH_LIMIT) as usize + 1);
    stack.push(Frame::new(
        game_state.clone(),
        side,
        depth,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        root_moves,
    ));

    while let Some(top) = stack.last_mut() {
        if top.next < top.moves.len() {
            let mv = top.moves[top.next];
            top.next += 1;

            let child = apply_move_unchecked(&top.state, mv)?;
            let child_side = top.side.opposite();
            let child_depth = top.depth - 1;
            *nodes += 1;

            if child_depth == 0 {
                top.absorb(mv, scorer.score(&child));
                continue;
            }

            let child_moves = generator.generate_legal_moves(&child, child_side)?;
            if child_moves.is_empty() {
                top.absorb(mv, scorer.score(&child));
                continue;
            }

            let (alpha, beta) = (top.alpha, top.beta);
            stack.push(Frame::new(child, child_side, child_depth, alpha, beta, child_moves));
            continue;
        }

        let Some(done) = stack.pop() else {
            break;
        };
        match stack.last_mut() {
            Some(parent) => {
                let mv = parent.moves[parent.next - 1];
                parent.absorb(mv, done.best_score);
            }
            None => return Ok((done.best_score, done.best_move)),
        }
    }

    Err(MoveGenerationError::InvalidState(
        "search stack drained without a root result".to_owned(),
    ))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{search, search_with_generator, SearchConfig, SearchStrategy};
    use crate::game_state::chess_types::{Color, Move};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move_unchecked;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::move_generation::move_generator::{
        MoveGenResult, MoveGenerationError, MoveGenerator,
    };
    use crate::search::board_scoring::{BoardScorer, MaterialScorer};
    use crate::utils::long_algebraic::long_algebraic_to_move;

    /// Exhaustive minimax without pruning, used as the reference score.
    fn minimax(game: &GameState, side: Color, depth: u32, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return MaterialScorer.score(game);
        }
        let moves = generate_legal_moves(game, side).expect("movegen should succeed");
        if moves.is_empty() {
            return MaterialScorer.score(game);
        }
        let scores = moves.into_iter().map(|mv| {
            let next = apply_move_unchecked(game, mv).expect("legal move should apply");
            minimax(&next, side.opposite(), depth - 1, nodes)
        });
        if side == Color::Light {
            scores.max().unwrap_or_default()
        } else {
            scores.min().unwrap_or_default()
        }
    }

    fn run(game: &GameState, side: Color, depth: u32, strategy: SearchStrategy) -> super::SearchResult {
        search(game, side, &MaterialScorer, SearchConfig { depth, strategy }).expect("search should run")
    }

    fn sample_positions() -> Vec<GameState> {
        let mut positions = vec![
            GameState::from_fen("r3k2r/ppp2ppp/2n1bn2/3qp3/3P4/2N1BN2/PPP1QPPP/R3K2R w KQkq - 0 1")
                .expect("FEN should parse"),
            GameState::from_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1").expect("FEN should parse"),
            GameState::from_fen("r1b1k2r/pp3ppp/2n5/2bpp3/4P1q1/2NP1N2/PPP2PPP/R1BQKB1R b KQkq - 0 1")
                .expect("FEN should parse"),
        ];

        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = GameState::new_game();
        for _ in 0..14 {
            let moves = generate_legal_moves(&state, state.side_to_move).expect("movegen should succeed");
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.random_range(0..moves.len())];
            state = state.apply_move(mv).expect("picked move should be legal");
        }
        positions.push(state);
        positions
    }

    #[test]
    fn depth_zero_returns_evaluation_only() {
        let game = GameState::new_game();
        let result = run(&game, Color::Light, 0, SearchStrategy::Recursive);

        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn first_move_wins_ties() {
        let game = GameState::new_game();
        let white = run(&game, Color::Light, 1, SearchStrategy::Recursive);
        assert_eq!(white.best_move, Some(Move::new(6, 0, 5, 0)));
        assert_eq!(white.best_score, 0);

        let after = game
            .apply_move(Move::new(6, 0, 5, 0))
            .expect("a2a3 should be legal");
        // Row 0 is scanned first, so the b8 knight leads Black's move list.
        let black = run(&after, Color::Dark, 1, SearchStrategy::Recursive);
        assert_eq!(black.best_move, Some(Move::new(0, 1, 2, 0)));
    }

    #[test]
    fn takes_hanging_rook_at_depth_one() {
        let game = GameState::from_fen("4k3/8/8/3r4/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let result = run(&game, Color::Light, 1, SearchStrategy::Recursive);

        assert_eq!(result.best_move, Some(long_algebraic_to_move("d1d5").expect("valid text")));
        assert_eq!(result.best_score, 90);
    }

    #[test]
    fn avoids_defended_pawn_at_depth_two() {
        let game = GameState::from_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let result = run(&game, Color::Light, 2, SearchStrategy::Recursive);

        assert_eq!(result.best_score, 70);
        assert_ne!(result.best_move, Some(long_algebraic_to_move("d1d5").expect("valid text")));
    }

    #[test]
    fn no_legal_moves_at_root_returns_evaluation() {
        let game = GameState::from_fen("7k/8/8/8/8/8/5PPP/r5K1 w - - 0 1").expect("FEN should parse");
        let result = run(&game, Color::Light, 3, SearchStrategy::Recursive);

        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 30 - 50);
    }

    #[test]
    fn pruned_score_matches_exhaustive_minimax() {
        for game in sample_positions() {
            let side = game.side_to_move;
            for depth in [2, 3] {
                let mut minimax_nodes = 0u64;
                let reference = minimax(&game, side, depth, &mut minimax_nodes);
                let pruned = run(&game, side, depth, SearchStrategy::Recursive);

                assert_eq!(pruned.best_score, reference, "depth {depth} on {}", game.get_fen());
                assert!(pruned.nodes <= minimax_nodes);

                // The chosen move must itself achieve the reference score.
                let best = pruned.best_move.expect("positions have legal moves");
                let next = apply_move_unchecked(&game, best).expect("best move should apply");
                let mut scratch = 0u64;
                assert_eq!(minimax(&next, side.opposite(), depth - 1, &mut scratch), reference);
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes_than_minimax() {
        let game = GameState::new_game();
        let mut minimax_nodes = 0u64;
        let _ = minimax(&game, Color::Light, 3, &mut minimax_nodes);
        let pruned = run(&game, Color::Light, 3, SearchStrategy::Recursive);

        assert!(pruned.nodes < minimax_nodes);
    }

    #[test]
    fn explicit_stack_matches_recursive_search() {
        for game in sample_positions() {
            let side = game.side_to_move;
            for depth in [1, 2, 3] {
                let recursive = run(&game, side, depth, SearchStrategy::Recursive);
                let stacked = run(&game, side, depth, SearchStrategy::ExplicitStack);
                assert_eq!(recursive, stacked, "depth {depth} on {}", game.get_fen());
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        let game = sample_positions().remove(0);
        let a = run(&game, Color::Light, 3, SearchStrategy::Auto);
        let b = run(&game, Color::Light, 3, SearchStrategy::Auto);
        assert_eq!(a, b);
    }

    #[test]
    fn movegen_errors_propagate() {
        struct BrokenGenerator;

        impl MoveGenerator for BrokenGenerator {
            fn generate_legal_moves(&self, _game_state: &GameState, _side: Color) -> MoveGenResult<Vec<Move>> {
                Err(MoveGenerationError::InvalidState("broken".to_owned()))
            }
        }

        let game = GameState::new_game();
        for strategy in [SearchStrategy::Recursive, SearchStrategy::ExplicitStack] {
            let err = search_with_generator(
                &game,
                Color::Light,
                &BrokenGenerator,
                &MaterialScorer,
                SearchConfig { depth: 2, strategy },
            )
            .expect_err("broken generator should fail the search");
            assert!(matches!(err, MoveGenerationError::InvalidState(_)));
        }
    }
}
