//! Fixed-depth alpha-beta engine.
//!
//! Wraps `search::alpha_beta` with the material scorer. The requested depth
//! comes from `GoParams`, otherwise the engine's configured default is used.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{search, SearchConfig, SearchStrategy};
use crate::search::board_scoring::MaterialScorer;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const DEFAULT_DEPTH: u32 = 3;

pub struct AlphaBetaEngine {
    default_depth: u32,
    strategy: SearchStrategy,
    scorer: MaterialScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u32) -> Self {
        Self {
            default_depth: default_depth.max(1),
            strategy: SearchStrategy::Auto,
            scorer: MaterialScorer,
        }
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn default_depth(&self) -> u32 {
        self.default_depth
    }

    pub fn set_default_depth(&mut self, depth: u32) {
        self.default_depth = depth.max(1);
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let result = search(
            game_state,
            game_state.side_to_move,
            &self.scorer,
            SearchConfig {
                depth,
                strategy: self.strategy,
            },
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: Vec::new(),
        };

        let pv = match result.best_move {
            Some(mv) => move_to_long_algebraic(mv)?,
            None => "(none)".to_owned(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} pv {}",
            result.depth, result.best_score, result.nodes, pv
        ));

        Ok(out)
    }
}
