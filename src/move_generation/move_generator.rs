use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// Submitted move is not in the legal set of the side to move.
    IllegalMove(Move),
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::IllegalMove(mv) => write!(
                f,
                "illegal move ({},{}) -> ({},{})",
                mv.from_row, mv.from_col, mv.to_row, mv.to_col
            ),
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Source of legal moves for the search.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState, side: Color)
        -> MoveGenResult<Vec<Move>>;
}
