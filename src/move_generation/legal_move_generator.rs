//! Legal move filtering and end-of-game classification.
//!
//! Every pseudo-legal candidate is applied to its own copy of the state and
//! kept only if the mover's king is not attacked afterwards. The opponent's
//! moves are regenerated for each candidate, so a call costs O(moves²).

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::move_generation::pseudo_legal_moves::generate_pseudo_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState, side: Color) -> MoveGenResult<Vec<Move>> {
        generate_legal_moves(game_state, side)
    }
}

pub fn generate_legal_moves(game_state: &GameState, side: Color) -> MoveGenResult<Vec<Move>> {
    let pseudo = generate_pseudo_legal_moves(game_state, side);
    let mut legal = Vec::<Move>::with_capacity(pseudo.len());

    for mv in pseudo {
        let next = apply_move_unchecked(game_state, mv)?;
        if is_king_in_check(&next, side) {
            continue;
        }
        legal.push(mv);
    }

    Ok(legal)
}

/// In check with no legal reply.
pub fn is_checkmate(game_state: &GameState, side: Color) -> MoveGenResult<bool> {
    if !is_king_in_check(game_state, side) {
        return Ok(false);
    }
    Ok(generate_legal_moves(game_state, side)?.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    /// No legal move while not in check. Callers score this as a draw.
    Stalemate,
}

/// Classify the position for the side to move.
pub fn game_status(game_state: &GameState) -> MoveGenResult<GameStatus> {
    let side = game_state.side_to_move;
    if !generate_legal_moves(game_state, side)?.is_empty() {
        return Ok(GameStatus::Ongoing);
    }

    if is_king_in_check(game_state, side) {
        Ok(GameStatus::Checkmate {
            winner: side.opposite(),
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}
