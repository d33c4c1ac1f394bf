//! Move-path enumeration for validating the generator.
//!
//! Counts leaf nodes at a fixed depth and tallies what kind of move produced
//! each leaf.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Leaf counts split by root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<Vec<(Move, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generator.generate_legal_moves(game_state, game_state.side_to_move)? {
        let next = apply_move_unchecked(game_state, mv)?;
        let counts = perft(generator, &next, depth - 1)?;
        out.push((mv, counts.nodes));
    }

    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    remaining: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state, game_state.side_to_move)?;

    for mv in moves {
        let next = apply_move_unchecked(game_state, mv)?;

        if remaining > 1 {
            perft_recurse(generator, &next, remaining - 1, counts)?;
            continue;
        }

        counts.nodes += 1;
        tally_leaf(generator, game_state, &next, mv, counts)?;
    }

    Ok(())
}

fn tally_leaf<G: MoveGenerator>(
    generator: &G,
    before: &GameState,
    after: &GameState,
    mv: Move,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let Some(mover) = before.piece_at(mv.from_row, mv.from_col) else {
        return Ok(());
    };

    if before.piece_at(mv.to_row, mv.to_col).is_some() {
        counts.captures += 1;
    }
    if mover.kind == PieceKind::King && mv.from_col.abs_diff(mv.to_col) == 2 {
        counts.castles += 1;
    }
    if mover.kind == PieceKind::Pawn && mv.to_row == mover.color.promotion_row() {
        counts.promotions += 1;
    }

    let defender = mover.color.opposite();
    if is_king_in_check(after, defender) {
        counts.checks += 1;
        if generator.generate_legal_moves(after, defender)?.is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}
