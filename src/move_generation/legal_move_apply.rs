use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};

/// Apply `mv` for the side to move after checking it against the legal set.
///
/// On rejection the caller keeps its previous state untouched.
pub fn apply_move(game_state: &GameState, mv: Move) -> MoveGenResult<GameState> {
    let legal = generate_legal_moves(game_state, game_state.side_to_move)?;
    if !legal.contains(&mv) {
        return Err(MoveGenerationError::IllegalMove(mv));
    }
    apply_move_unchecked(game_state, mv)
}

/// Produce the successor state without any legality test.
///
/// The mover's colour comes from the piece on the source cell, not from
/// `side_to_move`; the successor's side to move is the mover's opponent.
pub fn apply_move_unchecked(game_state: &GameState, mv: Move) -> MoveGenResult<GameState> {
    if mv.from_row > 7 || mv.from_col > 7 || mv.to_row > 7 || mv.to_col > 7 {
        return Err(MoveGenerationError::InvalidState(format!(
            "move coordinates out of range: {mv:?}"
        )));
    }

    let (fr, fc) = (usize::from(mv.from_row), usize::from(mv.from_col));
    let (tr, tc) = (usize::from(mv.to_row), usize::from(mv.to_col));

    let piece = game_state.board[fr][fc].ok_or_else(|| {
        MoveGenerationError::InvalidState(format!(
            "no piece on source cell ({}, {})",
            mv.from_row, mv.from_col
        ))
    })?;

    let mut next = game_state.clone();

    // Capture is implicit: the destination is overwritten.
    next.board[fr][fc] = None;
    next.board[tr][tc] = Some(piece);

    if piece.kind == PieceKind::Pawn && mv.to_row == piece.color.promotion_row() {
        next.board[tr][tc] = Some(Piece::new(piece.color, PieceKind::Queen));
    }

    if piece.kind == PieceKind::King {
        if mv.from_col.abs_diff(mv.to_col) == 2 {
            let (rook_from, rook_to) = if mv.to_col == KINGSIDE_KING_TARGET_COL {
                (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
            } else {
                (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
            };
            move_rook(&mut next.board, mv.to_row, rook_from, rook_to);
        }
        next.castling_rights.revoke(piece.color);
    }

    next.side_to_move = piece.color.opposite();

    Ok(next)
}

fn move_rook(board: &mut Board, row: u8, from_col: u8, to_col: u8) {
    let row = usize::from(row);
    let rook = board[row][usize::from(from_col)].take();
    board[row][usize::from(to_col)] = rook;
}
