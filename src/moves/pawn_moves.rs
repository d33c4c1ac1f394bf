use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{offset_square, piece_on};

/// Single step forward onto an empty cell, then diagonal captures (left, right).
pub fn generate_pawn_moves(board: &Board, row: u8, col: u8, color: Color, out: &mut Vec<Move>) {
    let dr = color.pawn_direction();

    if let Some((r, c)) = offset_square(row, col, dr, 0) {
        if piece_on(board, r, c).is_none() {
            out.push(Move::new(row, col, r, c));
        }
    }

    for dc in [-1, 1] {
        if let Some((r, c)) = offset_square(row, col, dr, dc) {
            if matches!(piece_on(board, r, c), Some(target) if target.color != color) {
                out.push(Move::new(row, col, r, c));
            }
        }
    }
}
