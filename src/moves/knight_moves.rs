use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{can_land_on, offset_square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub fn generate_knight_moves(board: &Board, row: u8, col: u8, color: Color, out: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some((r, c)) = offset_square(row, col, dr, dc) {
            if can_land_on(board, r, c, color) {
                out.push(Move::new(row, col, r, c));
            }
        }
    }
}
