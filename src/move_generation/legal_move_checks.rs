use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_legal_moves::generate_pseudo_legal_moves;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<(u8, u8)> {
    let king = Some(Piece::new(color, PieceKind::King));
    for row in 0..8u8 {
        for col in 0..8u8 {
            if game_state.board[usize::from(row)][usize::from(col)] == king {
                return Some((row, col));
            }
        }
    }
    None
}

/// True when any pseudo-legal move of the opponent lands on `color`'s king.
///
/// A side without a king is never in check.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: (u8, u8), attacker_color: Color) -> bool {
    generate_pseudo_legal_moves(game_state, attacker_color)
        .iter()
        .any(|mv| mv.to() == square)
}
