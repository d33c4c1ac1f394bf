//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternative heuristics
//! can be swapped without touching search code.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Absolute score: positive favours White, negative favours Black.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Pure material count, no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .board
            .iter()
            .flatten()
            .flatten()
            .map(|piece| match piece.color {
                Color::Light => Self::piece_value(piece.kind),
                Color::Dark => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&GameState::new_game()), 0);
    }

    #[test]
    fn score_is_white_minus_black_regardless_of_side_to_move() {
        // White: K + Q + P, Black: K + R.
        let white_to_move =
            GameState::from_fen("4k3/8/8/3r4/8/8/4P3/3QK3 w - - 0 1").expect("FEN should parse");
        let black_to_move =
            GameState::from_fen("4k3/8/8/3r4/8/8/4P3/3QK3 b - - 0 1").expect("FEN should parse");

        assert_eq!(MaterialScorer.score(&white_to_move), 90 + 10 - 50);
        assert_eq!(MaterialScorer.score(&black_to_move), 50);
    }

    #[test]
    fn kings_count_toward_material() {
        let lone_white_king = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&lone_white_king), 900);
    }
}
