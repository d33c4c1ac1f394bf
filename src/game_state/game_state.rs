//! Immutable game state and the caller-facing rules contract.
//!
//! `GameState` bundles the board grid, castling rights and side to move. It is
//! a plain value: every transition returns a fresh state, so search branches
//! and the presentation layer never share a mutable grid.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::{
    game_status, generate_legal_moves, is_checkmate, GameStatus,
};
use crate::move_generation::move_generator::MoveGenResult;
use crate::search::alpha_beta::{search, SearchConfig};
use crate::search::board_scoring::MaterialScorer;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            castling_rights: CastlingRights::NONE,
            side_to_move: Color::Light,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        self.board
            .get(usize::from(row))
            .and_then(|r| r.get(usize::from(col)))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<(u8, u8)> {
        king_square(self, color)
    }

    /// Legal moves for `side`, in generation order.
    pub fn legal_moves(&self, side: Color) -> MoveGenResult<Vec<Move>> {
        generate_legal_moves(self, side)
    }

    /// Legal moves of the piece standing on `(row, col)`.
    pub fn piece_legal_moves(&self, row: u8, col: u8) -> MoveGenResult<Vec<Move>> {
        let Some(piece) = self.piece_at(row, col) else {
            return Ok(Vec::new());
        };
        Ok(generate_legal_moves(self, piece.color)?
            .into_iter()
            .filter(|mv| mv.from() == (row, col))
            .collect())
    }

    /// Apply a move for the side to move; anything outside its legal set is rejected.
    pub fn apply_move(&self, mv: Move) -> MoveGenResult<GameState> {
        apply_move(self, mv)
    }

    #[inline]
    pub fn is_in_check(&self, side: Color) -> bool {
        is_king_in_check(self, side)
    }

    pub fn is_checkmate(&self, side: Color) -> MoveGenResult<bool> {
        is_checkmate(self, side)
    }

    /// Outcome classification for the side to move.
    pub fn status(&self) -> MoveGenResult<GameStatus> {
        game_status(self)
    }

    /// Engine move for `side` at a fixed depth; `None` only when `side` has no legal move.
    pub fn choose_move(&self, side: Color, depth: u32) -> MoveGenResult<Option<Move>> {
        let result = search(
            self,
            side,
            &MaterialScorer,
            SearchConfig {
                depth: depth.max(1),
                ..SearchConfig::default()
            },
        )?;
        Ok(result.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{CastlingRights, Color, Move, Piece, PieceKind};

    #[test]
    fn new_game_has_standard_layout_and_full_rights() {
        let game = GameState::new_game();

        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(
            game.piece_at(7, 4),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game.piece_at(0, 3),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game.piece_at(4, 4), None);
        assert_eq!(game.piece_at(8, 0), None);
    }

    #[test]
    fn piece_legal_moves_only_lists_moves_of_that_piece() {
        let game = GameState::new_game();
        let knight_moves = game.piece_legal_moves(7, 6).expect("movegen should succeed");

        assert_eq!(
            knight_moves,
            vec![Move::new(7, 6, 5, 5), Move::new(7, 6, 5, 7)]
        );
        assert!(game
            .piece_legal_moves(4, 4)
            .expect("movegen should succeed")
            .is_empty());
    }

    #[test]
    fn apply_move_leaves_original_state_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        let next = game
            .apply_move(Move::new(6, 4, 5, 4))
            .expect("pawn step should be legal");

        assert_eq!(game, before);
        assert_ne!(next, before);
        assert_eq!(next.side_to_move, Color::Dark);
    }

    #[test]
    fn choose_move_returns_none_without_legal_moves() {
        let game = GameState::from_fen("7k/8/8/8/8/8/5PPP/r5K1 w - - 0 1").expect("FEN should parse");

        assert_eq!(game.choose_move(Color::Light, 2).expect("search should run"), None);
        assert!(game.is_checkmate(Color::Light).expect("movegen should succeed"));
    }

    #[test]
    fn choose_move_clamps_zero_depth() {
        let game = GameState::new_game();
        let mv = game
            .choose_move(Color::Light, 0)
            .expect("search should run");

        assert!(mv.is_some());
    }
}
