use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{can_land_on, offset_square, piece_on};
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

/// One-step king moves followed by castling candidates (king-side first).
///
/// Castling only looks at the home square, the right flag, the rook on its
/// corner and the empty cells in between. Whether the king starts in, passes
/// through or lands on an attacked square is left to the legality filter,
/// which only re-checks the landing square.
pub fn generate_king_moves(
    board: &Board,
    row: u8,
    col: u8,
    color: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    for (dr, dc) in QUEEN_DIRECTIONS {
        if let Some((r, c)) = offset_square(row, col, dr, dc) {
            if can_land_on(board, r, c, color) {
                out.push(Move::new(row, col, r, c));
            }
        }
    }

    let home = color.home_row();
    if row != home || col != KING_HOME_COL {
        return;
    }

    if castling_rights.kingside(color)
        && rook_on_corner(board, home, KINGSIDE_ROOK_COL, color)
        && cells_empty(board, home, KING_HOME_COL + 1..KINGSIDE_ROOK_COL)
    {
        out.push(Move::new(row, col, home, KINGSIDE_KING_TARGET_COL));
    }

    if castling_rights.queenside(color)
        && rook_on_corner(board, home, QUEENSIDE_ROOK_COL, color)
        && cells_empty(board, home, QUEENSIDE_ROOK_COL + 1..KING_HOME_COL)
    {
        out.push(Move::new(row, col, home, QUEENSIDE_KING_TARGET_COL));
    }
}

#[inline]
fn rook_on_corner(board: &Board, row: u8, col: u8, color: Color) -> bool {
    piece_on(board, row, col) == Some(Piece::new(color, PieceKind::Rook))
}

#[inline]
fn cells_empty(board: &Board, row: u8, cols: std::ops::Range<u8>) -> bool {
    cols.into_iter().all(|c| piece_on(board, row, c).is_none())
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{CastlingRights, Color, Move};
    use crate::game_state::game_state::GameState;

    #[test]
    fn castling_candidates_follow_plain_steps() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game.board, 7, 4, Color::Light, game.castling_rights, &mut out);

        let n = out.len();
        assert_eq!(out[n - 2], Move::new(7, 4, 7, 6));
        assert_eq!(out[n - 1], Move::new(7, 4, 7, 2));
    }

    #[test]
    fn castling_needs_flag_empty_path_and_rook() {
        // Queen-side blocked by the b1 knight; king-side right revoked.
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/8/RN2K2R w Q - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game.board, 7, 4, Color::Light, game.castling_rights, &mut out);
        assert!(!out.contains(&Move::new(7, 4, 7, 6)));
        assert!(!out.contains(&Move::new(7, 4, 7, 2)));

        // Flags set but the h1 rook is gone.
        let no_rook =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(
            &no_rook.board,
            7,
            4,
            Color::Light,
            CastlingRights::ALL,
            &mut out,
        );
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn black_castles_on_row_zero() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game.board, 0, 4, Color::Dark, game.castling_rights, &mut out);

        assert!(out.contains(&Move::new(0, 4, 0, 6)));
        assert!(out.contains(&Move::new(0, 4, 0, 2)));
    }
}
