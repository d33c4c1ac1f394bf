//! Pseudo-legal move generation.
//!
//! Scans the board row-major from row 0 and dispatches each piece of `side`
//! to its shape generator. Whether a move exposes the mover's own king is not
//! considered here.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::generate_sliding_moves;

pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);
    generate_pseudo_legal_moves_into(&game_state.board, side, game_state.castling_rights, &mut out);
    out
}

pub fn generate_pseudo_legal_moves_into(
    board: &Board,
    side: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let Some(piece) = board[usize::from(row)][usize::from(col)] else {
                continue;
            };
            if piece.color != side {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(board, row, col, side, out),
                PieceKind::Knight => generate_knight_moves(board, row, col, side, out),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    generate_sliding_moves(board, row, col, piece, out)
                }
                PieceKind::King => {
                    generate_king_moves(board, row, col, side, castling_rights, out)
                }
            }
        }
    }
}
