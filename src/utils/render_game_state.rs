//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 8 at the top, matching the internal row order. Every cell takes
//! a fixed three-character slot so markers never shift the columns:
//! `[♞]` a highlighted piece, ` • ` a highlighted empty cell, `(♔)` a king in
//! check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};

const FILE_HEADER: &str = "  a  b  c  d  e  f  g  h";

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_highlights(game_state, &[])
}

/// Like `render_game_state`, with the given cells marked as destinations.
pub fn render_with_highlights(game_state: &GameState, highlights: &[(u8, u8)]) -> String {
    let checked_kings: Vec<(u8, u8)> = [Color::Light, Color::Dark]
        .into_iter()
        .filter(|&color| is_king_in_check(game_state, color))
        .filter_map(|color| king_square(game_state, color))
        .collect();

    let mut out = String::new();
    out.push_str(FILE_HEADER);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);

        for col in 0..8u8 {
            let marked = highlights.contains(&(row, col));
            let slot = match (game_state.piece_at(row, col), marked) {
                (Some(piece), true) => ['[', piece_to_unicode(piece), ']'],
                (None, true) => [' ', '•', ' '],
                (Some(piece), false) if checked_kings.contains(&(row, col)) => {
                    ['(', piece_to_unicode(piece), ')']
                }
                (Some(piece), false) => [' ', piece_to_unicode(piece), ' '],
                (None, false) => [' ', '·', ' '],
            };
            out.extend(slot);
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_HEADER);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
