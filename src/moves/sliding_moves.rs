use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{offset_square, piece_on};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

pub fn directions_for(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Walk each ray until blocked; an enemy blocker is included, an own one is not.
pub fn generate_sliding_moves(
    board: &Board,
    row: u8,
    col: u8,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in directions_for(piece.kind) {
        let mut cursor = offset_square(row, col, dr, dc);
        while let Some((r, c)) = cursor {
            match piece_on(board, r, c) {
                None => out.push(Move::new(row, col, r, c)),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(Move::new(row, col, r, c));
                    }
                    break;
                }
            }
            cursor = offset_square(r, c, dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_sliding_moves;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_ray_stops_at_blockers() {
        // Rook d4, own pawn d6, enemy knight f4.
        let game =
            GameState::from_fen("4k3/8/3P4/8/3R1n2/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_sliding_moves(
            &game.board,
            4,
            3,
            Piece::new(Color::Light, PieceKind::Rook),
            &mut out,
        );

        assert!(out.contains(&Move::new(4, 3, 3, 3)));
        assert!(!out.contains(&Move::new(4, 3, 2, 3)));
        assert!(out.contains(&Move::new(4, 3, 4, 5)));
        assert!(!out.contains(&Move::new(4, 3, 4, 6)));
        // up 1, down 3, left 3, right 2
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn queen_combines_bishop_then_rook_rays() {
        let game = GameState::from_fen("k7/8/8/8/8/8/8/Q6K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_sliding_moves(
            &game.board,
            7,
            0,
            Piece::new(Color::Light, PieceKind::Queen),
            &mut out,
        );

        // Diagonal a1-h8 first (7 squares), then up the a-file to the enemy king
        // (7 squares), then along the first rank up to the own king (6 squares).
        assert_eq!(out.len(), 20);
        assert_eq!(out[0], Move::new(7, 0, 6, 1));
        assert_eq!(out[7], Move::new(7, 0, 6, 0));
        assert!(out.contains(&Move::new(7, 0, 0, 0)));
        assert!(!out.contains(&Move::new(7, 0, 7, 7)));
    }
}
