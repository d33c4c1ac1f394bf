use crate::game_state::chess_types::*;

/// `(row, col) + (dr, dc)` if the result stays on the board.
#[inline]
pub fn offset_square(row: u8, col: u8, dr: i8, dc: i8) -> Option<(u8, u8)> {
    let r = row as i8 + dr;
    let c = col as i8 + dc;
    if (0..8).contains(&r) && (0..8).contains(&c) {
        Some((r as u8, c as u8))
    } else {
        None
    }
}

#[inline]
pub fn piece_on(board: &Board, row: u8, col: u8) -> Option<Piece> {
    board[usize::from(row)][usize::from(col)]
}

/// Empty cells and enemy-occupied cells are valid landing squares.
#[inline]
pub fn can_land_on(board: &Board, row: u8, col: u8, mover: Color) -> bool {
    match piece_on(board, row, col) {
        None => true,
        Some(piece) => piece.color != mover,
    }
}
