//! Long algebraic move text (`e2e3`, `e7e8q`).
//!
//! Promotion is always to a queen, so a fifth character is optional and only
//! `q` is accepted. Parsing yields a `Move`; legality is judged when the move
//! is applied.

use crate::game_state::chess_types::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> Result<String, String> {
    let mut out = String::with_capacity(4);
    out.push_str(&square_to_algebraic(mv.from_row, mv.from_col)?);
    out.push_str(&square_to_algebraic(mv.to_row, mv.to_col)?);
    Ok(out)
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, String> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    if text.len() == 5 && !text[4..].eq_ignore_ascii_case("q") {
        return Err(format!(
            "Only queen promotion exists, got '{}'",
            &text[4..]
        ));
    }

    let (from_row, from_col) = algebraic_to_square(&text[0..2])?;
    let (to_row, to_col) = algebraic_to_square(&text[2..4])?;

    Ok(Move::new(from_row, from_col, to_row, to_col))
}
