//! Square-name conversions.
//!
//! Maps between human-readable coordinates (e.g. `e4`) and the internal
//! `(row, col)` grid where row 0 is rank 8 and column 0 is the a-file.

/// Convert a square name (for example: "e4") to `(row, col)`.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<(u8, u8), String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok((row, col))
}

/// Convert `(row, col)` to a square name (for example: "e4").
#[inline]
pub fn square_to_algebraic(row: u8, col: u8) -> Result<String, String> {
    if row > 7 || col > 7 {
        return Err(format!("Square out of bounds: ({row}, {col})"));
    }

    let file_char = char::from(b'a' + col);
    let rank_char = char::from(b'8' - row);

    Ok(format!("{file_char}{rank_char}"))
}
