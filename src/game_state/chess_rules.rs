//! Canonical rule constants.
//!
//! Starting position plus the fixed squares involved in castling. Columns are
//! shared by both colours; rows come from `Color::home_row`.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_COL: u8 = 4;

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;

pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;
