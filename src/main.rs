//! Terminal game against the alpha-beta engine.
//!
//! Run with:
//! `cargo run --release -- --depth 4`
//! `cargo run --release -- --black`

use minimax_chess::session::terminal_session::{run_stdio_loop, SessionConfig};

fn main() -> Result<(), String> {
    let config = SessionConfig::from_args(std::env::args().skip(1))?;
    run_stdio_loop(config).map_err(|e| e.to_string())
}
