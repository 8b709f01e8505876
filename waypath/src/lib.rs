//! waypath: A* across a grid of barriers, drawn in the terminal.

pub mod cli;
pub mod run;

pub use cli::{Args, Config};
pub use run::{RunError, prepare_board, run};

/// Exit status for a barrier specification that cannot be used.
pub const EXIT_BAD_BARRIER: u8 = 99;
