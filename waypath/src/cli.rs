//! Command-line arguments and the run configuration derived from them.

use clap::Parser;
use waypath_core::Point;
use waypath_grid::{BarrierSpec, BarrierSpecError};

/// Smallest number of rows or columns; smaller sizes are raised to it.
pub const MIN_SIDE: i32 = 4;
/// Board side used when the terminal size is unknown.
pub const FALLBACK_SIDE: i32 = 20;
/// Share of the terminal the default board covers, in percent.
const TERMINAL_SHARE: i32 = 90;
/// Terminal lines kept free around the board.
const RESERVED_LINES: i32 = 3;
/// Terminal columns taken by one cell (glyph plus padding).
const CELL_COLUMNS: i32 = 3;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "waypath", version)]
#[command(about = "Find a path across a grid of barriers with A*")]
pub struct Args {
    /// Number of rows, at least 4 (defaults to 90% of the terminal height)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: Option<i32>,

    /// Number of columns, at least 4 (defaults to 90% of the terminal width)
    #[arg(short, long, allow_negative_numbers = true)]
    pub columns: Option<i32>,

    /// Percentage of cells turned into random barriers, clamped to 0..=100
    #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
    pub barriers: i32,

    /// Start cell; without a column the first column is used
    #[arg(
        short,
        long,
        value_parser = parse_cell,
        value_name = "ROW[:COLUMN]",
        allow_hyphen_values = true
    )]
    pub start: Option<CellArg>,

    /// End cell; without a column the last column is used
    #[arg(
        short,
        long,
        value_parser = parse_cell,
        value_name = "ROW[:COLUMN]",
        allow_hyphen_values = true
    )]
    pub end: Option<CellArg>,

    /// Barrier dot ROW:COLUMN or line ROW:COLUMN..ROW:COLUMN; disables random barriers
    #[arg(short = 'l', long = "line", value_name = "SPEC")]
    pub lines: Vec<String>,

    /// Animate the search (only when stdout is a terminal)
    #[arg(short, long)]
    pub animate: bool,

    /// Allow diagonal moves
    #[arg(short, long)]
    pub diagonal: bool,

    /// Accumulate costs along the path instead of using per-step costs
    #[arg(long)]
    pub cumulative: bool,

    /// Seed for random barriers
    #[arg(long)]
    pub seed: Option<u64>,
}

/// A cell given on the command line. Out-of-range values are clamped
/// into the board later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellArg {
    pub row: i32,
    pub column: Option<i32>,
}

impl CellArg {
    fn resolve(self, default_column: i32) -> Point {
        Point::at(self.row, self.column.unwrap_or(default_column))
    }
}

fn parse_cell(s: &str) -> Result<CellArg, String> {
    let bad = || format!("expected ROW[:COLUMN], got `{s}`");
    let (row, column) = match s.split_once(':') {
        Some((r, c)) => (r, Some(c)),
        None => (s, None),
    };
    let row = row.trim().parse().map_err(|_| bad())?;
    let column = column
        .map(|c| c.trim().parse())
        .transpose()
        .map_err(|_| bad())?;
    Ok(CellArg { row, column })
}

/// Everything a run needs, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: i32,
    pub columns: i32,
    /// Percentage, `0..=100`. The board caps it further.
    pub barrier_ratio: u32,
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub barriers: Vec<BarrierSpec>,
    pub animate: bool,
    pub cut_corners: bool,
    pub cumulative: bool,
    pub seed: Option<u64>,
}

impl Config {
    /// Resolve parsed arguments. `terminal` is the terminal size as
    /// `(columns, rows)` if known; animation is dropped unless `is_tty`.
    pub fn resolve(
        args: Args,
        terminal: Option<(u16, u16)>,
        is_tty: bool,
    ) -> Result<Self, BarrierSpecError> {
        let barriers = args
            .lines
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<BarrierSpec>, _>>()?;
        let (rows, columns) = default_size(terminal);
        let rows = args.rows.unwrap_or(rows).max(MIN_SIDE);
        let columns = args.columns.unwrap_or(columns).max(MIN_SIDE);
        Ok(Self {
            rows,
            columns,
            barrier_ratio: args.barriers.clamp(0, 100).unsigned_abs(),
            start: args.start.map(|c| c.resolve(0)),
            end: args.end.map(|c| c.resolve(columns - 1)),
            barriers,
            animate: args.animate && is_tty,
            cut_corners: args.diagonal,
            cumulative: args.cumulative,
            seed: args.seed,
        })
    }
}

/// Board size filling most of a `(columns, rows)` terminal, or
/// [`FALLBACK_SIDE`] square without one.
pub fn default_size(terminal: Option<(u16, u16)>) -> (i32, i32) {
    match terminal {
        Some((w, h)) => {
            let rows = (i32::from(h) - RESERVED_LINES) * TERMINAL_SHARE / 100;
            let columns = (i32::from(w) / CELL_COLUMNS) * TERMINAL_SHARE / 100;
            (rows.max(MIN_SIDE), columns.max(MIN_SIDE))
        }
        None => (FALLBACK_SIDE, FALLBACK_SIDE),
    }
}
