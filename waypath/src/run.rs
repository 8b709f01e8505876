//! One complete run: build the board, search it, draw the result.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use waypath_core::Point;
use waypath_crossterm::{AnsiRenderer, RenderError, RenderOptions, render_plain};
use waypath_grid::{Board, GridCosts};
use waypath_search::{
    CostMode, Progress, SearchError, SearchOptions, SearchOutcome, find_shortest_path_with,
};

use crate::cli::Config;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("writing the board failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// Negative status reported for the failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::Search(e) => e.code(),
            Self::Render(_) | Self::Io(_) => -1,
        }
    }
}

/// Board described by `config`. Random barriers are only placed when no
/// barrier specs were given.
pub fn prepare_board<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Board {
    let mut board = Board::new(config.rows, config.columns);
    let start = config.start.unwrap_or(board.start());
    let end = config.end.unwrap_or(board.end());
    board.set_ends(start, end);
    if config.barriers.is_empty() {
        board.set_random_barriers(config.barrier_ratio, rng);
    } else {
        board.apply_barriers(&config.barriers);
    }
    board
}

/// Run the search described by `config` and draw the board to `out`.
pub fn run<W: Write>(config: &Config, out: W) -> Result<SearchOutcome<Point>, RunError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("barrier seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let board = prepare_board(config, &mut rng);

    let options = SearchOptions::default().with_cost_mode(if config.cumulative {
        CostMode::Cumulative
    } else {
        CostMode::Step
    });

    if config.animate {
        animated(board, config, options, out)
    } else {
        plain(board, config, options, out)
    }
}

fn plain<W: Write>(
    mut board: Board,
    config: &Config,
    options: SearchOptions,
    mut out: W,
) -> Result<SearchOutcome<Point>, RunError> {
    let graph = board.to_graph(config.cut_corners);
    let mut observe = |p: &Progress<Point>| board.mark_analyzed(p.analyzed);
    let outcome = find_shortest_path_with(&graph, &GridCosts, Some(&mut observe), options)?;
    if let Some(path) = outcome.path() {
        board.apply_path(path);
    }
    out.write_all(render_plain(&board).as_bytes())?;
    out.flush()?;
    Ok(outcome)
}

fn animated<W: Write>(
    mut board: Board,
    config: &Config,
    options: SearchOptions,
    out: W,
) -> Result<SearchOutcome<Point>, RunError> {
    let graph = board.to_graph(config.cut_corners);
    let mut renderer = AnsiRenderer::new(out, RenderOptions::default());
    renderer.begin()?;

    // The observer cannot fail the search, so the first drawing error is
    // kept and reported once the search returns.
    let mut failure = None;
    let mut observe = |p: &Progress<Point>| {
        board.mark_analyzed(p.analyzed);
        board.set_current(p.current);
        if failure.is_none() {
            failure = renderer.draw_frame(&board, p).err();
        }
    };
    let outcome = find_shortest_path_with(&graph, &GridCosts, Some(&mut observe), options)?;
    if let Some(e) = failure {
        return Err(e.into());
    }

    if let Some(path) = outcome.path() {
        board.apply_path(path);
    }
    board.clear_current();
    renderer.finish(&board)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("waypath").chain(argv.iter().copied())).unwrap();
        Config::resolve(args, None, false).unwrap()
    }

    #[test]
    fn specs_replace_random_barriers() {
        let c = config(&["-r", "5", "-c", "5", "-l", "2:0..2:3", "-b", "90"]);
        let board = prepare_board(&c, &mut StdRng::seed_from_u64(1));
        assert_eq!(board.barrier_count(), 4);
    }

    #[test]
    fn random_barriers_follow_the_seed() {
        let c = config(&["-r", "6", "-c", "6", "-b", "50", "-s", "9:9", "-e", "0:0"]);
        let a = prepare_board(&c, &mut StdRng::seed_from_u64(5));
        let b = prepare_board(&c, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert_eq!(a.barrier_count(), 18);
        assert_eq!((a.start(), a.end()), (Point::at(5, 5), Point::at(0, 0)));
    }

    #[test]
    fn negative_and_row_only_ends_are_clamped() {
        let c = config(&["-r", "5", "-c", "5", "-s", "-2:-3", "-e", "2", "-l", "4:4"]);
        let board = prepare_board(&c, &mut StdRng::seed_from_u64(1));
        assert_eq!((board.start(), board.end()), (Point::at(0, 0), Point::at(2, 4)));
    }

    #[test]
    fn plain_run_prints_the_path() {
        let c = config(&["-r", "4", "-c", "4", "-l", "1:0..1:2"]);
        let mut out = Vec::new();
        let outcome = run(&c, &mut out).unwrap();
        assert!(outcome.is_found());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("S  "));
        assert_eq!(text.matches('o').count(), outcome.len() - 2);
        assert_eq!(text.matches('x').count(), 3);
        // Only 2:2 is weighed without being walked; the lower left corner
        // is never reached.
        assert_eq!(text.lines().nth(2), Some(".  .  ?  o  "));
        assert_eq!(text.matches('?').count(), 1);
        assert_eq!(text.matches('.').count(), 5);
    }

    #[test]
    fn walled_off_end_reports_no_path() {
        let c = config(&["-r", "4", "-c", "4", "-l", "0:2..3:2"]);
        let mut out = Vec::new();
        let outcome = run(&c, &mut out).unwrap();
        assert_eq!(outcome, SearchOutcome::NoPath);
        assert!(!String::from_utf8(out).unwrap().contains('o'));
    }

    #[test]
    fn animated_run_draws_frames() {
        let mut c = config(&["-r", "4", "-c", "4", "-b", "0", "-d"]);
        c.animate = true;
        let mut out = Vec::new();
        let outcome = run(&c, &mut out).unwrap();
        // Straight down the diagonal.
        assert_eq!(outcome.len(), 4);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('%') && text.contains('A'));
        assert!(text.ends_with("\x1b[?25h"));
    }
}
