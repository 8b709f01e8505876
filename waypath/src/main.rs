//! waypath: find and draw a path across a grid.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use crossterm::terminal;

use waypath_lib::{Args, Config, EXIT_BAD_BARRIER, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    let config = match Config::resolve(args, terminal::size().ok(), stdout.is_terminal()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("waypath: {e}");
            return ExitCode::from(EXIT_BAD_BARRIER);
        }
    };
    log::info!(
        "{}x{} board, animate: {}, diagonal: {}",
        config.rows,
        config.columns,
        config.animate,
        config.cut_corners
    );

    match run(&config, stdout.lock()) {
        Ok(outcome) if outcome.is_found() => {
            log::info!("path of {} cells", outcome.len());
            ExitCode::SUCCESS
        }
        Ok(_) => {
            log::warn!("no path from start to end");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("waypath: {e}");
            // Negative codes wrap the way a C exit status does.
            ExitCode::from(e.code() as u8)
        }
    }
}
