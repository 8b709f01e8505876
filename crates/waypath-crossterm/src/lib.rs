//! Terminal output for waypath boards.
//!
//! [`render_plain`] produces the board as text. [`AnsiRenderer`] redraws it
//! in place with colours while a search runs, driven by progress
//! notifications.

use std::io;

use crossterm::style::Color as CtColor;
use thiserror::Error;
use waypath_core::Color;

pub mod ansi;
pub mod glyphs;

pub use ansi::{AnsiRenderer, RenderOptions, completion, progress_bar};
pub use glyphs::{glyph_for, render_plain};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("terminal output failed: {0}")]
    Io(#[from] io::Error),
}

/// Maps a [`waypath_core::Color`] to a [`crossterm::style::Color`].
///
/// Crossterm names the normal palette entries `Dark*` and the bright ones
/// without a prefix.
pub fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Default => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::DarkGrey => CtColor::DarkGrey,
        Color::BrightRed => CtColor::Red,
        Color::BrightGreen => CtColor::Green,
        Color::BrightYellow => CtColor::Yellow,
        Color::BrightBlue => CtColor::Blue,
        Color::BrightMagenta => CtColor::Magenta,
        Color::BrightCyan => CtColor::Cyan,
        Color::BrightWhite => CtColor::White,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}
