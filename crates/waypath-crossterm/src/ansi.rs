//! Animated drawing of a board while it is being searched.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use waypath_core::{AttrMask, Point};
use waypath_grid::Board;
use waypath_search::{Cost, Progress};

use crate::glyphs::{CELL_PADDING, glyph_for};
use crate::{RenderError, to_ct_color};

/// Width of the percentage shown after the progress bar, plus its margin.
const BAR_MARGIN: i64 = 7;

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pause after each frame.
    pub frame_delay: Duration,
    /// Draw a progress bar above the board.
    pub show_progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(10),
            show_progress: true,
        }
    }
}

/// How close the search is to the end, in percent: 0 at the start, 100 once
/// the current node's estimate reaches zero.
pub fn completion(current_distance: Cost, max_distance: Cost) -> i64 {
    if max_distance <= 0 {
        return 100;
    }
    (100 - current_distance.saturating_mul(100) / max_distance).clamp(0, 100)
}

/// A bar of `>` scaled to a board `columns` cells wide, then the percentage.
pub fn progress_bar(completion: i64, columns: i32) -> String {
    let width = (completion * i64::from(columns) * 3 / 100 - BAR_MARGIN).max(0) as usize;
    format!("{} {completion:>2}%", ">".repeat(width))
}

/// Redraws a board in place using ANSI escape sequences.
///
/// The cursor is hidden from [`begin`](Self::begin) until
/// [`finish`](Self::finish), or until the renderer is dropped.
pub struct AnsiRenderer<W: Write> {
    out: W,
    options: RenderOptions,
    cursor_hidden: bool,
    frames: u64,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            cursor_hidden: false,
            frames: 0,
        }
    }

    #[cfg(test)]
    fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    fn get_ref(&self) -> &W {
        &self.out
    }

    /// Clear the screen and hide the cursor.
    pub fn begin(&mut self) -> Result<(), RenderError> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;
        self.out.flush()?;
        self.cursor_hidden = true;
        Ok(())
    }

    /// Draw one animation frame for a progress notification, then pause.
    pub fn draw_frame(&mut self, board: &Board, progress: &Progress<Point>) -> Result<(), RenderError> {
        let done = completion(progress.current_distance, progress.max_distance);
        self.draw(board, Some(done))?;
        self.frames += 1;
        if !self.options.frame_delay.is_zero() {
            thread::sleep(self.options.frame_delay);
        }
        Ok(())
    }

    /// Draw the final board below the last progress bar and give the cursor
    /// back.
    pub fn finish(&mut self, board: &Board) -> Result<(), RenderError> {
        self.draw(board, None)?;
        queue!(self.out, cursor::Show)?;
        self.out.flush()?;
        self.cursor_hidden = false;
        log::debug!("animation finished after {} frames", self.frames);
        Ok(())
    }

    fn draw(&mut self, board: &Board, completion: Option<i64>) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        if self.options.show_progress {
            match completion {
                Some(done) => queue!(
                    self.out,
                    terminal::Clear(ClearType::UntilNewLine),
                    Print(progress_bar(done, board.columns())),
                    Print("\n")
                )?,
                None => queue!(self.out, cursor::MoveTo(0, 1))?,
            }
        }

        let last_column = board.columns() - 1;
        for (p, flags) in board.iter() {
            let glyph = glyph_for(flags);
            let style = glyph.style;
            queue!(
                self.out,
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            if style.attrs.contains(AttrMask::BOLD) {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if style.attrs.contains(AttrMask::UNDERLINE) {
                queue!(self.out, SetAttribute(Attribute::Underlined))?;
            }
            if style.attrs.contains(AttrMask::BLINK) {
                queue!(self.out, SetAttribute(Attribute::SlowBlink))?;
            }
            if style.attrs.contains(AttrMask::REVERSE) {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            if style.attrs.contains(AttrMask::DIM) {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            queue!(self.out, Print(glyph.ch))?;
            if !style.attrs.is_empty() {
                queue!(self.out, SetAttribute(Attribute::Reset))?;
            }
            queue!(self.out, ResetColor, Print(CELL_PADDING))?;
            if p.column() == last_column {
                queue!(self.out, Print("\n"))?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for AnsiRenderer<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(self.out, ResetColor, cursor::Show);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_search::Role;

    fn quiet() -> RenderOptions {
        RenderOptions {
            frame_delay: Duration::ZERO,
            show_progress: true,
        }
    }

    fn output<W: Write + AsRef<[u8]>>(r: &AnsiRenderer<W>) -> String {
        String::from_utf8_lossy(r.get_ref().as_ref()).into_owned()
    }

    #[test]
    fn completion_percentages() {
        assert_eq!(completion(50, 50), 0);
        assert_eq!(completion(25, 50), 50);
        assert_eq!(completion(0, 50), 100);
        assert_eq!(completion(7, 0), 100);
        // Wandering away from the end never goes below zero.
        assert_eq!(completion(80, 50), 0);
    }

    #[test]
    fn bar_scales_with_board_width() {
        assert_eq!(progress_bar(100, 10), format!("{} 100%", ">".repeat(23)));
        assert_eq!(progress_bar(50, 10), format!("{} 50%", ">".repeat(8)));
        assert_eq!(progress_bar(0, 10), "  0%");
    }

    #[test]
    fn frame_draws_bar_and_board() {
        let board = Board::new(4, 4);
        let progress = Progress {
            frame: 1,
            current_distance: 21,
            max_distance: 42,
            current: board.start(),
            analyzed: board.start(),
            role: Role::Current,
        };
        let mut r = AnsiRenderer::new(Vec::new(), quiet());
        r.begin().unwrap();
        r.draw_frame(&board, &progress).unwrap();
        assert_eq!(r.frames(), 1);
        let out = output(&r);
        assert!(out.contains("\x1b[?25l"), "cursor hidden");
        // Too narrow for any `>`: only the percentage is left.
        assert!(out.contains(" 50%") && !out.contains('>'));
        assert!(out.contains('S') && out.contains('E'));
        assert_eq!(out.matches('.').count(), 14);
    }

    #[test]
    fn finish_shows_cursor() {
        let mut r = AnsiRenderer::new(
            Vec::new(),
            RenderOptions {
                frame_delay: Duration::ZERO,
                show_progress: false,
            },
        );
        r.begin().unwrap();
        r.finish(&Board::new(4, 4)).unwrap();
        let out = output(&r);
        assert!(out.ends_with("\x1b[?25h"));
        assert!(!out.contains('%'));
    }
}
