//! How each cell of a board is drawn.

use std::fmt::Write as _;

use waypath_core::{AttrMask, Color, Glyph, Style};
use waypath_grid::{Board, CellFlags};

/// Characters between two cells on the same row.
pub const CELL_PADDING: &str = "  ";

const ENDPOINT: Style = Style::new(Color::Black, Color::BrightWhite, AttrMask::NONE);
const BARRIER: Style = Style::new(Color::Red, Color::Default, AttrMask::NONE);
const PATH_STEP: Style = Style::new(Color::BrightCyan, Color::Default, AttrMask::BLINK);
const CURRENT: Style = Style::new(Color::BrightWhite, Color::Default, AttrMask::NONE);
const ANALYZED: Style = Style::new(Color::Blue, Color::Default, AttrMask::NONE);
const REGULAR: Style = Style::new(Color::DarkGrey, Color::Default, AttrMask::NONE);

/// The glyph for a cell. When several flags are set the first match wins:
/// start, end, barrier, path step, current, analyzed.
pub fn glyph_for(flags: CellFlags) -> Glyph {
    let (ch, style) = if flags.contains(CellFlags::START) {
        ('S', ENDPOINT)
    } else if flags.contains(CellFlags::END) {
        ('E', ENDPOINT)
    } else if flags.contains(CellFlags::BARRIER) {
        ('x', BARRIER)
    } else if flags.contains(CellFlags::PATH_STEP) {
        ('o', PATH_STEP)
    } else if flags.contains(CellFlags::CURRENT) {
        ('A', CURRENT)
    } else if flags.contains(CellFlags::ANALYZED) {
        ('?', ANALYZED)
    } else {
        ('.', REGULAR)
    };
    Glyph::new(ch, style)
}

/// The board as uncoloured text, one line per row.
pub fn render_plain(board: &Board) -> String {
    let cell_width = 1 + CELL_PADDING.len();
    let mut out = String::with_capacity(board.bounds().len() * cell_width + board.rows() as usize);
    let last_column = board.columns() - 1;
    for (p, flags) in board.iter() {
        let _ = write!(out, "{}{CELL_PADDING}", glyph_for(flags).ch);
        if p.column() == last_column {
            out.push('\n');
        }
    }
    out
}
