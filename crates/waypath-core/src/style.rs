//! Visual styling: [`Color`], [`AttrMask`], [`Style`] and [`Glyph`].

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal colour: one of the 16 ANSI palette entries, or true colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Whatever the terminal uses when nothing is set.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMask(pub u32);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const UNDERLINE: Self = Self(1 << 1);
    pub const BLINK: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);
    pub const DIM: Self = Self(1 << 4);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for AttrMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style / Glyph
// ---------------------------------------------------------------------------

/// Foreground, background and attributes of a drawn character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    #[inline]
    pub const fn new(fg: Color, bg: Color, attrs: AttrMask) -> Self {
        Self { fg, bg, attrs }
    }
}

/// A character together with its style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_mask_ops() {
        let m = AttrMask::BLINK | AttrMask::BOLD;
        assert!(m.contains(AttrMask::BLINK));
        assert!(m.contains(AttrMask::BOLD));
        assert!(!m.contains(AttrMask::DIM));
        assert_eq!(m & AttrMask::BOLD, AttrMask::BOLD);
        assert!(AttrMask::NONE.is_empty());
    }

    #[test]
    fn style_and_glyph() {
        let s = Style::new(Color::Black, Color::BrightWhite, AttrMask::BOLD);
        assert_eq!((s.fg, s.bg), (Color::Black, Color::BrightWhite));
        assert!(s.attrs.contains(AttrMask::BOLD));
        assert_eq!(Style::default().fg, Color::Default);
        let g = Glyph::new('x', s);
        assert_eq!((g.ch, g.style), ('x', s));
    }
}
