//! **waypath-core**: shared value types for the waypath crates.
//!
//! Geometry primitives used to address grid cells, and the styling types
//! renderers use to describe what a cell looks like.

pub mod geom;
pub mod style;

pub use geom::{Point, Range};
pub use style::{AttrMask, Color, Glyph, Style};
