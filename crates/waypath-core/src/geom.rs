//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Points use screen coordinates: `x` is the column and grows right, `y` is
//! the row and grows down.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from a row and a column.
    #[inline]
    pub const fn at(row: i32, column: i32) -> Self {
        Self { x: column, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn column(self) -> i32 {
        self.x
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    /// Formats as `row:column`, the notation used on the command line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.y, self.x)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// The point of the range closest to `p`. Returns `None` for an empty
    /// range.
    pub fn clamp(self, p: Point) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(Point::new(
            p.x.clamp(self.min.x, self.max.x - 1),
            p.y.clamp(self.min.y, self.max.y - 1),
        ))
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_row_column() {
        let p = Point::at(3, 7);
        assert_eq!((p.row(), p.column()), (3, 7));
        assert_eq!(p, Point::new(7, 3));
        assert_eq!(p.to_string(), "3:7");
    }

    #[test]
    fn point_orders_row_major() {
        let mut pts = vec![Point::at(1, 0), Point::at(0, 5), Point::at(0, 1)];
        pts.sort();
        assert_eq!(pts, [Point::at(0, 1), Point::at(0, 5), Point::at(1, 0)]);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 10, 5);
        assert_eq!(r.size(), Point::new(10, 5));
        assert_eq!(r.len(), 50);
        assert!(r.contains(Point::new(9, 4)));
        assert!(!r.contains(Point::new(10, 4)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(5, 5, 0, 0);
        assert_eq!(r.min, Point::ZERO);
        assert_eq!(r.max, Point::new(5, 5));
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn range_clamp() {
        let r = Range::new(0, 0, 4, 3);
        assert_eq!(r.clamp(Point::new(9, -2)), Some(Point::new(3, 0)));
        assert_eq!(r.clamp(Point::new(2, 1)), Some(Point::new(2, 1)));
        assert_eq!(Range::default().clamp(Point::ZERO), None);
    }
}
