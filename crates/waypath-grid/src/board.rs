//! A rectangular board of [`CellFlags`] with a start and an end cell.
//!
//! Points use `x` for the column and `y` for the row, so `Point::at(r, c)`
//! addresses row `r`, column `c`.

use std::ops::{BitAnd, BitOr};

use rand::{Rng, RngExt};
use waypath_core::{Point, Range};

use crate::barrier::BarrierSpec;

/// Highest share of the board, in percent, that random barriers may cover.
pub const MAX_BARRIER_RATIO: u32 = 90;

/// Bitmask describing what a cell currently is or shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u8);

impl CellFlags {
    pub const REGULAR: Self = Self(0);
    pub const BARRIER: Self = Self(1 << 0);
    pub const PATH_STEP: Self = Self(1 << 1);
    pub const START: Self = Self(1 << 2);
    pub const END: Self = Self(1 << 3);
    pub const ANALYZED: Self = Self(1 << 4);
    pub const CURRENT: Self = Self(1 << 5);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    #[inline]
    pub const fn is_regular(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for CellFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CellFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// The board: cell flags in row-major order plus the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    bounds: Range,
    cells: Vec<CellFlags>,
    start: Point,
    end: Point,
    current: Option<Point>,
}

impl Board {
    /// Create a board of regular cells with the start in the top-left corner
    /// and the end in the bottom-right one. Both dimensions are at least 1.
    pub fn new(rows: i32, columns: i32) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);
        let bounds = Range::new(0, 0, columns, rows);
        let mut board = Self {
            bounds,
            cells: vec![CellFlags::REGULAR; bounds.len()],
            start: Point::ZERO,
            end: Point::ZERO,
            current: None,
        };
        board.set_ends(Point::ZERO, Point::at(rows - 1, columns - 1));
        board
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// The cell last passed to [`set_current`](Self::set_current), if any.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Flags of the cell at `p`, or `None` outside the board.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellFlags> {
        self.index(p).map(|i| self.cells[i])
    }

    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.at(p).is_some_and(|f| f.contains(CellFlags::BARRIER))
    }

    /// Row-major iterator over every cell and its flags.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellFlags)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Number of barrier cells.
    pub fn barrier_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|f| f.contains(CellFlags::BARRIER))
            .count()
    }

    /// Move the start and end cells. Points outside the board are clamped
    /// onto its nearest edge cell. An endpoint never stays a barrier.
    pub fn set_ends(&mut self, start: Point, end: Point) {
        let start = self.clamp(start);
        let end = self.clamp(end);
        self.update(self.start, |f| f.remove(CellFlags::START));
        self.update(self.end, |f| f.remove(CellFlags::END));
        self.update(start, |f| {
            f.remove(CellFlags::BARRIER);
            f.insert(CellFlags::START);
        });
        self.update(end, |f| {
            f.remove(CellFlags::BARRIER);
            f.insert(CellFlags::END);
        });
        self.start = start;
        self.end = end;
    }

    /// Turn the cell at `p` into a barrier. Returns whether a new barrier was
    /// placed: cells outside the board, endpoints and existing barriers are
    /// left alone.
    pub fn set_barrier(&mut self, p: Point) -> bool {
        if !self.is_free(p) {
            return false;
        }
        self.update(p, |f| f.insert(CellFlags::BARRIER));
        true
    }

    /// Place barriers at random free cells.
    ///
    /// `ratio` is a percentage of the whole board, clamped to
    /// [`MAX_BARRIER_RATIO`]. Fewer barriers are placed if the board runs out
    /// of free cells. Returns the number placed.
    pub fn set_random_barriers<R: Rng + ?Sized>(&mut self, ratio: u32, rng: &mut R) -> usize {
        let ratio = ratio.min(MAX_BARRIER_RATIO) as usize;
        let wanted = self.cells.len() * ratio / 100;
        let free = self.bounds.iter().filter(|&p| self.is_free(p)).count();
        let target = wanted.min(free);

        let mut placed = 0;
        while placed < target {
            let p = Point::at(
                rng.random_range(0..self.rows()),
                rng.random_range(0..self.columns()),
            );
            if self.set_barrier(p) {
                placed += 1;
            }
        }
        log::debug!("placed {placed} random barriers ({ratio}% of {} cells)", self.cells.len());
        placed
    }

    /// Place the barriers described by `specs`. Cells outside the board are
    /// ignored. Returns the number of new barriers.
    pub fn apply_barriers(&mut self, specs: &[BarrierSpec]) -> usize {
        let mut placed = 0;
        for spec in specs {
            for p in spec.cells() {
                if self.set_barrier(p) {
                    placed += 1;
                }
            }
        }
        log::debug!("placed {placed} barriers from {} specs", specs.len());
        placed
    }

    /// Mark every cell of `path` as a path step.
    pub fn apply_path<'a>(&mut self, path: impl IntoIterator<Item = &'a Point>) {
        for &p in path {
            self.update(p, |f| f.insert(CellFlags::PATH_STEP));
        }
    }

    /// Mark `p` as considered by the search.
    pub fn mark_analyzed(&mut self, p: Point) {
        self.update(p, |f| f.insert(CellFlags::ANALYZED));
    }

    /// Make `p` the single current cell, clearing the previous one.
    pub fn set_current(&mut self, p: Point) {
        self.clear_current();
        if self.contains(p) {
            self.update(p, |f| f.insert(CellFlags::CURRENT));
            self.current = Some(p);
        }
    }

    pub fn clear_current(&mut self) {
        if let Some(p) = self.current.take() {
            self.update(p, |f| f.remove(CellFlags::CURRENT));
        }
    }

    fn is_free(&self, p: Point) -> bool {
        self.at(p).is_some_and(|f| {
            !f.intersects(CellFlags::BARRIER | CellFlags::START | CellFlags::END)
        })
    }

    fn clamp(&self, p: Point) -> Point {
        self.bounds.clamp(p).unwrap_or(self.bounds.min)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    fn update(&mut self, p: Point, f: impl FnOnce(&mut CellFlags)) {
        if let Some(i) = self.index(p) {
            f(&mut self.cells[i]);
        }
    }
}
