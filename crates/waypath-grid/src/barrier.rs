//! Barrier specifications as written on the command line.
//!
//! A dot is `row:column`; a line is `row:column..row:column` and must be
//! horizontal or vertical. Both endpoints of a line are included, and the
//! line runs towards increasing rows or columns.

use std::str::FromStr;

use thiserror::Error;
use waypath_core::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarrierSpecError {
    #[error("invalid barrier specification `{0}`")]
    Invalid(String),

    #[error("diagonal barriers are not supported: `{0}`")]
    Diagonal(String),
}

/// A single barrier cell or a straight run of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierSpec {
    Dot(Point),
    Line { from: Point, to: Point },
}

impl BarrierSpec {
    /// Every cell covered, walking from `from` towards `to`. A line whose
    /// `to` lies before `from` covers nothing.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (from, to) = match *self {
            Self::Dot(p) => (p, p),
            Self::Line { from, to } => (from, to),
        };
        let vertical = from.column() == to.column();
        let len = if vertical {
            to.row() - from.row()
        } else {
            to.column() - from.column()
        };
        (0..=len).map(move |i| {
            if vertical {
                from.shift(0, i)
            } else {
                from.shift(i, 0)
            }
        })
    }
}

impl FromStr for BarrierSpec {
    type Err = BarrierSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BarrierSpecError::Invalid(s.to_owned());
        match s.split_once("..") {
            None => parse_point(s).map(Self::Dot).ok_or_else(invalid),
            Some((a, b)) => {
                let from = parse_point(a).ok_or_else(invalid)?;
                let to = parse_point(b).ok_or_else(invalid)?;
                if from.row() != to.row() && from.column() != to.column() {
                    return Err(BarrierSpecError::Diagonal(s.to_owned()));
                }
                Ok(Self::Line { from, to })
            }
        }
    }
}

/// Parse `row:column` with non-negative components.
fn parse_point(s: &str) -> Option<Point> {
    let (r, c) = s.trim().split_once(':')?;
    let row: u16 = r.trim().parse().ok()?;
    let column: u16 = c.trim().parse().ok()?;
    Some(Point::at(row.into(), column.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> Vec<Point> {
        s.parse::<BarrierSpec>().unwrap().cells().collect()
    }

    #[test]
    fn parses_a_dot() {
        assert_eq!("3:4".parse(), Ok(BarrierSpec::Dot(Point::at(3, 4))));
        assert_eq!(cells("3:4"), [Point::at(3, 4)]);
    }

    #[test]
    fn parses_horizontal_and_vertical_lines() {
        assert_eq!(cells("1:2..1:4"), [Point::at(1, 2), Point::at(1, 3), Point::at(1, 4)]);
        assert_eq!(cells("2:0..4:0"), [Point::at(2, 0), Point::at(3, 0), Point::at(4, 0)]);
        assert_eq!(cells("5:5..5:5"), [Point::at(5, 5)]);
    }

    #[test]
    fn reversed_lines_cover_nothing() {
        assert_eq!(
            "5:4..5:1".parse(),
            Ok(BarrierSpec::Line { from: Point::at(5, 4), to: Point::at(5, 1) })
        );
        assert!(cells("5:4..5:1").is_empty());
        assert!(cells("4:0..2:0").is_empty());
    }

    #[test]
    fn rejects_diagonal_lines() {
        assert_eq!(
            "1:1..3:3".parse::<BarrierSpec>(),
            Err(BarrierSpecError::Diagonal("1:1..3:3".into()))
        );
    }

    #[test]
    fn rejects_malformed_specs() {
        for bad in ["", "3", "a:b", "1:2..", "1:2...1:4", "-1:2", "1:2:3", "1:2..x"] {
            assert_eq!(
                bad.parse::<BarrierSpec>(),
                Err(BarrierSpecError::Invalid(bad.into())),
                "{bad}"
            );
        }
    }

    #[test]
    fn error_messages() {
        let e = "1:1..2:2".parse::<BarrierSpec>().unwrap_err();
        assert_eq!(e.to_string(), "diagonal barriers are not supported: `1:1..2:2`");
    }
}
