use waypath_core::Point;
use waypath_search::{Cost, CostModel};

/// Euclidean distance scaled by ten and truncated, so one orthogonal step
/// costs 10 and one diagonal step 14.
#[inline]
pub fn distance(a: Point, b: Point) -> Cost {
    let d = a - b;
    let (dr, dc) = (i64::from(d.row()), i64::from(d.column()));
    (10.0 * ((dr * dr + dc * dc) as f64).sqrt()).floor() as Cost
}

/// [`distance`] as both the step cost and the heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridCosts;

impl CostModel<Point> for GridCosts {
    #[inline]
    fn step_cost(&self, from: &Point, to: &Point) -> Cost {
        distance(*from, *to)
    }

    #[inline]
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        distance(*from, *to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_euclidean() {
        let o = Point::at(0, 0);
        assert_eq!(distance(o, o), 0);
        assert_eq!(distance(o, Point::at(0, 1)), 10);
        assert_eq!(distance(o, Point::at(1, 1)), 14);
        assert_eq!(distance(o, Point::at(3, 4)), 50);
        assert_eq!(distance(Point::at(2, 5), Point::at(0, 0)), 53);
    }

    #[test]
    fn symmetric() {
        let a = Point::at(7, 2);
        let b = Point::at(1, 9);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(GridCosts.step_cost(&a, &b), GridCosts.estimate(&b, &a));
    }
}
