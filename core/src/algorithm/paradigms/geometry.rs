//! Convex hull by Andrew's monotone chain, the sorted-point form of the
//! Graham scan

/// Integer point `(x, y)`
pub type Point = (i64, i64);

/// Cross product of `oa` and `ob`; positive for a counter-clockwise turn
fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ox, oy) = (o.0 as i128, o.1 as i128);
    (a.0 as i128 - ox) * (b.1 as i128 - oy) - (a.1 as i128 - oy) * (b.0 as i128 - ox)
}

/// Hull vertices counter-clockwise from the lowest-leftmost point
///
/// Duplicates and collinear boundary points are dropped. Fewer than three
/// distinct points are returned sorted.
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(2 * pts.len());
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    // Upper chain; the rightmost point stays as its anchor
    let floor = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= floor && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    // the leftmost point closes the upper chain a second time
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_interior_and_edge_points() {
        let pts = [(0, 0), (1, 1), (2, 2), (2, 0), (0, 2), (1, 2), (2, 1)];
        assert_eq!(graham_scan(&pts), vec![(0, 0), (2, 0), (2, 2), (0, 2)]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(graham_scan(&[]).is_empty());
        assert_eq!(graham_scan(&[(1, 1), (1, 1)]), vec![(1, 1)]);
        assert_eq!(graham_scan(&[(3, 0), (0, 0)]), vec![(0, 0), (3, 0)]);
        // all collinear: only the extremes survive
        assert_eq!(graham_scan(&[(0, 0), (1, 1), (2, 2), (3, 3)]), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_triangle_is_counter_clockwise() {
        let hull = graham_scan(&[(0, 3), (4, 0), (0, 0)]);
        assert_eq!(hull, vec![(0, 0), (4, 0), (0, 3)]);
        assert!(cross(hull[0], hull[1], hull[2]) > 0);
    }

    #[test]
    fn test_extreme_coordinates() {
        let m = 1i64 << 60;
        let hull = graham_scan(&[(-m, -m), (m, -m), (m, m), (-m, m), (0, 0)]);
        assert_eq!(hull, vec![(-m, -m), (m, -m), (m, m), (-m, m)]);
    }
}
