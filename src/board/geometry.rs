//! Geometry and the turn-based distance model.
//!
//! Continuous movement is quantized into whole turns: a drone moves at most
//! `DRONE_MOVEMENT` units per turn and counts as inside a zone once it is
//! closer than `ZONE_RADIUS` to the zone center.

/// Radius of every zone.
pub const ZONE_RADIUS: i64 = 100;

/// Maximum distance a drone travels in one turn.
pub const DRONE_MOVEMENT: i64 = 100;

/// Number of turns needed to cross the board. Also the "unreachable" sentinel.
pub const MAX_DISTANCE: u32 = 44;

/// Length of the board diagonal, the largest possible separation.
pub const BOARD_DIAGONAL: i64 = 4387;

/// Board width in units.
pub const BOARD_WIDTH: i32 = 4000;

/// Board height in units.
pub const BOARD_HEIGHT: i32 = 1800;

/// An integer point on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Clamps the point to the playable board.
    pub fn clamp_to_board(self) -> Self {
        Point {
            x: self.x.clamp(0, BOARD_WIDTH - 1),
            y: self.y.clamp(0, BOARD_HEIGHT - 1),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer square root, rounded down.
fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    // f64 gets within one of the answer for any board-sized input; fix it up exactly.
    let mut r = (n as f64).sqrt() as i64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Floor of the Euclidean distance between two points.
pub fn euclidean_distance(a: Point, b: Point) -> i64 {
    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    isqrt(dx * dx + dy * dy)
}

/// Number of turns a drone at `a` needs to be inside a zone centered at `b`.
///
/// Zero when already strictly closer than `ZONE_RADIUS`.
pub fn turn_based_distance(a: Point, b: Point) -> u32 {
    let euc = euclidean_distance(a, b);
    if euc < ZONE_RADIUS {
        return 0;
    }
    let remaining = euc - ZONE_RADIUS;
    ((remaining + DRONE_MOVEMENT - 1) / DRONE_MOVEMENT) as u32
}

/// Arithmetic mean of a set of points, truncating toward zero.
///
/// Returns `None` for an empty set.
pub fn centroid<I: IntoIterator<Item = Point>>(points: I) -> Option<Point> {
    let mut sum_x = 0i64;
    let mut sum_y = 0i64;
    let mut count = 0i64;
    for p in points {
        sum_x += p.x as i64;
        sum_y += p.y as i64;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Point::new((sum_x / count) as i32, (sum_y / count) as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn euclidean_distance_truncates() {
        let cases = [
            (p(500, 500), p(450, 500), 50),
            (p(500, 500), p(550, 500), 50),
            (p(500, 500), p(500, 450), 50),
            (p(500, 500), p(500, 550), 50),
            (p(500, 500), p(430, 570), 98),
            (p(500, 500), p(430, 430), 98),
            (p(500, 500), p(570, 570), 98),
            (p(500, 500), p(570, 430), 98),
            (p(500, 500), p(429, 571), 100),
            (p(500, 500), p(429, 429), 100),
            (p(500, 500), p(571, 571), 100),
            (p(500, 500), p(571, 429), 100),
            (p(0, 0), p(0, 0), 0),
            (p(500, 500), p(500, 500), 0),
        ];
        for (i, (a, b, expected)) in cases.iter().enumerate() {
            assert_eq!(euclidean_distance(*a, *b), *expected, "case {}", i);
        }
    }

    #[test]
    fn euclidean_distance_is_symmetric() {
        let pts = [p(0, 0), p(3999, 1799), p(17, 900), p(2500, 3), p(-40, 12)];
        for a in pts {
            assert_eq!(euclidean_distance(a, a), 0);
            for b in pts {
                assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
            }
        }
    }

    #[test]
    fn euclidean_distance_exact_on_perfect_squares() {
        assert_eq!(euclidean_distance(p(0, 0), p(3, 4)), 5);
        assert_eq!(euclidean_distance(p(0, 0), p(4000, 1800)), 4386);
        assert_eq!(euclidean_distance(p(0, 0), p(2999, 0)), 2999);
    }

    #[test]
    fn euclidean_distance_does_not_overflow_on_extreme_coordinates() {
        assert_eq!(euclidean_distance(p(i32::MIN, 0), p(0, 0)), 2_147_483_648);
        assert_eq!(euclidean_distance(p(0, i32::MAX), p(0, 0)), 2_147_483_647);
    }

    #[test]
    fn turn_based_distance_table() {
        let cases = [
            (p(500, 500), p(450, 500), 0),
            (p(500, 500), p(550, 500), 0),
            (p(500, 500), p(500, 450), 0),
            (p(500, 500), p(500, 550), 0),
            (p(500, 500), p(400, 500), 0),
            (p(500, 500), p(600, 500), 0),
            (p(500, 500), p(500, 400), 0),
            (p(500, 500), p(500, 600), 0),
            (p(500, 500), p(399, 500), 1),
            (p(500, 500), p(601, 500), 1),
            (p(500, 500), p(500, 399), 1),
            (p(500, 500), p(500, 601), 1),
            (p(500, 500), p(299, 500), 2),
            (p(500, 500), p(701, 500), 2),
            (p(500, 500), p(500, 299), 2),
            (p(500, 500), p(500, 701), 2),
            (p(500, 500), p(430, 570), 0),
            (p(500, 500), p(430, 430), 0),
            (p(500, 500), p(570, 570), 0),
            (p(500, 500), p(570, 430), 0),
            (p(500, 500), p(428, 572), 1),
            (p(500, 500), p(428, 428), 1),
            (p(500, 500), p(572, 572), 1),
            (p(500, 500), p(572, 428), 1),
            (p(0, 0), p(0, 0), 0),
            (p(500, 500), p(500, 500), 0),
        ];
        for (i, (a, b, expected)) in cases.iter().enumerate() {
            assert_eq!(turn_based_distance(*a, *b), *expected, "case {}", i);
        }
    }

    #[test]
    fn turn_based_distance_zero_inside_radius() {
        for d in 0..100 {
            assert_eq!(turn_based_distance(p(1000, 1000), p(1000 + d, 1000)), 0);
        }
    }

    #[test]
    fn turn_based_distance_monotonic() {
        let origin = p(0, 900);
        let mut last = 0;
        for x in 0..4000 {
            let d = turn_based_distance(origin, p(x, 900));
            assert!(d >= last, "distance decreased at x={}", x);
            last = d;
        }
        assert!(last <= MAX_DISTANCE);
    }

    #[test]
    fn board_diagonal_within_max_distance() {
        let d = turn_based_distance(p(0, 0), p(BOARD_WIDTH - 1, BOARD_HEIGHT - 1));
        assert!(d <= MAX_DISTANCE);
    }

    #[test]
    fn centroid_truncates() {
        let c = centroid([p(400, 400), p(600, 600), p(500, 200)]);
        assert_eq!(c, Some(p(500, 400)));
        assert_eq!(centroid([p(1, 1), p(2, 2)]), Some(p(1, 1)));
        assert_eq!(centroid(std::iter::empty()), None);
    }

    #[test]
    fn clamp_keeps_points_on_board() {
        assert_eq!(p(-5, 2000).clamp_to_board(), p(0, BOARD_HEIGHT - 1));
        assert_eq!(p(10, 10).clamp_to_board(), p(10, 10));
    }
}
