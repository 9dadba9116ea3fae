use crate::geometry::Point;

/// Signed angle in degrees of the vector from `point` to `center`.
///
/// The argument order matters: swapping it flips the rotation direction of
/// every drag. In screen coordinates (y down) a point straight above the
/// center is 0° and a point to its right is 90°, so dragging clockwise
/// produces increasing angles.
///
/// The result lies in (-180, 180]. `center == point` yields 0.
pub fn angle_between(center: Point, point: Point) -> f64 {
    let angle = -(center.x - point.x).atan2(center.y - point.y).to_degrees();
    if angle <= -180.0 { angle + 360.0 } else { angle }
}

/// Reduces `value` into [0, 360).
pub fn wrap_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed turn from `from` to `to`, in (-180, 180].
pub fn angle_delta(from: f64, to: f64) -> f64 {
    let d = wrap_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_compass_points() {
        let c = Point::new(100.0, 100.0);
        let cases = [
            (Point::new(100.0, 50.0), 0.0),   // north
            (Point::new(150.0, 100.0), 90.0), // east
            (Point::new(100.0, 150.0), 180.0),
            (Point::new(50.0, 100.0), -90.0), // west
            (Point::new(150.0, 50.0), 45.0),
        ];
        for (p, expected) in cases {
            let got = angle_between(c, p);
            assert!((got - expected).abs() < EPS, "{:?}: {} != {}", p, got, expected);
        }
    }

    #[test]
    fn test_range_is_half_open() {
        let c = Point::new(3.0, -7.0);
        for ix in -20..=20 {
            for iy in -20..=20 {
                let p = Point::new(c.x + ix as f64 * 0.5, c.y + iy as f64 * 0.5);
                let a = angle_between(c, p);
                assert!(a > -180.0 && a <= 180.0, "{:?} -> {}", p, a);
            }
        }
    }

    #[test]
    fn test_straight_down_is_positive_half_turn() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(angle_between(c, Point::new(0.0, 10.0)), 180.0);
        assert_eq!(angle_between(c, Point::new(-0.0, 10.0)), 180.0);
    }

    #[test]
    fn test_degenerate_point_is_zero() {
        let c = Point::new(12.5, 40.0);
        assert_eq!(angle_between(c, c), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let c = Point::new(1.0, 2.0);
        let p = Point::new(-3.3, 9.1);
        assert_eq!(angle_between(c, p), angle_between(c, p));
    }

    #[test]
    fn test_delta_crosses_the_half_turn_seam() {
        assert!((angle_delta(179.0, -179.0) - 2.0).abs() < EPS);
        assert!((angle_delta(-179.0, 179.0) + 2.0).abs() < EPS);
        assert!((angle_delta(0.0, 90.0) - 90.0).abs() < EPS);
        assert_eq!(angle_delta(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < EPS);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < EPS);
        assert!(wrap_degrees(-1e-20) < 360.0);
    }
}
