use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where the ring center sits inside the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    #[default]
    Centered,
    /// Center on the bottom edge, `margin` units above it. The lower half of
    /// the ring hangs off-surface.
    BottomEdge { margin: f64 },
}

/// Local-space center of the ring once the surface size is known.
pub fn resolve_center(size: Size, placement: Placement) -> Point {
    match placement {
        Placement::Centered => Point::new(size.width / 2.0, size.height / 2.0),
        Placement::BottomEdge { margin } => Point::new(size.width / 2.0, size.height - margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_uses_half_extents() {
        let center = resolve_center(Size::new(200.0, 300.0), Placement::Centered);
        assert_eq!(center, Point::new(100.0, 150.0));
    }

    #[test]
    fn test_bottom_edge_sits_margin_above_bottom() {
        let center = resolve_center(
            Size::new(400.0, 800.0),
            Placement::BottomEdge { margin: 30.0 },
        );
        assert_eq!(center, Point::new(200.0, 770.0));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let size = Size::new(640.0, 480.0);
        let placement = Placement::BottomEdge { margin: 12.0 };
        assert_eq!(
            resolve_center(size, placement),
            resolve_center(size, placement)
        );
    }
}
