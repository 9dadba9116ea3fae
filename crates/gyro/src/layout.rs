use crate::angle::wrap_degrees;
use crate::geometry::Point;

pub const DEFAULT_ITEM_SIZE: f64 = 40.0;
pub const DEFAULT_CENTER_SIZE: f64 = 60.0;
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Placement angle of item `index` out of `count`, in [0, 360).
///
/// Items are spread evenly; the rotation only shifts their common phase.
pub fn item_angle(rotation: f64, index: usize, count: usize) -> f64 {
    wrap_degrees(index as f64 * (360.0 / count as f64) + rotation)
}

/// Offset of item `index` from the ring center. Angle 0 points along +x and
/// positive angles turn clockwise on a y-down surface.
pub fn item_offset(rotation: f64, index: usize, count: usize, radius: f64) -> Point {
    let angle = item_angle(rotation, index, count).to_radians();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub index: usize,
    pub angle: f64,
    pub offset: Point,
    /// Absolute position of the item center on the surface.
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Center,
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub radius: f64,
    pub item_size: f64,
    pub center_size: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            item_size: DEFAULT_ITEM_SIZE,
            center_size: DEFAULT_CENTER_SIZE,
        }
    }
}

impl RingLayout {
    pub fn place(&self, center: Point, rotation: f64, count: usize) -> Vec<ItemPlacement> {
        (0..count)
            .map(|index| {
                let offset = item_offset(rotation, index, count, self.radius);
                ItemPlacement {
                    index,
                    angle: item_angle(rotation, index, count),
                    offset,
                    position: center + offset,
                }
            })
            .collect()
    }

    /// Topmost target under `point`. Ring items are painted over the center
    /// button, and later items over earlier ones.
    pub fn hit_test(
        &self,
        center: Point,
        rotation: f64,
        count: usize,
        point: Point,
    ) -> Option<HitTarget> {
        self.place(center, rotation, count)
            .iter()
            .rev()
            .find(|item| item.position.distance(point) <= self.item_size / 2.0)
            .map(|item| HitTarget::Item(item.index))
            .or_else(|| {
                (center.distance(point) <= self.center_size / 2.0).then_some(HitTarget::Center)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
            "{:?} != ({}, {})",
            p,
            x,
            y
        );
    }

    #[test]
    fn test_six_items_at_rest() {
        assert_point(item_offset(0.0, 0, 6, 100.0), 100.0, 0.0);
        assert_point(item_offset(0.0, 3, 6, 100.0), -100.0, 0.0);
    }

    #[test]
    fn test_even_spacing_survives_rotation() {
        for count in 1..=12 {
            for rotation in [0.0, 17.5, -245.0, 1234.5] {
                let step = 360.0 / count as f64;
                for i in 0..count {
                    let a = item_angle(rotation, i, count);
                    let b = item_angle(rotation, (i + 1) % count, count);
                    let gap = wrap_degrees(b - a);
                    let gap = if count == 1 { 360.0 - gap } else { gap };
                    assert!((gap - step).abs() < 1e-6, "n={} r={} gap={}", count, rotation, gap);
                }
            }
        }
    }

    #[test]
    fn test_rotation_moves_every_item_by_the_same_amount() {
        let layout = RingLayout::default();
        let c = Point::new(200.0, 200.0);
        let before = layout.place(c, 0.0, 6);
        let after = layout.place(c, 90.0, 6);
        for (b, a) in before.iter().zip(&after) {
            assert!((wrap_degrees(a.angle - b.angle) - 90.0).abs() < 1e-6);
        }
        // item 0 swings from east to south on a y-down surface
        assert_point(after[0].position, 200.0, 300.0);
    }

    #[test]
    fn test_no_items_no_placements() {
        let layout = RingLayout::default();
        assert!(layout.place(Point::default(), 42.0, 0).is_empty());
        assert_eq!(
            layout.hit_test(Point::default(), 0.0, 0, Point::default()),
            Some(HitTarget::Center)
        );
    }

    #[test]
    fn test_hit_test() {
        let layout = RingLayout::default();
        let c = Point::new(0.0, 0.0);
        assert_eq!(
            layout.hit_test(c, 0.0, 6, Point::new(5.0, 5.0)),
            Some(HitTarget::Center)
        );
        assert_eq!(
            layout.hit_test(c, 0.0, 6, Point::new(-95.0, 3.0)),
            Some(HitTarget::Item(3))
        );
        assert_eq!(layout.hit_test(c, 0.0, 6, Point::new(60.0, 0.0)), None);
        assert_eq!(
            layout.hit_test(c, 180.0, 6, Point::new(-100.0, 0.0)),
            Some(HitTarget::Item(0))
        );
    }

    #[test]
    fn test_overlapping_items_prefer_the_topmost() {
        let layout = RingLayout {
            radius: 10.0,
            item_size: 40.0,
            center_size: 10.0,
        };
        assert_eq!(
            layout.hit_test(Point::default(), 0.0, 4, Point::new(0.0, 0.0)),
            Some(HitTarget::Item(3))
        );
    }
}
