use crate::angle::{angle_between, angle_delta, wrap_degrees};
use crate::geometry::Point;
use crate::tween::Tween;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Idle auto-rotation: `increment` degrees every `duration`, linearly eased.
///
/// Only the ratio is visible to the user, so the controller consumes wall
/// clock time and never counts frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoSpin {
    pub increment: f64,
    pub duration: Duration,
}

impl AutoSpin {
    pub const DEFAULT_INCREMENT: f64 = 2.0;
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(50);

    pub fn new(increment: f64, duration: Duration) -> Self {
        Self {
            increment,
            duration,
        }
    }

    pub fn degrees_per_second(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.increment / self.duration.as_secs_f64()
    }

    fn segment(&self, from: f64) -> Tween {
        let from = wrap_degrees(from);
        Tween::new(from, from + self.increment, self.duration)
    }
}

impl Default for AutoSpin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCREMENT, Self::DEFAULT_DURATION)
    }
}

/// Owns the rotation of one ring and decides what angle each frame renders.
///
/// Dragging accumulates the change in pointer angle between samples, so the
/// ring never snaps to the pointer when a drag starts or ends. A single
/// sample that jumps more than 180° is read as a short turn the other way.
#[derive(Debug, Clone)]
pub struct RotationController {
    rotation: f64,
    phase: Phase,
    initial_angle: f64,
    center: Point,
    spin: Option<AutoSpin>,
    tween: Option<Tween>,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(Some(AutoSpin::default()))
    }
}

impl RotationController {
    pub fn new(spin: Option<AutoSpin>) -> Self {
        Self {
            rotation: 0.0,
            phase: Phase::Idle,
            initial_angle: 0.0,
            center: Point::default(),
            spin,
            tween: None,
        }
    }

    /// Accumulated rotation in degrees. Not reduced modulo 360 while dragging.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn spin(&self) -> Option<AutoSpin> {
        self.spin
    }

    /// Until this is called the center is the origin; drags still work, they
    /// just rotate around the wrong point.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_spin(&mut self, spin: Option<AutoSpin>) {
        self.spin = spin;
        self.tween = None;
    }

    pub fn drag_start(&mut self, touch: Point) {
        self.phase = Phase::Dragging;
        self.tween = None;
        self.initial_angle = angle_between(self.center, touch);
        log::debug!(
            "Drag started at {:.1}° (rotation {:.1}°)",
            self.initial_angle,
            self.rotation
        );
    }

    pub fn drag_move(&mut self, touch: Point) -> f64 {
        if self.phase != Phase::Dragging {
            return self.rotation;
        }
        let current = angle_between(self.center, touch);
        self.rotation += angle_delta(self.initial_angle, current);
        self.initial_angle = current;
        self.rotation
    }

    pub fn drag_end(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.phase = Phase::Idle;
        self.rotation = wrap_degrees(self.rotation);
        log::debug!("Drag ended at rotation {:.1}°", self.rotation);
    }

    /// Advances idle auto-rotation by `dt` of wall clock time. No-op while
    /// dragging or with spin disabled.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        let Some(spin) = self.spin else {
            return self.rotation;
        };
        if self.phase == Phase::Dragging || dt.is_zero() {
            return self.rotation;
        }
        if spin.duration.is_zero() {
            self.rotation = wrap_degrees(self.rotation + spin.increment);
            return self.rotation;
        }

        let mut tween = self
            .tween
            .take()
            .unwrap_or_else(|| spin.segment(self.rotation));
        let remaining = tween.advance(dt);
        self.rotation = tween.value();
        if !tween.is_finished() {
            self.tween = Some(tween);
            return self.rotation;
        }

        // skip whole segments at once after long gaps between frames
        let segment = spin.duration.as_nanos();
        let whole = remaining.as_nanos() / segment;
        let partial = Duration::from_nanos((remaining.as_nanos() % segment) as u64);
        self.rotation += whole as f64 * spin.increment;

        let mut next = spin.segment(self.rotation);
        next.advance(partial);
        self.rotation = next.value();
        self.tween = Some(next);
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn on_circle(center: Point, radius: f64, degrees: f64) -> Point {
        let r = degrees.to_radians();
        Point::new(center.x + radius * r.sin(), center.y - radius * r.cos())
    }

    fn drag_along(ctrl: &mut RotationController, from: f64, to: f64, step: f64) -> f64 {
        let c = ctrl.center();
        ctrl.drag_start(on_circle(c, 50.0, from));
        let mut a = from;
        while a < to {
            a = (a + step).min(to);
            ctrl.drag_move(on_circle(c, 50.0, a));
        }
        ctrl.rotation()
    }

    #[test]
    fn test_initial_state() {
        let ctrl = RotationController::default();
        assert_eq!(ctrl.rotation(), 0.0);
        assert_eq!(ctrl.phase(), Phase::Idle);
        assert_eq!(ctrl.center(), Point::default());
    }

    #[test]
    fn test_north_to_east_adds_quarter_turn() {
        let mut ctrl = RotationController::new(None);
        let c = Point::new(100.0, 100.0);
        ctrl.set_center(c);

        ctrl.drag_start(Point::new(100.0, 40.0));
        assert!(ctrl.is_dragging());
        let r = ctrl.drag_move(Point::new(160.0, 100.0));
        assert!((r - 90.0).abs() < EPS, "{}", r);
    }

    #[test]
    fn test_dense_and_coarse_paths_agree() {
        let c = Point::new(0.0, 0.0);

        let mut dense = RotationController::new(None);
        dense.set_center(c);
        let mut coarse = RotationController::new(None);
        coarse.set_center(c);

        let a = drag_along(&mut dense, 10.0, 700.0, 1.0);
        let b = drag_along(&mut coarse, 10.0, 700.0, 45.0);
        assert!((a - 690.0).abs() < EPS, "{}", a);
        assert!((a - b).abs() < EPS, "{} vs {}", a, b);
    }

    #[test]
    fn test_large_jump_reads_as_short_turn_backwards() {
        let mut ctrl = RotationController::new(None);
        let c = Point::new(0.0, 0.0);
        ctrl.drag_start(on_circle(c, 10.0, 0.0));
        let r = ctrl.drag_move(on_circle(c, 10.0, 190.0));
        assert!((r + 170.0).abs() < EPS, "{}", r);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut ctrl = RotationController::new(None);
        ctrl.set_center(Point::new(0.0, 0.0));
        assert_eq!(ctrl.drag_move(Point::new(10.0, 0.0)), 0.0);
        assert_eq!(ctrl.rotation(), 0.0);
    }

    #[test]
    fn test_drag_before_layout_is_harmless() {
        let mut ctrl = RotationController::default();
        ctrl.drag_start(Point::new(0.0, 0.0));
        let r = ctrl.drag_move(Point::new(5.0, 5.0));
        assert!(r.is_finite());
        ctrl.drag_end();
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_drag_end_wraps_without_changing_congruence() {
        let mut ctrl = RotationController::new(None);
        let r = drag_along(&mut ctrl, 0.0, 400.0, 10.0);
        ctrl.drag_end();
        assert!((wrap_degrees(r) - ctrl.rotation()).abs() < EPS);
        assert!((ctrl.rotation() - 40.0).abs() < EPS);
    }

    #[test]
    fn test_idle_ticks_advance_by_increment() {
        let mut ctrl = RotationController::default();
        for _ in 0..10 {
            ctrl.tick(AutoSpin::DEFAULT_DURATION);
        }
        assert!((ctrl.rotation() - 20.0).abs() < EPS, "{}", ctrl.rotation());
    }

    #[test]
    fn test_spin_rate_ignores_frame_rate() {
        let mut fine = RotationController::default();
        for _ in 0..125 {
            fine.tick(Duration::from_millis(8));
        }
        let mut coarse = RotationController::default();
        coarse.tick(Duration::from_secs(1));

        let expected = AutoSpin::default().degrees_per_second();
        assert!((expected - 40.0).abs() < EPS);
        assert!((fine.rotation() - expected).abs() < EPS, "{}", fine.rotation());
        assert!((coarse.rotation() - expected).abs() < EPS, "{}", coarse.rotation());
    }

    #[test]
    fn test_interpolates_within_a_segment() {
        let mut ctrl = RotationController::default();
        ctrl.tick(Duration::from_millis(25));
        assert!((ctrl.rotation() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_long_idle_stays_bounded() {
        let mut ctrl = RotationController::default();
        ctrl.tick(Duration::from_secs(3600 * 24));
        assert!(ctrl.rotation() >= 0.0 && ctrl.rotation() < 360.0 + AutoSpin::DEFAULT_INCREMENT);
    }

    #[test]
    fn test_drag_suspends_spin() {
        let mut ctrl = RotationController::default();
        ctrl.set_center(Point::new(0.0, 0.0));
        ctrl.tick(Duration::from_millis(25));
        let before = ctrl.rotation();

        ctrl.drag_start(Point::new(0.0, -10.0));
        ctrl.tick(Duration::from_secs(1));
        assert_eq!(ctrl.rotation(), before);

        ctrl.drag_end();
        ctrl.tick(AutoSpin::DEFAULT_DURATION);
        assert!((ctrl.rotation() - (before + 2.0)).abs() < EPS);
    }

    #[test]
    fn test_disabled_spin_never_moves() {
        let mut ctrl = RotationController::new(None);
        ctrl.tick(Duration::from_secs(5));
        assert_eq!(ctrl.rotation(), 0.0);
    }

    #[test]
    fn test_counter_clockwise_spin() {
        let mut ctrl =
            RotationController::new(Some(AutoSpin::new(-2.0, AutoSpin::DEFAULT_DURATION)));
        ctrl.tick(AutoSpin::DEFAULT_DURATION);
        assert!((wrap_degrees(ctrl.rotation()) - 358.0).abs() < EPS);
        ctrl.tick(AutoSpin::DEFAULT_DURATION);
        assert!((wrap_degrees(ctrl.rotation()) - 356.0).abs() < EPS);
    }
}
