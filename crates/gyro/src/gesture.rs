use crate::geometry::Point;

/// Movement, in layout units, a press may wander before it becomes a drag.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer left the slop circle. The drag is anchored at `origin`
    /// so the motion spent inside the slop still rotates the ring.
    DragStart { origin: Point, current: Point },
    DragMove(Point),
    DragEnd,
    Tap(Point),
}

/// Splits one pointer stream into taps and drags.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    touch_slop: f64,
    pressed: Option<Point>,
    dragging: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}

impl GestureRecognizer {
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            pressed: None,
            dragging: false,
        }
    }

    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, at: Point) {
        self.pressed = Some(at);
        self.dragging = false;
    }

    pub fn motion(&mut self, at: Point) -> Option<GestureEvent> {
        let origin = self.pressed?;
        if self.dragging {
            return Some(GestureEvent::DragMove(at));
        }
        (origin.distance(at) > self.touch_slop).then(|| {
            self.dragging = true;
            GestureEvent::DragStart {
                origin,
                current: at,
            }
        })
    }

    pub fn release(&mut self, at: Point) -> Option<GestureEvent> {
        let origin = self.pressed.take()?;
        if std::mem::take(&mut self.dragging) {
            return Some(GestureEvent::DragEnd);
        }
        // a release outside the slop without any motion report is still a drag
        if origin.distance(at) > self.touch_slop {
            return None;
        }
        Some(GestureEvent::Tap(origin))
    }

    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.pressed = None;
        std::mem::take(&mut self.dragging).then_some(GestureEvent::DragEnd)
    }
}
