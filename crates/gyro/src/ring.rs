use crate::geometry::{Placement, Point, Size, resolve_center};
use crate::gesture::{GestureEvent, GestureRecognizer};
use crate::icon::IconName;
use crate::layout::{
    DEFAULT_CENTER_SIZE, DEFAULT_ITEM_SIZE, DEFAULT_RADIUS, HitTarget, ItemPlacement, RingLayout,
};
use crate::rotation::{AutoSpin, RotationController};
use std::time::Duration;

/// What a ring shows and how large it is. Order of `items` is the order
/// around the circle, clockwise from angle 0.
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfiguration {
    pub items: Vec<IconName>,
    pub center: IconName,
    pub item_size: f64,
    pub center_size: f64,
    pub radius: f64,
}

impl RingConfiguration {
    pub fn new(items: Vec<IconName>, center: IconName) -> Self {
        Self {
            items,
            center,
            item_size: DEFAULT_ITEM_SIZE,
            center_size: DEFAULT_CENTER_SIZE,
            radius: DEFAULT_RADIUS,
        }
    }

    pub fn layout(&self) -> RingLayout {
        RingLayout {
            radius: self.radius,
            item_size: self.item_size,
            center_size: self.center_size,
        }
    }
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFrame {
    pub center: Point,
    pub center_size: f64,
    pub item_size: f64,
    pub rotation: f64,
    pub items: Vec<ItemPlacement>,
}

/// One ring widget: rotation state, gesture state and click callbacks.
pub struct Ring {
    config: RingConfiguration,
    controller: RotationController,
    gestures: GestureRecognizer,
    /// Target under the pointer at press time. A tap fires this one even if
    /// the ring spun out from under the pointer before release.
    pressed_target: Option<HitTarget>,
    on_center_clicked: Box<dyn FnMut()>,
    on_item_clicked: Box<dyn FnMut(usize)>,
}

impl Ring {
    pub fn new(
        config: RingConfiguration,
        spin: Option<AutoSpin>,
        on_center_clicked: impl FnMut() + 'static,
        on_item_clicked: impl FnMut(usize) + 'static,
    ) -> Self {
        Self {
            config,
            controller: RotationController::new(spin),
            gestures: GestureRecognizer::default(),
            pressed_target: None,
            on_center_clicked: Box::new(on_center_clicked),
            on_item_clicked: Box::new(on_item_clicked),
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.gestures = GestureRecognizer::new(touch_slop);
        self
    }

    pub fn config(&self) -> &RingConfiguration {
        &self.config
    }

    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    pub fn rotation(&self) -> f64 {
        self.controller.rotation()
    }

    pub fn item_count(&self) -> usize {
        self.config.items.len()
    }

    /// Swaps icons and sizes in place. Rotation and any drag in progress
    /// carry over.
    pub fn reconfigure(&mut self, config: RingConfiguration) {
        self.config = config;
    }

    pub fn set_spin(&mut self, spin: Option<AutoSpin>) {
        self.controller.set_spin(spin);
    }

    pub fn set_touch_slop(&mut self, touch_slop: f64) {
        if !self.gestures.is_dragging() {
            self.gestures = GestureRecognizer::new(touch_slop);
        }
    }

    /// Records the ring center for a surface of `size`. Safe to call again
    /// on every resize.
    pub fn resolve_geometry(&mut self, size: Size, placement: Placement) -> Point {
        let center = resolve_center(size, placement);
        log::debug!(
            "Surface {}x{} resolved ring center to ({:.1}, {:.1})",
            size.width,
            size.height,
            center.x,
            center.y
        );
        self.controller.set_center(center);
        center
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.pressed_target = self.hit_test(at);
        self.gestures.press(at);
    }

    /// Returns whether the ring moved.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        match self.gestures.motion(at) {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    pub fn pointer_up(&mut self, at: Point) -> bool {
        match self.gestures.release(at) {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    pub fn pointer_cancel(&mut self) -> bool {
        self.pressed_target = None;
        match self.gestures.cancel() {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    /// Advances idle spin. Returns whether the ring moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let before = self.controller.rotation();
        self.controller.tick(dt) != before
    }

    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        self.config.layout().hit_test(
            self.controller.center(),
            self.controller.rotation(),
            self.item_count(),
            point,
        )
    }

    pub fn frame(&self) -> RingFrame {
        let center = self.controller.center();
        let rotation = self.controller.rotation();
        RingFrame {
            center,
            center_size: self.config.center_size,
            item_size: self.config.item_size,
            rotation,
            items: self
                .config
                .layout()
                .place(center, rotation, self.item_count()),
        }
    }

    fn apply(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::DragStart { origin, current } => {
                self.pressed_target = None;
                self.controller.drag_start(origin);
                self.controller.drag_move(current);
                true
            }
            GestureEvent::DragMove(at) => {
                self.controller.drag_move(at);
                true
            }
            GestureEvent::DragEnd => {
                self.controller.drag_end();
                true
            }
            GestureEvent::Tap(_) => {
                self.click();
                false
            }
        }
    }

    fn click(&mut self) {
        match self.pressed_target.take() {
            Some(HitTarget::Center) => (self.on_center_clicked)(),
            Some(HitTarget::Item(index)) if index < self.item_count() => {
                (self.on_item_clicked)(index)
            }
            _ => {}
        }
    }
}
