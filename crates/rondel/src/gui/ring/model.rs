use super::ICON_SIZE;
use crate::config::Config;
use gdk_pixbuf::Pixbuf;
use gyro::icon::find_icon_path;
use gyro::{HitTarget, IconName, Placement, Point, Ring, RingConfiguration, Size};

#[derive(Clone)]
pub struct Slot {
    pub icon: IconName,
    pub pixbuf: Option<Pixbuf>,
}

impl Slot {
    pub fn new(icon: IconName) -> Self {
        let pixbuf = Self::load_icon(&icon);
        Self { icon, pixbuf }
    }

    fn load_icon(icon: &IconName) -> Option<Pixbuf> {
        let path = find_icon_path(icon)?;
        Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true)
            .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }
}

/// The ring plus everything the view needs that the core does not track:
/// loaded icons, hover, and the last known surface.
pub struct State {
    pub ring: Ring,
    pub center: Slot,
    pub slots: Vec<Slot>,
    pub hover: Option<HitTarget>,
    placement: Placement,
    surface: Option<Size>,
    pointer: Option<Point>,
}

impl State {
    pub fn new(ring: Ring, placement: Placement) -> Self {
        let (center, slots) = Self::init_slots(ring.config());
        Self {
            ring,
            center,
            slots,
            hover: None,
            placement,
            surface: None,
            pointer: None,
        }
    }

    pub fn init_slots(config: &RingConfiguration) -> (Slot, Vec<Slot>) {
        let center = Slot::new(config.center.clone());
        let slots = config.items.iter().cloned().map(Slot::new).collect();
        (center, slots)
    }

    pub fn resize(&mut self, size: Size) {
        self.surface = Some(size);
        self.ring.resolve_geometry(size, self.placement);
        self.refresh_hover();
    }

    /// Returns whether the hovered target changed.
    pub fn update_hover(&mut self, pointer: Point) -> bool {
        self.pointer = Some(pointer);
        self.refresh_hover()
    }

    pub fn clear_hover(&mut self) -> bool {
        self.pointer = None;
        self.refresh_hover()
    }

    /// Re-evaluates hover after the ring moved under a still pointer.
    pub fn refresh_hover(&mut self) -> bool {
        let hover = self.pointer.and_then(|p| self.ring.hit_test(p));
        let changed = hover != self.hover;
        self.hover = hover;
        changed
    }

    /// Whether frame ticks can move the ring: spin is on and no drag holds it.
    pub fn wants_ticks(&self) -> bool {
        let controller = self.ring.controller();
        controller.spin().is_some() && !controller.is_dragging()
    }

    /// Applies a reloaded config without resetting the rotation.
    pub fn reconfigure(&mut self, config: &Config, spin_enabled: bool) {
        let ring_config = config.ring_configuration();
        let (center, slots) = Self::init_slots(&ring_config);
        self.center = center;
        self.slots = slots;

        self.ring.reconfigure(ring_config);
        self.ring
            .set_spin(config.spin.auto_spin().filter(|_| spin_enabled));
        self.ring.set_touch_slop(config.touch_slop);

        self.placement = config.placement();
        if let Some(size) = self.surface {
            self.ring.resolve_geometry(size, self.placement);
        }
        self.refresh_hover();
    }
}
