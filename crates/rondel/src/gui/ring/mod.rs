pub mod model;
pub mod view;

pub use model::{Slot, State};
pub use view::draw;

/// Edge length icons are rasterized at before scaling into a button.
pub const ICON_SIZE: i32 = 128;
/// Fraction of a button's diameter covered by its icon.
pub const ICON_FILL: f64 = 0.6;
pub const FALLBACK_FONT_SIZE: f64 = 0.45; // of the button diameter
