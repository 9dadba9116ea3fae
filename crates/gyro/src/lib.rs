//! Gesture and geometry core for a rotating ring of buttons.
//!
//! Nothing in here knows about a GUI toolkit: the host feeds pointer
//! positions, surface sizes and frame deltas in, and reads a [`RingFrame`]
//! back out to draw.

pub mod angle;
pub mod geometry;
pub mod gesture;
pub mod icon;
pub mod layout;
mod macros;
pub mod ring;
pub mod rotation;
pub mod tween;

pub use angle::{angle_between, angle_delta, wrap_degrees};
pub use geometry::{Placement, Point, Size, resolve_center};
pub use gesture::{GestureEvent, GestureRecognizer};
pub use icon::IconName;
pub use layout::{HitTarget, ItemPlacement, RingLayout};
pub use ring::{Ring, RingConfiguration, RingFrame};
pub use rotation::{AutoSpin, Phase, RotationController};
pub use tween::Tween;
