use gtk::prelude::*;
use gtk4 as gtk;
use std::time::Duration;

pub const DEFAULT_WIDTH: i32 = 420;
pub const DEFAULT_HEIGHT: i32 = 760;

/// Calls `on_frame` once per frame-clock tick with the time since the
/// previous tick, but only while `wants_frame` holds. The first tick after a
/// pause reports zero, so paused time is never replayed. The callback is
/// dropped together with `widget`.
pub fn on_each_frame(
    widget: &impl IsA<gtk::Widget>,
    wants_frame: impl Fn() -> bool + 'static,
    on_frame: impl Fn(Duration) + 'static,
) {
    let last_frame = std::cell::Cell::new(None::<i64>);
    widget.add_tick_callback(move |_, clock| {
        if !wants_frame() {
            last_frame.set(None);
            return glib::ControlFlow::Continue;
        }
        let now = clock.frame_time();
        let dt = last_frame
            .replace(Some(now))
            .map(|prev| Duration::from_micros(now.saturating_sub(prev).max(0) as u64))
            .unwrap_or_default();
        on_frame(dt);
        glib::ControlFlow::Continue
    });
}
