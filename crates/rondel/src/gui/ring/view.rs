use super::model::{Slot, State};
use super::{FALLBACK_FONT_SIZE, ICON_FILL};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use gyro::{HitTarget, Point};
use palette::Srgba;
use std::f64::consts::PI;

struct ButtonRenderer<'a> {
    slot: &'a Slot,
    center: Point,
    diameter: f64,
    state: ButtonState,
}

impl<'a> ButtonRenderer<'a> {
    fn new(slot: &'a Slot, center: Point, diameter: f64, state: ButtonState) -> Self {
        Self {
            slot,
            center,
            diameter,
            state,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_disc(cr, colors)?;
        self.draw_content(cr, colors.icon)
    }

    fn draw_disc(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, self.state.color(colors));
        cr.arc(
            self.center.x,
            self.center.y,
            self.diameter / 2.0,
            0.0,
            2.0 * PI,
        );
        cr.fill()
    }

    fn draw_content(&self, cr: &Context, tint: Srgba<f64>) -> Result<(), cairo::Error> {
        match &self.slot.pixbuf {
            Some(pixbuf) => self.draw_icon(cr, pixbuf, tint),
            None => self.draw_text(cr, &self.slot.icon.initial(), tint),
        }
    }

    fn draw_icon(
        &self,
        cr: &Context,
        pixbuf: &Pixbuf,
        tint: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        let longest = pixbuf.width().max(pixbuf.height()).max(1) as f64;
        let icon_scale = self.diameter * ICON_FILL / longest;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(self.center.x - iw / 2.0, self.center.y - ih / 2.0);
        cr.scale(icon_scale, icon_scale);

        // keep the icon's alpha, replace its colors with the tint
        cr.push_group();
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.set_operator(cairo::Operator::In);
        set_source(cr, tint);
        cr.paint()?;
        cr.pop_group_to_source()?;
        cr.paint()?;

        cr.restore()
    }

    fn draw_text(&self, cr: &Context, text: &str, tint: Srgba<f64>) -> Result<(), cairo::Error> {
        if text.is_empty() {
            return Ok(());
        }
        set_source(cr, tint);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(self.diameter * FALLBACK_FONT_SIZE);
        if let Ok(ext) = cr.text_extents(text) {
            cr.move_to(
                self.center.x - ext.width() / 2.0 - ext.x_bearing(),
                self.center.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Hovered,
    Center,
    Idle,
}

impl ButtonState {
    /// Hover wins over the center's own fill.
    fn resolve(target: HitTarget, hover: Option<HitTarget>) -> Self {
        if hover == Some(target) {
            Self::Hovered
        } else if target == HitTarget::Center {
            Self::Center
        } else {
            Self::Idle
        }
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        match self {
            Self::Hovered => colors.hovered,
            Self::Center => colors.center,
            Self::Idle => colors.item,
        }
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let frame = state.ring.frame();

    ButtonRenderer::new(
        &state.center,
        frame.center,
        frame.center_size,
        ButtonState::resolve(HitTarget::Center, state.hover),
    )
    .draw(cr, colors)?;

    for item in &frame.items {
        if let Some(slot) = state.slots.get(item.index) {
            ButtonRenderer::new(
                slot,
                item.position,
                frame.item_size,
                ButtonState::resolve(HitTarget::Item(item.index), state.hover),
            )
            .draw(cr, colors)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_state_priority() {
        assert_eq!(
            ButtonState::resolve(HitTarget::Center, Some(HitTarget::Center)),
            ButtonState::Hovered
        );
        assert_eq!(
            ButtonState::resolve(HitTarget::Center, Some(HitTarget::Item(0))),
            ButtonState::Center
        );
        assert_eq!(
            ButtonState::resolve(HitTarget::Item(2), Some(HitTarget::Item(2))),
            ButtonState::Hovered
        );
        assert_eq!(
            ButtonState::resolve(HitTarget::Item(2), None),
            ButtonState::Idle
        );
    }
}
