//! Adapter from [`PanelDisplay`] to any `embedded-graphics` draw target.
//!
//! Enabled by the `graphics` feature. Wrap a monochrome
//! [`DrawTarget`] in a [`GraphicsPanel`] and hand it to a
//! [`StatusPanel`](crate::panel::StatusPanel); glyphs go out as raw images
//! and the readouts as built-in monospace text.

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};

use crate::glyph::{GLYPH_WIDTH, Glyph};
use crate::panel::PanelDisplay;

/// Frame presentation seam for buffered display drivers.
///
/// Implement this alongside [`DrawTarget`] for your driver wrapper. Push
/// the staged frame to the panel here; immediate-mode targets can leave it
/// empty. Handle any hardware errors internally - this method cannot fail.
pub trait FlushTarget {
    /// Makes the staged frame visible.
    fn flush(&mut self);
}

/// [`PanelDisplay`] implementation over an `embedded-graphics` target.
///
/// Draw errors are swallowed: the panel is a status readout and a dropped
/// pixel is preferable to an error path through every render call.
pub struct GraphicsPanel<D> {
    target: D,
    text_style: MonoTextStyle<'static, BinaryColor>,
}

impl<D> GraphicsPanel<D>
where
    D: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    /// Wraps a target, rendering text in the built-in 5x8 font.
    pub fn new(target: D) -> Self {
        Self::with_font(target, &FONT_5X8)
    }

    /// Wraps a target with a caller-chosen monospace font.
    pub fn with_font(target: D, font: &'static MonoFont<'static>) -> Self {
        Self {
            target,
            text_style: MonoTextStyle::new(font, BinaryColor::On),
        }
    }

    /// The wrapped target.
    pub fn inner(&self) -> &D {
        &self.target
    }

    /// Mutable access to the wrapped target.
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwraps the target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> PanelDisplay for GraphicsPanel<D>
where
    D: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    fn clear(&mut self) {
        self.target.clear(BinaryColor::Off).ok();
    }

    fn draw_glyph(&mut self, x: u32, y: u32, glyph: &Glyph) {
        let raw = ImageRaw::<BinaryColor>::new(glyph.as_bytes(), GLYPH_WIDTH);
        Image::new(&raw, Point::new(x as i32, y as i32))
            .draw(&mut self.target)
            .ok();
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str) {
        Text::with_baseline(
            text,
            Point::new(x as i32, y as i32),
            self.text_style,
            Baseline::Top,
        )
        .draw(&mut self.target)
        .ok();
    }

    fn present(&mut self) {
        self.target.flush();
    }
}
