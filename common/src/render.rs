//! Display-mode rendering.
//!
//! - [`ModeTarget`] - wraps a physical 1-bit display and presents the logical
//!   coordinate space of a [`DisplayMode`]
//! - [`draw_label`] - draws the label text, top-left anchored
//!
//! # Mapping
//!
//! | Mode field | Physical effect |
//! |------------|-----------------|
//! | `scale` | Each logical pixel fills a `scale x scale` block |
//! | `flip_x` / `flip_y` | Blocks are mirrored across the physical axis |
//! | `inverted` | Ink and paper are swapped |
//!
//! Logical pixels outside `physical_size / scale` are dropped.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BLACK;
use crate::display_mode::DisplayMode;
use crate::fonts::Font;

/// Draw target applying a [`DisplayMode`] on top of a physical display.
pub struct ModeTarget<'a, D> {
    inner: &'a mut D,
    mode: DisplayMode,
}

impl<'a, D> ModeTarget<'a, D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    pub const fn new(
        inner: &'a mut D,
        mode: DisplayMode,
    ) -> Self {
        Self { inner, mode }
    }

    #[inline]
    fn map_color(
        &self,
        color: BinaryColor,
    ) -> BinaryColor {
        if self.mode.inverted { color.invert() } else { color }
    }

    /// Physical block covered by a logical pixel.
    fn block(
        &self,
        point: Point,
        physical: Size,
    ) -> Rectangle {
        let s = self.mode.scale.factor();
        let mut x = point.x * s;
        let mut y = point.y * s;
        if self.mode.flip_x {
            x = physical.width as i32 - x - s;
        }
        if self.mode.flip_y {
            y = physical.height as i32 - y - s;
        }
        Rectangle::new(Point::new(x, y), Size::new(s as u32, s as u32))
    }
}

impl<D> OriginDimensions for ModeTarget<'_, D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    fn size(&self) -> Size { self.inner.size() / self.mode.scale.factor() as u32 }
}

impl<D> DrawTarget for ModeTarget<'_, D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let physical = self.inner.size();
        let visible = self.bounding_box();

        for Pixel(point, color) in pixels {
            if !visible.contains(point) {
                continue;
            }
            let block = self.block(point, physical);
            let color = self.map_color(color);
            self.inner.fill_solid(&block, color)?;
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let color = self.map_color(color);
        self.inner.clear(color)
    }
}

/// Draw `text` in black with its top-left corner at `origin`.
pub fn draw_label<D>(
    display: &mut D,
    font: Font,
    text: &str,
    origin: Point,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(font.face(), BLACK);
    Text::with_baseline(text, origin, style, Baseline::Top).draw(display).ok();
}
