//! Debug overlay: recent console lines and menu state.
//!
//! Drawn straight onto the physical display after the app's frame, so it
//! ignores scale, flip and inversion. Toggle with `L`.

use core::fmt::Write;

use bounce_common::colors::{BLACK, WHITE};
use bounce_common::console::ConsoleLog;
use bounce_common::menu::Menu;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use profont::PROFONT_9_POINT;

const LINE_HEIGHT: i32 = 12;
const MARGIN: i32 = 4;

const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BLACK);

pub fn draw_overlay<D>(
    display: &mut D,
    menu: &Menu,
    console: &ConsoleLog,
    crank_docked: bool,
) where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let size = display.size();
    let lines = console.len() as i32 + 1;
    let height = (lines * LINE_HEIGHT + MARGIN * 2) as u32;

    Rectangle::new(Point::zero(), Size::new(size.width, height))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();

    let mut status: String<96> = String::new();
    for (_, item) in menu.iter() {
        write!(status, "{} {}  ", item.title, item.value_label()).ok();
    }
    write!(status, "Crank {}", if crank_docked { "docked" } else { "out" }).ok();

    let mut y = MARGIN;
    Text::with_baseline(&status, Point::new(MARGIN, y), TEXT_STYLE, Baseline::Top)
        .draw(display)
        .ok();

    for line in console.iter() {
        y += LINE_HEIGHT;
        Text::with_baseline(line, Point::new(MARGIN, y), TEXT_STYLE, Baseline::Top)
            .draw(display)
            .ok();
    }

    Rectangle::new(Point::new(0, height as i32 - 1), Size::new(size.width, 1))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();
}
