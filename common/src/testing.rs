//! Recording [`Platform`] double for unit tests.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;

use crate::display_mode::{DisplayMode, Scale};
use crate::fonts::{self, Font, FontError};
use crate::input::{ButtonState, CrankReading};
use crate::menu::{Menu, MenuError, MenuItem, MenuItemId};
use crate::platform::Platform;

/// One `draw_text` call.
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub font_path: &'static str,
    pub text: String,
    pub origin: Point,
}

/// Scripted inputs, recorded outputs.
pub struct RecordingPlatform {
    pub buttons: ButtonState,
    pub crank: CrankReading,
    pub fonts_missing: bool,
    pub menu: Menu,
    pub mode: DisplayMode,
    pub clears: Vec<BinaryColor>,
    pub draws: Vec<DrawCall>,
    pub console: Vec<String>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self {
            buttons: ButtonState::default(),
            crank: CrankReading::DOCKED,
            fonts_missing: false,
            menu: Menu::new(),
            mode: DisplayMode::new(),
            clears: Vec::new(),
            draws: Vec::new(),
            console: Vec::new(),
        }
    }
}

impl Platform for RecordingPlatform {
    fn load_font(
        &mut self,
        path: &str,
    ) -> Result<Font, FontError> {
        if self.fonts_missing {
            return Err(FontError::NotFound);
        }
        fonts::resolve(path)
    }

    fn button_state(&self) -> ButtonState { self.buttons }

    fn crank(&self) -> CrankReading { self.crank }

    fn set_inverted(
        &mut self,
        inverted: bool,
    ) {
        self.mode.inverted = inverted;
    }

    fn set_scale(
        &mut self,
        scale: Scale,
    ) {
        self.mode.scale = scale;
    }

    fn set_flipped(
        &mut self,
        flip_x: bool,
        flip_y: bool,
    ) {
        self.mode.flip_x = flip_x;
        self.mode.flip_y = flip_y;
    }

    fn clear(
        &mut self,
        color: BinaryColor,
    ) {
        self.clears.push(color);
    }

    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        origin: Point,
    ) {
        self.draws.push(DrawCall {
            font_path: font.path(),
            text: text.to_string(),
            origin,
        });
    }

    fn add_menu_item(
        &mut self,
        item: MenuItem,
    ) -> Result<MenuItemId, MenuError> {
        self.menu.add(item)
    }

    fn menu_item_value(
        &self,
        id: MenuItemId,
    ) -> usize {
        self.menu.value(id)
    }

    fn log_to_console(
        &mut self,
        message: &str,
    ) {
        self.console.push(message.to_string());
    }
}
