//! Capability surface provided by the host.
//!
//! The application never talks to hardware directly: fonts, input readings,
//! display toggles, drawing, the system menu and the console all go through
//! [`Platform`]. The desktop simulator implements it with an SDL window,
//! tests implement it with a recording double.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;

use crate::display_mode::Scale;
use crate::fonts::{Font, FontError};
use crate::input::{ButtonState, CrankReading};
use crate::menu::{MenuError, MenuItem, MenuItemId};

/// Host capabilities consumed by [`App`](crate::app::App).
pub trait Platform {
    /// Load a font by path.
    fn load_font(
        &mut self,
        path: &str,
    ) -> Result<Font, FontError>;

    /// Button readings for the current tick.
    fn button_state(&self) -> ButtonState;

    /// Crank reading for the current tick.
    fn crank(&self) -> CrankReading;

    fn set_inverted(
        &mut self,
        inverted: bool,
    );

    fn set_scale(
        &mut self,
        scale: Scale,
    );

    fn set_flipped(
        &mut self,
        flip_x: bool,
        flip_y: bool,
    );

    /// Fill the whole (logical) screen.
    fn clear(
        &mut self,
        color: BinaryColor,
    );

    /// Draw text with its top-left corner at `origin` (logical pixels).
    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        origin: Point,
    );

    /// Register a system menu item.
    fn add_menu_item(
        &mut self,
        item: MenuItem,
    ) -> Result<MenuItemId, MenuError>;

    /// Current value of a registered item (checkmark 0/1, options index).
    fn menu_item_value(
        &self,
        id: MenuItemId,
    ) -> usize;

    /// Write one line to the console.
    fn log_to_console(
        &mut self,
        message: &str,
    );
}
