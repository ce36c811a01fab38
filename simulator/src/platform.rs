//! SDL-window platform for the simulator.
//!
//! The physical framebuffer is a 400x240 [`SimulatorDisplay`]; all app
//! drawing goes through a [`ModeTarget`] carrying the current display mode.
//! Console lines are echoed to stdout and kept for the on-screen overlay.

use bounce_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bounce_common::console::ConsoleLog;
use bounce_common::fonts::{self, Font, FontError};
use bounce_common::input::{ButtonState, CrankReading};
use bounce_common::menu::{Menu, MenuError, MenuItem, MenuItemId};
use bounce_common::render::{ModeTarget, draw_label};
use bounce_common::{DisplayMode, Platform, Scale};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::buttons::ButtonTracker;
use crate::crank::CrankEmulator;
use crate::overlay::draw_overlay;

pub struct SimPlatform {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
    mode: DisplayMode,
    pub buttons: ButtonTracker,
    pub crank: CrankEmulator,
    pub menu: Menu,
    pub console: ConsoleLog,
    pub show_overlay: bool,
}

impl SimPlatform {
    pub fn new() -> Self {
        let display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new()
            .scale(2)
            .theme(BinaryColorTheme::LcdWhite)
            .build();
        let window = Window::new("Crank Bounce Sim", &output_settings);

        Self {
            display,
            window,
            mode: DisplayMode::new(),
            buttons: ButtonTracker::new(),
            crank: CrankEmulator::new(),
            menu: Menu::new(),
            console: ConsoleLog::new(),
            show_overlay: false,
        }
    }

    /// Drain pending window events.
    pub fn events(&mut self) -> Vec<SimulatorEvent> { self.window.events().collect() }

    /// Latch this tick's button and crank readings.
    pub fn latch_inputs(&mut self) {
        self.buttons.latch();
        self.crank.latch();
    }

    /// Draw the overlay (when enabled) and push the framebuffer to the window.
    pub fn present(&mut self) {
        if self.show_overlay {
            draw_overlay(&mut self.display, &self.menu, &self.console, self.crank.is_docked());
        }
        self.window.update(&self.display);
    }
}

impl Platform for SimPlatform {
    fn load_font(
        &mut self,
        path: &str,
    ) -> Result<Font, FontError> {
        fonts::resolve(path)
    }

    fn button_state(&self) -> ButtonState { self.buttons.state() }

    fn crank(&self) -> CrankReading { self.crank.reading() }

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
        ModeTarget::new(&mut self.display, self.mode).clear(color).ok();
    }

    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        origin: Point,
    ) {
        let mut target = ModeTarget::new(&mut self.display, self.mode);
        draw_label(&mut target, font, text, origin);
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
        println!("{message}");
        self.console.push(message);
    }
}
