//! Crank Bounce simulator for desktop platforms.
//!
//! Runs the bounce demo in an SDL window using the
//! embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! - **Arrow keys**: D-pad
//! - **Z / X**: B / A buttons
//! - **Mouse wheel**: Turn the crank, one notch per wheel event
//! - **C**: Dock / undock the crank
//! - **I**: Menu "Invert"
//! - **S**: Menu "Scale" (next option)
//! - **F**: Menu "Flip" (next option)
//! - **L**: Console overlay
//! - **Escape** or closing the window: Terminate

mod buttons;
mod crank;
mod keys;
mod overlay;
mod platform;
mod timing;

use std::thread;
use std::time::Instant;

use bounce_common::{App, AppConfig, InitError, SystemEvent, console_log};
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::Keycode;

use crate::keys::{KeyAction, action_for_key, key_code};
use crate::platform::SimPlatform;
use crate::timing::FRAME_TIME;

fn main() {
    let mut platform = SimPlatform::new();
    let mut app = App::new(AppConfig::DEFAULT);

    // The window has to be drawn once before it yields events
    platform.present();

    dispatch(&mut app, &mut platform, SystemEvent::Init);

    loop {
        let frame_start = Instant::now();

        for ev in platform.events() {
            match ev {
                SimulatorEvent::Quit => dispatch(&mut app, &mut platform, SystemEvent::Terminate),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if !repeat {
                        handle_key_down(&mut app, &mut platform, keycode);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => handle_key_up(&mut app, &mut platform, keycode),
                SimulatorEvent::MouseWheel { scroll_delta, .. } => platform.crank.notch(scroll_delta.y),
                _ => {}
            }
        }

        if app.is_terminated() {
            return;
        }

        platform.latch_inputs();
        app.update(&mut platform);
        platform.present();

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn handle_key_down(
    app: &mut App,
    platform: &mut SimPlatform,
    keycode: Keycode,
) {
    let name = keycode.name();
    match action_for_key(&name) {
        Some(KeyAction::Button(button)) => platform.buttons.press(button),
        Some(KeyAction::DockCrank) => {
            platform.crank.toggle_dock();
            let docked = platform.crank.is_docked();
            console_log!(platform, "Crank {}", if docked { "docked" } else { "undocked" });
        }
        Some(KeyAction::Menu(title)) => activate_menu_item(app, platform, title),
        Some(KeyAction::ToggleOverlay) => platform.show_overlay = !platform.show_overlay,
        Some(KeyAction::Terminate) => dispatch(app, platform, SystemEvent::Terminate),
        None => {
            if let Some(code) = key_code(&name) {
                dispatch(app, platform, SystemEvent::KeyPressed(code));
            }
        }
    }
}

fn handle_key_up(
    app: &mut App,
    platform: &mut SimPlatform,
    keycode: Keycode,
) {
    let name = keycode.name();
    match action_for_key(&name) {
        Some(KeyAction::Button(button)) => platform.buttons.release(button),
        Some(_) => {}
        None => {
            if let Some(code) = key_code(&name) {
                dispatch(app, platform, SystemEvent::KeyReleased(code));
            }
        }
    }
}

/// Change a menu item the way the system menu would, then run its callback.
fn activate_menu_item(
    app: &mut App,
    platform: &mut SimPlatform,
    title: &str,
) {
    if let Some(id) = platform.menu.find(title) {
        platform.menu.activate(id);
        app.on_menu_item(id, platform);
    }
}

fn dispatch(
    app: &mut App,
    platform: &mut SimPlatform,
    event: SystemEvent,
) {
    if let Err(err) = app.handle_event(event, platform) {
        fatal(&err);
    }
}

/// Report a fatal error and exit.
fn fatal(err: &InitError) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
