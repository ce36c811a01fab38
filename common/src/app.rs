//! Application state, lifecycle events and the per-tick update.
//!
//! [`App`] owns every piece of mutable state (motion, display mode, menu
//! handles, font) and is handed the [`Platform`] on each call, so nothing
//! lives in globals and tests start from a fresh value.
//!
//! # Lifecycle
//!
//! | Event | Effect |
//! |-------|--------|
//! | `Init` | Load font, reset properties, register menu, start updates |
//! | `Resume` | Re-initialize |
//! | `Terminate` | Stop for good |
//! | `Pause` / `Lock` / `Unlock` / `LowPower` | Logged only |
//! | `KeyPressed` / `KeyReleased` | Logged with the key code |
//!
//! Menu callbacks re-initialize directly instead of dispatching a `Resume`
//! through [`App::handle_event`].

use core::fmt;
use core::panic::Location;

use crate::colors::WHITE;
use crate::config::AppConfig;
use crate::console_log;
use crate::display_mode::{DisplayMode, Flip, Scale};
use crate::fonts::{Font, FontError};
use crate::input::{self, SpeedChange};
use crate::integrator;
use crate::menu::{MenuError, MenuItem, MenuItemId};
use crate::motion::MotionState;
use crate::platform::Platform;

// =============================================================================
// Events and Lifecycle
// =============================================================================

/// System event delivered to [`App::handle_event`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SystemEvent {
    Init,
    Lock,
    Unlock,
    Pause,
    Resume,
    Terminate,
    /// Simulator keyboard key went down (key code).
    KeyPressed(u32),
    /// Simulator keyboard key went up (key code).
    KeyReleased(u32),
    LowPower,
}

/// Whether the update tick does any work.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Lifecycle {
    /// Waiting for `Init`.
    #[default]
    Uninitialized,
    /// Updates run every tick.
    Running,
    /// Terminated, updates never run again.
    Terminated,
}

// =============================================================================
// Errors
// =============================================================================

/// What failed during `Init`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InitErrorKind {
    Font { path: &'static str, source: FontError },
    Menu(MenuError),
}

/// Fatal initialization failure with the source location that raised it.
#[derive(Clone, Copy, Debug)]
pub struct InitError {
    pub kind: InitErrorKind,
    pub location: &'static Location<'static>,
}

impl InitError {
    #[track_caller]
    fn font(
        path: &'static str,
        source: FontError,
    ) -> Self {
        Self {
            kind: InitErrorKind::Font { path, source },
            location: Location::caller(),
        }
    }

    #[track_caller]
    fn menu(source: MenuError) -> Self {
        Self {
            kind: InitErrorKind::Menu(source),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{} ", self.location.file(), self.location.line())?;
        match self.kind {
            InitErrorKind::Font { path, source } => write!(f, "Couldn't load font {path}: {source}"),
            InitErrorKind::Menu(source) => write!(f, "Couldn't add menu item: {source}"),
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Handles of the three registered menu items.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuHandles {
    pub invert: MenuItemId,
    pub scale: MenuItemId,
    pub flip: MenuItemId,
}

/// The whole application.
pub struct App {
    config: AppConfig,
    motion: MotionState,
    mode: DisplayMode,
    font: Option<Font>,
    menu: Option<MenuHandles>,
    lifecycle: Lifecycle,
}

impl App {
    pub const fn new(config: AppConfig) -> Self {
        Self {
            motion: MotionState::new(&config),
            config,
            mode: DisplayMode::new(),
            font: None,
            menu: None,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    #[inline]
    pub const fn motion(&self) -> &MotionState { &self.motion }

    #[inline]
    pub const fn mode(&self) -> &DisplayMode { &self.mode }

    #[inline]
    pub const fn lifecycle(&self) -> Lifecycle { self.lifecycle }

    #[inline]
    pub const fn menu_handles(&self) -> Option<MenuHandles> { self.menu }

    #[inline]
    pub const fn is_terminated(&self) -> bool { matches!(self.lifecycle, Lifecycle::Terminated) }

    /// Handle a system event.
    ///
    /// Only `Init` can fail; the error is fatal and the caller reports it
    /// through its error channel.
    pub fn handle_event<P: Platform>(
        &mut self,
        event: SystemEvent,
        platform: &mut P,
    ) -> Result<(), InitError> {
        match event {
            SystemEvent::Init => self.init(platform)?,
            SystemEvent::Resume => {
                self.reinitialize(platform);
                console_log!(platform, "Resume");
            }
            SystemEvent::Pause | SystemEvent::Lock | SystemEvent::Unlock | SystemEvent::LowPower => {
                console_log!(platform, "{:?}", event);
            }
            SystemEvent::Terminate => {
                self.lifecycle = Lifecycle::Terminated;
                console_log!(platform, "Terminate");
            }
            SystemEvent::KeyPressed(code) => console_log!(platform, "Key pressed: {code}"),
            SystemEvent::KeyReleased(code) => console_log!(platform, "Key released: {code}"),
        }
        Ok(())
    }

    fn init<P: Platform>(
        &mut self,
        platform: &mut P,
    ) -> Result<(), InitError> {
        if self.lifecycle != Lifecycle::Uninitialized {
            console_log!(platform, "Init ignored: already initialized");
            return Ok(());
        }

        let path = self.config.font_path;
        let font = platform.load_font(path).map_err(|source| InitError::font(path, source))?;
        self.font = Some(font);

        self.initialize_properties(platform);
        self.menu = Some(self.initialize_menu(platform)?);

        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    fn initialize_properties<P: Platform>(
        &mut self,
        platform: &mut P,
    ) {
        self.motion = MotionState::new(&self.config);
        self.mode = DisplayMode::new();
        self.push_mode(platform);
    }

    fn initialize_menu<P: Platform>(
        &mut self,
        platform: &mut P,
    ) -> Result<MenuHandles, InitError> {
        let invert = platform
            .add_menu_item(MenuItem::checkmark("Invert", self.mode.inverted))
            .map_err(InitError::menu)?;
        let scale = platform
            .add_menu_item(MenuItem::options("Scale", Scale::OPTIONS))
            .map_err(InitError::menu)?;
        let flip = platform
            .add_menu_item(MenuItem::options("Flip", Flip::OPTIONS))
            .map_err(InitError::menu)?;
        Ok(MenuHandles { invert, scale, flip })
    }

    /// Push the display mode to the platform again after a resume or a
    /// display-mode change.
    ///
    /// Has no effect before `Init` or after `Terminate`.
    fn reinitialize<P: Platform>(
        &mut self,
        platform: &mut P,
    ) {
        if self.lifecycle == Lifecycle::Running {
            self.push_mode(platform);
        }
    }

    fn push_mode<P: Platform>(
        &self,
        platform: &mut P,
    ) {
        platform.set_inverted(self.mode.inverted);
        platform.set_scale(self.mode.scale);
        platform.set_flipped(self.mode.flip_x, self.mode.flip_y);
    }

    // =========================================================================
    // Menu Callbacks
    // =========================================================================

    /// Menu callback: the user changed item `id`.
    pub fn on_menu_item<P: Platform>(
        &mut self,
        id: MenuItemId,
        platform: &mut P,
    ) {
        let Some(handles) = self.menu else {
            return;
        };
        let value = platform.menu_item_value(id);

        if id == handles.invert {
            self.set_inverted(value != 0, platform);
        } else if id == handles.scale {
            self.set_scale(Scale::from_index(value), platform);
        } else if id == handles.flip {
            self.set_flip(Flip::from_index(value), platform);
        } else {
            console_log!(platform, "Unknown menu item {}", id.index());
        }
    }

    pub fn set_inverted<P: Platform>(
        &mut self,
        inverted: bool,
        platform: &mut P,
    ) {
        self.mode.inverted = inverted;
        console_log!(platform, "Invert: {inverted}");
        self.display_mode_changed(platform);
    }

    pub fn set_scale<P: Platform>(
        &mut self,
        scale: Scale,
        platform: &mut P,
    ) {
        self.mode.scale = scale;
        console_log!(platform, "Scale: {}", scale.factor());
        self.display_mode_changed(platform);
    }

    pub fn set_flip<P: Platform>(
        &mut self,
        flip: Flip,
        platform: &mut P,
    ) {
        self.mode.set_flip(flip);
        console_log!(platform, "Flip: {}", Flip::OPTIONS[flip.index()]);
        self.display_mode_changed(platform);
    }

    /// Recenter for the new scale, then hand the mode to the platform.
    fn display_mode_changed<P: Platform>(
        &mut self,
        platform: &mut P,
    ) {
        self.motion.recenter(self.mode.scale, &self.config);
        self.reinitialize(platform);
    }

    // =========================================================================
    // Update Tick
    // =========================================================================

    /// Per-tick update: input, movement, redraw.
    ///
    /// Always returns `true` (the display needs updating).
    pub fn update<P: Platform>(
        &mut self,
        platform: &mut P,
    ) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return true;
        }
        let Some(font) = self.font else {
            return true;
        };

        let buttons = platform.button_state();
        input::apply_buttons(&mut self.motion, buttons.pushed, &self.mode, &self.config);

        let crank = platform.crank();
        if let Some(outcome) = input::apply_crank(&mut self.motion, &crank, &self.config) {
            let m = self.motion.multiplier;
            if outcome.started {
                let v = self.motion.velocity;
                console_log!(platform, "Started with dx={}, dy={}", v.x, v.y);
            }
            match outcome.speed {
                SpeedChange::Accelerated => console_log!(platform, "Speed up"),
                SpeedChange::Decelerated => console_log!(platform, "Slow down"),
                SpeedChange::Unchanged => {}
            }
            console_log!(platform, "Crank change is {:.2}, angle is {:.2}", crank.change, crank.angle);
            console_log!(platform, "x_multiplier={}, y_multiplier={}", m.x, m.y);
        }

        let hit = integrator::step(&mut self.motion, self.mode.scale, &self.config);
        if hit.any() {
            let p = self.motion.position;
            console_log!(platform, "Bounce at ({}, {}): x={}, y={}", p.x, p.y, hit.x, hit.y);
        }

        platform.clear(WHITE);
        platform.draw_text(font, self.config.label_text, self.motion.position);
        true
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::input::{Buttons, CrankReading};
    use crate::motion::START_VELOCITY;
    use crate::testing::RecordingPlatform;

    fn running() -> (App, RecordingPlatform) { running_with(AppConfig::DEFAULT) }

    fn running_with(config: AppConfig) -> (App, RecordingPlatform) {
        let mut app = App::new(config);
        let mut platform = RecordingPlatform::new();
        app.handle_event(SystemEvent::Init, &mut platform).unwrap();
        (app, platform)
    }

    fn select(
        app: &mut App,
        platform: &mut RecordingPlatform,
        id: MenuItemId,
        value: usize,
    ) {
        platform.menu.set_value(id, value);
        app.on_menu_item(id, platform);
    }

    // === Lifecycle ===

    #[test]
    fn test_init_registers_menu_and_runs() {
        let (app, platform) = running();
        assert_eq!(app.lifecycle(), Lifecycle::Running);
        assert_eq!(app.motion().position, Point::new(157, 112));
        assert!(app.motion().is_stopped());

        let titles: Vec<_> = platform.menu.iter().map(|(_, item)| item.title).collect();
        assert_eq!(titles, ["Invert", "Scale", "Flip"]);
        let handles = app.menu_handles().unwrap();
        assert_eq!(platform.menu.value(handles.invert), 0);
    }

    #[test]
    fn test_missing_font_is_fatal() {
        let mut app = App::new(AppConfig::DEFAULT);
        let mut platform = RecordingPlatform::new();
        platform.fonts_missing = true;

        let err = app.handle_event(SystemEvent::Init, &mut platform).unwrap_err();
        assert!(matches!(err.kind, InitErrorKind::Font { source: FontError::NotFound, .. }));
        assert!(err.location.file().ends_with("app.rs"));

        let message = err.to_string();
        assert!(message.contains("Couldn't load font /System/Fonts/Asheville-Sans-14-Bold.pft: file not found"));
        assert_eq!(app.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn test_second_init_is_ignored() {
        let (mut app, mut platform) = running();
        app.handle_event(SystemEvent::Init, &mut platform).unwrap();
        assert_eq!(platform.menu.len(), 3);
    }

    #[test]
    fn test_update_before_init_does_nothing() {
        let mut app = App::new(AppConfig::DEFAULT);
        let mut platform = RecordingPlatform::new();
        assert!(app.update(&mut platform));
        assert!(platform.draws.is_empty());
        assert!(platform.clears.is_empty());
    }

    #[test]
    fn test_pause_lock_unlock_are_logged_only() {
        let (mut app, mut platform) = running();

        for event in [SystemEvent::Pause, SystemEvent::Lock, SystemEvent::Unlock, SystemEvent::LowPower] {
            app.handle_event(event, &mut platform).unwrap();
            assert_eq!(app.lifecycle(), Lifecycle::Running);
        }
        assert_eq!(platform.console[platform.console.len() - 4..], ["Pause", "Lock", "Unlock", "LowPower"]);

        app.update(&mut platform);
        assert_eq!(platform.draws.len(), 1);
    }

    #[test]
    fn test_resume_pushes_display_mode() {
        let (mut app, mut platform) = running();
        app.set_scale(Scale::X4, &mut platform);
        platform.mode = DisplayMode::new();

        app.handle_event(SystemEvent::Resume, &mut platform).unwrap();
        assert_eq!(platform.mode.scale, Scale::X4);
        assert_eq!(platform.console.last().map(String::as_str), Some("Resume"));
    }

    #[test]
    fn test_resume_before_init_does_not_start_updates() {
        let mut app = App::new(AppConfig::DEFAULT);
        let mut platform = RecordingPlatform::new();
        app.handle_event(SystemEvent::Resume, &mut platform).unwrap();
        assert_eq!(app.lifecycle(), Lifecycle::Uninitialized);

        app.update(&mut platform);
        assert!(platform.draws.is_empty());
    }

    #[test]
    fn test_terminate_is_final() {
        let (mut app, mut platform) = running();
        app.handle_event(SystemEvent::Terminate, &mut platform).unwrap();
        app.handle_event(SystemEvent::Resume, &mut platform).unwrap();
        assert!(app.is_terminated());
        assert!(app.update(&mut platform));
        assert!(platform.draws.is_empty());
    }

    #[test]
    fn test_key_events_are_logged() {
        let (mut app, mut platform) = running();
        app.handle_event(SystemEvent::KeyReleased(97), &mut platform).unwrap();
        assert_eq!(platform.console.last().map(String::as_str), Some("Key released: 97"));
    }

    // === Update Tick ===

    #[test]
    fn test_update_draws_label() {
        let (mut app, mut platform) = running();
        assert!(app.update(&mut platform));

        assert_eq!(platform.clears, [WHITE]);
        let draw = &platform.draws[0];
        assert_eq!(draw.text, "Hello World!");
        assert_eq!(draw.font_path, AppConfig::DEFAULT.font_path);
        assert_eq!(draw.origin, Point::new(157, 112));
    }

    #[test]
    fn test_crank_turn_starts_and_accelerates() {
        let (mut app, mut platform) = running();

        platform.crank = CrankReading::turned(5.0, 10.0);
        app.update(&mut platform);

        assert_eq!(app.motion().velocity, Point::new(2, 1));
        assert_eq!(app.motion().multiplier, Point::new(2, 1));
        assert_eq!(platform.draws[0].origin, Point::new(161, 113));
        assert!(platform.console.iter().any(|l| l == "Started with dx=2, dy=1"));
        assert!(platform.console.iter().any(|l| l == "Speed up"));
        assert!(platform.console.iter().any(|l| l == "Crank change is 10.00, angle is 5.00"));
        assert!(platform.console.iter().any(|l| l == "x_multiplier=2, y_multiplier=1"));
    }

    #[test]
    fn test_backward_crossing_logs_slow_down() {
        let (mut app, mut platform) = running();
        app.motion.velocity = Point::new(2, 1);
        app.motion.multiplier = Point::new(2, 1);

        platform.crank = CrankReading::turned(355.0, -10.0);
        app.update(&mut platform);

        assert_eq!(app.motion().multiplier, Point::zero());
        assert!(platform.console.iter().any(|l| l == "Slow down"));
        assert!(platform.console.iter().all(|l| !l.starts_with("Started")));
    }

    #[test]
    fn test_wall_bounce_is_logged() {
        let (mut app, mut platform) = running();
        app.motion.position = Point::new(313, 112);
        app.motion.velocity = Point::new(2, 1);
        app.motion.multiplier = Point::new(2, 1);

        app.update(&mut platform);

        assert_eq!(app.motion().position, Point::new(317, 113));
        assert_eq!(app.motion().velocity, Point::new(-2, 1));
        assert_eq!(platform.console.last().map(String::as_str), Some("Bounce at (317, 113): x=true, y=false"));
        assert_eq!(platform.draws[0].origin, Point::new(317, 113));
    }

    #[test]
    fn test_docked_crank_leaves_label_still() {
        let (mut app, mut platform) = running();
        for _ in 0..5 {
            app.update(&mut platform);
        }
        assert_eq!(app.motion().position, Point::new(157, 112));
        assert!(platform.console.iter().all(|l| !l.starts_with("Crank")));
    }

    #[test]
    fn test_button_reverses_after_crank_start() {
        let (mut app, mut platform) = running();
        platform.crank = CrankReading::turned(5.0, 10.0);
        app.update(&mut platform);

        platform.crank = CrankReading::DOCKED;
        platform.buttons.pushed = Buttons::LEFT;
        app.update(&mut platform);
        assert_eq!(app.motion().velocity, Point::new(-2, 1));
    }

    // === Menu ===

    #[test]
    fn test_scale_menu_recenters() {
        let (mut app, mut platform) = running();
        platform.crank = CrankReading::turned(5.0, 10.0);
        app.update(&mut platform);

        let handles = app.menu_handles().unwrap();
        select(&mut app, &mut platform, handles.scale, 1);

        assert_eq!(app.mode().scale, Scale::X2);
        assert_eq!(platform.mode.scale, Scale::X2);
        assert_eq!(app.motion().position, Point::new(57, 52));
        assert_eq!(app.motion().velocity, START_VELOCITY);
        assert_eq!(app.lifecycle(), Lifecycle::Running);
    }

    #[test]
    fn test_flip_menu_sets_both_axes() {
        let (mut app, mut platform) = running_with(AppConfig {
            flip_buttons: true,
            ..AppConfig::DEFAULT
        });
        let handles = app.menu_handles().unwrap();
        select(&mut app, &mut platform, handles.flip, 3);

        assert!(app.mode().flip_x && app.mode().flip_y);
        assert!(platform.mode.flip_x && platform.mode.flip_y);

        app.motion.velocity = Point::new(2, 1);
        platform.buttons.pushed = Buttons::RIGHT;
        app.update(&mut platform);
        assert_eq!(app.motion().velocity.x, -2);
    }

    #[test]
    fn test_invert_menu_toggles() {
        let (mut app, mut platform) = running();
        let handles = app.menu_handles().unwrap();

        select(&mut app, &mut platform, handles.invert, 1);
        assert!(app.mode().inverted);
        assert!(platform.mode.inverted);
        assert_eq!(app.motion().position, Point::new(157, 112));

        select(&mut app, &mut platform, handles.invert, 0);
        assert!(!app.mode().inverted);
    }

    #[test]
    fn test_scale_menu_clamps_to_largest() {
        let (mut app, mut platform) = running();
        let handles = app.menu_handles().unwrap();
        select(&mut app, &mut platform, handles.scale, 7);
        assert_eq!(app.mode().scale, Scale::X4);
        assert_eq!(platform.mode.scale, Scale::X4);
        assert_eq!(app.motion().position, Point::new(7, 22));
    }

    #[test]
    fn test_menu_before_init_is_ignored() {
        let mut app = App::new(AppConfig::DEFAULT);
        let mut platform = RecordingPlatform::new();
        let id = platform.menu.add(MenuItem::checkmark("Invert", true)).unwrap();
        app.on_menu_item(id, &mut platform);
        assert!(!app.mode().inverted);
    }
}
