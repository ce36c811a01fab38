//! Display, label and motion configuration.
//!
//! All tuning values are compile-time constants with validation assertions.
//! [`AppConfig::DEFAULT`] bundles them for the application state so tests
//! can build variations without touching the constants.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (1-bit LCD: 400x240).
pub const SCREEN_WIDTH: u32 = 400;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Target refresh rate of the update tick.
pub const FRAMES_PER_SECOND: u32 = 30;

// =============================================================================
// Label Configuration
// =============================================================================

/// Text of the bouncing label.
pub const LABEL_TEXT: &str = "Hello World!";

/// Measured width of [`LABEL_TEXT`] in the system font.
pub const LABEL_WIDTH: u32 = 86;

/// Measured height of [`LABEL_TEXT`] in the system font.
pub const LABEL_HEIGHT: u32 = 16;

/// System font used for the label.
pub const FONT_PATH: &str = "/System/Fonts/Asheville-Sans-14-Bold.pft";

const _: () = assert!(LABEL_WIDTH * 4 <= SCREEN_WIDTH);
const _: () = assert!(LABEL_HEIGHT * 4 <= SCREEN_HEIGHT);

// =============================================================================
// Motion Configuration
// =============================================================================

/// Initial horizontal step when the crank starts a stopped label.
pub const X_DELTA: i32 = 2;

/// Initial vertical step when the crank starts a stopped label.
pub const Y_DELTA: i32 = 1;

/// Horizontal multiplier change per full crank revolution.
pub const X_MULTIPLIER_DELTA: i32 = 2;

/// Horizontal multiplier ceiling.
pub const X_MULTIPLIER_MAX: i32 = 6;

/// Vertical multiplier change per full crank revolution.
pub const Y_MULTIPLIER_DELTA: i32 = 1;

/// Vertical multiplier ceiling.
pub const Y_MULTIPLIER_MAX: i32 = 3;

const _: () = assert!(X_MULTIPLIER_DELTA > 0 && X_MULTIPLIER_DELTA <= X_MULTIPLIER_MAX);
const _: () = assert!(Y_MULTIPLIER_DELTA > 0 && Y_MULTIPLIER_DELTA <= Y_MULTIPLIER_MAX);

/// When the view is flipped, swap D-pad directions so a press still moves
/// the label the way the physical button points.
pub const FLIP_BUTTONS: bool = cfg!(not(feature = "raw-flip-buttons"));

/// Degrees in one crank revolution.
pub const CRANK_REVOLUTION: f32 = 360.0;

// =============================================================================
// Application Configuration
// =============================================================================

/// Tuning values consumed by the motion controller.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AppConfig {
    /// Physical screen size.
    pub screen: Size,
    /// Label bounding box at scale 1.
    pub label: Size,
    /// Label text.
    pub label_text: &'static str,
    /// Font path resolved at init.
    pub font_path: &'static str,
    /// Velocity given to a stopped label by the crank (negated for backward turns).
    pub start_delta: Point,
    /// Multiplier step per wrap crossing.
    pub multiplier_delta: Point,
    /// Multiplier ceilings.
    pub multiplier_max: Point,
    /// Swap D-pad bits on flipped axes.
    pub flip_buttons: bool,
}

impl AppConfig {
    /// Configuration built from the crate constants.
    pub const DEFAULT: Self = Self {
        screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        label: Size::new(LABEL_WIDTH, LABEL_HEIGHT),
        label_text: LABEL_TEXT,
        font_path: FONT_PATH,
        start_delta: Point::new(X_DELTA, Y_DELTA),
        multiplier_delta: Point::new(X_MULTIPLIER_DELTA, Y_MULTIPLIER_DELTA),
        multiplier_max: Point::new(X_MULTIPLIER_MAX, Y_MULTIPLIER_MAX),
        flip_buttons: FLIP_BUTTONS,
    };
}

impl Default for AppConfig {
    fn default() -> Self { Self::DEFAULT }
}
