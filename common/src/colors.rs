//! Color constants for the 1-bit display.
//!
//! The panel is reflective: `BinaryColor::Off` is bare paper (white) and
//! `BinaryColor::On` is ink (black). Inversion swaps the two at the display
//! target, so the logic always draws black-on-white.

use embedded_graphics::pixelcolor::BinaryColor;

/// Paper. Used to clear the frame.
pub const WHITE: BinaryColor = BinaryColor::Off;

/// Ink. Used for the label text.
pub const BLACK: BinaryColor = BinaryColor::On;
