//! Kinematic state of the bouncing label.
//!
//! All coordinates are logical pixels: at scale `s` the visible area is the
//! physical screen divided by `s`, and the label keeps its unscaled size.

use embedded_graphics::prelude::{Point, Size};

use crate::config::AppConfig;
use crate::display_mode::Scale;

/// Velocity after startup and after every display-mode change: stopped.
pub const START_VELOCITY: Point = Point::zero();

/// Multipliers after startup: no speed until the crank completes a turn.
pub const START_MULTIPLIER: Point = Point::zero();

/// Position, velocity and speed multipliers of the label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MotionState {
    /// Top-left corner of the label.
    pub position: Point,
    /// Signed step per tick on each axis.
    pub velocity: Point,
    /// Non-negative per-axis speed factor.
    pub multiplier: Point,
    /// Label bounding box.
    pub label_size: Size,
}

impl MotionState {
    /// Centered, stopped label at scale 1.
    pub const fn new(config: &AppConfig) -> Self {
        Self {
            position: centered_position(Scale::X1, config),
            velocity: START_VELOCITY,
            multiplier: START_MULTIPLIER,
            label_size: config.label,
        }
    }

    /// Re-center for `scale` and drop back to the start velocity.
    ///
    /// Multipliers are kept.
    pub const fn recenter(
        &mut self,
        scale: Scale,
        config: &AppConfig,
    ) {
        self.position = centered_position(scale, config);
        self.velocity = START_VELOCITY;
    }

    /// True when neither axis is moving.
    #[inline]
    pub const fn is_stopped(&self) -> bool { self.velocity.x == 0 && self.velocity.y == 0 }
}

/// Label position that centers it on screen at `scale`.
///
/// `x = (width - label_width * s) / 2 / s`, same for `y`.
pub const fn centered_position(
    scale: Scale,
    config: &AppConfig,
) -> Point {
    let s = scale.factor();
    let x = (config.screen.width as i32 - config.label.width as i32 * s) / 2 / s;
    let y = (config.screen.height as i32 - config.label.height as i32 * s) / 2 / s;
    Point::new(x, y)
}
