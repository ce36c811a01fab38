//! Input mapping for D-pad and crank readings.
//!
//! Converts the per-tick button and crank readings into velocity-sign and
//! multiplier changes on the [`MotionState`].
//!
//! # Buttons
//!
//! Buttons only ever *reverse* an axis that moves against the pressed
//! direction. They never start a stopped axis and pressing the direction the
//! label already moves in does nothing.
//!
//! # Crank
//!
//! | Condition | Effect |
//! |-----------|--------|
//! | Docked or zero change | Nothing |
//! | Label stopped | Start at `+start_delta` (forward) or `-start_delta` (backward) |
//! | Forward turn crossed 360 -> 0 | Multipliers up, clamped to the maxima |
//! | Backward turn crossed 0 -> 360 | Multipliers down, clamped to zero |
//!
//! Partial turns inside one revolution never change the speed.

use core::ops::{BitAnd, BitOr, BitOrAssign};

use embedded_graphics::prelude::Point;

use crate::config::{AppConfig, CRANK_REVOLUTION};
use crate::display_mode::DisplayMode;
use crate::motion::MotionState;

// =============================================================================
// Buttons
// =============================================================================

/// Button bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);
    pub const B: Self = Self(1 << 4);
    pub const A: Self = Self(1 << 5);

    /// True if every bit of `other` is set.
    #[inline]
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    #[inline]
    pub const fn insert(
        &mut self,
        other: Self,
    ) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn remove(
        &mut self,
        other: Self,
    ) {
        self.0 &= !other.0;
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    fn bitand(
        self,
        rhs: Self,
    ) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Button readings for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ButtonState {
    /// Held down right now.
    pub current: Buttons,
    /// Went down since the previous tick.
    pub pushed: Buttons,
    /// Went up since the previous tick.
    pub released: Buttons,
}

/// Swap left/right on a flipped X axis and up/down on a flipped Y axis.
///
/// A no-op when `config.flip_buttons` is off.
pub fn compensate_flip(
    pushed: Buttons,
    mode: &DisplayMode,
    config: &AppConfig,
) -> Buttons {
    if !config.flip_buttons {
        return pushed;
    }

    let mut mapped = pushed & (Buttons::A | Buttons::B);

    if mode.flip_x {
        if pushed.contains(Buttons::RIGHT) {
            mapped |= Buttons::LEFT;
        }
        if pushed.contains(Buttons::LEFT) {
            mapped |= Buttons::RIGHT;
        }
    } else {
        mapped |= pushed & (Buttons::LEFT | Buttons::RIGHT);
    }

    if mode.flip_y {
        if pushed.contains(Buttons::DOWN) {
            mapped |= Buttons::UP;
        }
        if pushed.contains(Buttons::UP) {
            mapped |= Buttons::DOWN;
        }
    } else {
        mapped |= pushed & (Buttons::UP | Buttons::DOWN);
    }

    mapped
}

/// Reverse axes that move against the pushed directions.
pub fn apply_buttons(
    motion: &mut MotionState,
    pushed: Buttons,
    mode: &DisplayMode,
    config: &AppConfig,
) {
    let mapped = compensate_flip(pushed, mode, config);
    let v = &mut motion.velocity;

    if (mapped.contains(Buttons::RIGHT) && v.x < 0) || (mapped.contains(Buttons::LEFT) && v.x > 0) {
        v.x = -v.x;
    }
    if (mapped.contains(Buttons::DOWN) && v.y < 0) || (mapped.contains(Buttons::UP) && v.y > 0) {
        v.y = -v.y;
    }
}

// =============================================================================
// Crank
// =============================================================================

/// Crank reading for one tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CrankReading {
    /// Folded into the body, no rotation available.
    pub docked: bool,
    /// Degrees turned since the previous tick (positive = forward).
    pub change: f32,
    /// Absolute angle in `[0, 360)`.
    pub angle: f32,
}

impl CrankReading {
    /// A docked crank at rest.
    pub const DOCKED: Self = Self {
        docked: true,
        change: 0.0,
        angle: 0.0,
    };

    /// An undocked crank at `angle` that turned `change` degrees this tick.
    pub const fn turned(
        angle: f32,
        change: f32,
    ) -> Self {
        Self {
            docked: false,
            change,
            angle,
        }
    }

    /// Forward turn that passed 360 -> 0 this tick.
    ///
    /// Example: angle 5, change 10 -> crossed (was 355).
    /// Example: angle 5, change 2 -> not crossed (was 3).
    #[inline]
    pub fn crossed_forward(&self) -> bool { self.change > 0.0 && self.angle - self.change < 0.0 }

    /// Backward turn that passed 0 -> 360 this tick.
    ///
    /// Example: angle 355, change -10 -> crossed (was 5).
    /// Example: angle 1, change -10 -> not crossed (was 11).
    #[inline]
    pub fn crossed_backward(&self) -> bool { self.change < 0.0 && self.angle - self.change > CRANK_REVOLUTION }
}

impl Default for CrankReading {
    fn default() -> Self { Self::DOCKED }
}

/// Speed effect of one crank tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpeedChange {
    Unchanged,
    Accelerated,
    Decelerated,
}

/// What a handled crank tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CrankOutcome {
    /// The label was stopped and got its start velocity.
    pub started: bool,
    pub speed: SpeedChange,
}

/// Apply one crank reading.
///
/// Returns `None` when the crank is docked or did not move.
#[allow(clippy::float_cmp)]
pub fn apply_crank(
    motion: &mut MotionState,
    crank: &CrankReading,
    config: &AppConfig,
) -> Option<CrankOutcome> {
    if crank.docked || crank.change == 0.0 {
        return None;
    }

    let started = motion.is_stopped();
    if started {
        motion.velocity = if crank.change > 0.0 {
            config.start_delta
        } else {
            -config.start_delta
        };
    }

    let speed = if crank.crossed_forward() {
        motion.multiplier = (motion.multiplier + config.multiplier_delta).component_min(config.multiplier_max);
        SpeedChange::Accelerated
    } else if crank.crossed_backward() {
        motion.multiplier = (motion.multiplier - config.multiplier_delta).component_max(Point::zero());
        SpeedChange::Decelerated
    } else {
        SpeedChange::Unchanged
    };

    Some(CrankOutcome { started, speed })
}
