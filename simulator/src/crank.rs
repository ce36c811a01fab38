//! Mouse-wheel-emulated crank.
//!
//! Each wheel event turns the crank by one notch of [`DEGREES_PER_NOTCH`].
//! Rotation collected during a frame is latched once per tick into a
//! [`CrankReading`] with the accumulated change and the wrapped angle.

use bounce_common::config::CRANK_REVOLUTION;
use bounce_common::input::CrankReading;

/// Rotation per wheel notch.
pub const DEGREES_PER_NOTCH: f32 = 15.0;

pub struct CrankEmulator {
    docked: bool,
    angle: f32,
    pending: f32,
    latched: CrankReading,
}

impl CrankEmulator {
    /// Undocked at 0 degrees.
    pub const fn new() -> Self {
        Self {
            docked: false,
            angle: 0.0,
            pending: 0.0,
            latched: CrankReading::turned(0.0, 0.0),
        }
    }

    /// Turn by `degrees` (positive = forward). Ignored while docked.
    pub fn rotate(
        &mut self,
        degrees: f32,
    ) {
        if !self.docked {
            self.pending += degrees;
        }
    }

    /// One wheel event: a notch in the direction of `delta`.
    pub fn notch(
        &mut self,
        delta: i32,
    ) {
        self.rotate(delta.signum() as f32 * DEGREES_PER_NOTCH);
    }

    pub fn toggle_dock(&mut self) {
        self.docked = !self.docked;
        self.pending = 0.0;
    }

    #[inline]
    pub const fn is_docked(&self) -> bool { self.docked }

    /// Publish the rotation collected since the last latch.
    pub fn latch(&mut self) {
        self.angle = (self.angle + self.pending).rem_euclid(CRANK_REVOLUTION);
        self.latched = CrankReading {
            docked: self.docked,
            change: self.pending,
            angle: self.angle,
        };
        self.pending = 0.0;
    }

    /// Reading published by the last [`latch`](Self::latch).
    #[inline]
    pub const fn reading(&self) -> CrankReading { self.latched }
}

impl Default for CrankEmulator {
    fn default() -> Self { Self::new() }
}
