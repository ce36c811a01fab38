//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` common crate avoids.

use std::time::Duration;

use bounce_common::config::FRAMES_PER_SECOND;

/// Target frame time (~30 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND as u64);
