//! Platform-agnostic logic for the crank bounce demo.
//!
//! A "Hello World!" label bounces around a 400x240 monochrome display. The
//! D-pad reverses its direction, the crank starts and accelerates it, and a
//! three-item system menu switches inversion, pixel scale and axis flip.
//!
//! - [`config`]: Screen, label and motion tuning constants
//! - [`display_mode`]: Scale / inversion / flip state
//! - [`motion`]: Kinematic state of the label
//! - [`input`]: Button and crank mapping onto the motion state
//! - [`integrator`]: Per-tick movement and wall reflection
//! - [`menu`]: System menu items and their values
//! - [`app`]: Application state, lifecycle events and the update tick
//! - [`platform`]: Capability surface the host provides
//! - [`fonts`]: System font resolution
//! - [`render`]: Display-mode draw target adapter and label drawing
//! - [`console`]: Console line formatting and history buffer
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p bounce-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself is `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod colors;
pub mod config;
pub mod console;
pub mod display_mode;
pub mod fonts;
pub mod input;
pub mod integrator;
pub mod menu;
pub mod motion;
pub mod platform;
pub mod render;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use app::{App, InitError, Lifecycle, SystemEvent};
pub use config::AppConfig;
pub use display_mode::{DisplayMode, Flip, Scale};
pub use platform::Platform;
