//! Keyboard-emulated buttons.
//!
//! Key presses are collected between ticks and latched once per frame into a
//! [`ButtonState`], so `pushed` / `released` report edges since the previous
//! tick the same way the console does. Key bindings live in
//! [`keys`](crate::keys).

use bounce_common::input::{ButtonState, Buttons};

/// Edge tracking between ticks.
#[derive(Default)]
pub struct ButtonTracker {
    held: Buttons,
    pushed: Buttons,
    released: Buttons,
    latched: ButtonState,
}

impl ButtonTracker {
    pub const fn new() -> Self {
        Self {
            held: Buttons::NONE,
            pushed: Buttons::NONE,
            released: Buttons::NONE,
            latched: ButtonState {
                current: Buttons::NONE,
                pushed: Buttons::NONE,
                released: Buttons::NONE,
            },
        }
    }

    /// Key went down. Auto-repeat must be filtered by the caller.
    pub fn press(
        &mut self,
        button: Buttons,
    ) {
        if !self.held.contains(button) {
            self.held.insert(button);
            self.pushed.insert(button);
        }
    }

    pub fn release(
        &mut self,
        button: Buttons,
    ) {
        if self.held.contains(button) {
            self.held.remove(button);
            self.released.insert(button);
        }
    }

    /// Publish the edges collected since the last latch and start over.
    pub fn latch(&mut self) {
        self.latched = ButtonState {
            current: self.held,
            pushed: self.pushed,
            released: self.released,
        };
        self.pushed = Buttons::NONE;
        self.released = Buttons::NONE;
    }

    /// State published by the last [`latch`](Self::latch).
    #[inline]
    pub const fn state(&self) -> ButtonState { self.latched }
}
