//! Console logging utilities.
//!
//! Messages are formatted into fixed-capacity [`ConsoleLine`]s (no allocation)
//! and handed to [`Platform::log_to_console`](crate::platform::Platform::log_to_console).
//! Hosts that want to show recent lines keep them in a [`ConsoleLog`].
//!
//! # Usage
//!
//! ```ignore
//! console_log!(platform, "x_multiplier={}, y_multiplier={}", mx, my);
//!
//! let mut log = ConsoleLog::new();
//! log.push("Crank change is 10.00, angle is 5.00");
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Console Configuration
// =============================================================================

/// Maximum number of lines kept in a [`ConsoleLog`].
pub const CONSOLE_HISTORY: usize = 8;

/// Maximum characters per console line.
pub const CONSOLE_LINE_LENGTH: usize = 64;

/// One formatted console line.
pub type ConsoleLine = String<CONSOLE_LINE_LENGTH>;

/// Format a message and send it to the platform console.
///
/// Messages longer than [`CONSOLE_LINE_LENGTH`] are cut short.
#[macro_export]
macro_rules! console_log {
    ($platform:expr, $($arg:tt)*) => {{
        use core::fmt::Write as _;
        use $crate::platform::Platform as _;
        let mut line = $crate::console::ConsoleLine::new();
        write!(line, $($arg)*).ok();
        $platform.log_to_console(line.as_str());
    }};
}

// =============================================================================
// Console History Ring Buffer
// =============================================================================

/// Ring buffer of console lines.
///
/// Stores the last [`CONSOLE_HISTORY`] lines; the oldest line is dropped when full.
pub struct ConsoleLog {
    buffer: Deque<ConsoleLine, CONSOLE_HISTORY>,
}

impl ConsoleLog {
    /// Create a new empty console log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line. If the buffer is full, the oldest line is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line = ConsoleLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(ConsoleLine::as_str) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(ConsoleLine::as_str) }

    /// Get number of lines.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for ConsoleLog {
    fn default() -> Self { Self::new() }
}
