//! Per-tick movement and wall reflection.
//!
//! The label moves by `velocity * multiplier` on each axis, then each axis is
//! tested once against the scaled screen edges. The test runs on the moved
//! position, so a label can be drawn one tick past an edge before it turns.

use crate::config::AppConfig;
use crate::display_mode::Scale;
use crate::motion::MotionState;

/// Axes whose velocity was reversed by a tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub const fn any(self) -> bool { self.x || self.y }
}

/// Advance one tick and reflect off the walls.
pub fn step(
    motion: &mut MotionState,
    scale: Scale,
    config: &AppConfig,
) -> Reflection {
    motion.position += motion.velocity.component_mul(motion.multiplier);

    let s = scale.factor();
    let p = motion.position;
    let max_x = config.screen.width as i32 - motion.label_size.width as i32 * s;
    let max_y = config.screen.height as i32 - motion.label_size.height as i32 * s;

    let reflection = Reflection {
        x: p.x < 0 || p.x * s > max_x,
        y: p.y < 0 || p.y * s > max_y,
    };

    if reflection.x {
        motion.velocity.x = -motion.velocity.x;
    }
    if reflection.y {
        motion.velocity.y = -motion.velocity.y;
    }

    reflection
}
