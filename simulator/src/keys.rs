//! Keyboard bindings.
//!
//! Keys are matched by their SDL key name, so the table does not depend on
//! how a given `sdl2` release spells its `Keycode` constants.
//!
//! | Key | Action |
//! |-----|--------|
//! | Arrows | D-pad |
//! | Z / X | B / A |
//! | C | Dock / undock the crank |
//! | I | Menu "Invert" |
//! | S | Menu "Scale" (next option) |
//! | F | Menu "Flip" (next option) |
//! | L | Console overlay |
//! | Escape | Terminate |

use bounce_common::input::Buttons;

/// What a bound key does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    /// Held as a console button.
    Button(Buttons),
    DockCrank,
    /// Advance the menu item with this title.
    Menu(&'static str),
    ToggleOverlay,
    Terminate,
}

/// Action bound to the key called `name`, if any.
pub fn action_for_key(name: &str) -> Option<KeyAction> {
    let action = match name {
        "Left" => KeyAction::Button(Buttons::LEFT),
        "Right" => KeyAction::Button(Buttons::RIGHT),
        "Up" => KeyAction::Button(Buttons::UP),
        "Down" => KeyAction::Button(Buttons::DOWN),
        "Z" => KeyAction::Button(Buttons::B),
        "X" => KeyAction::Button(Buttons::A),
        "C" => KeyAction::DockCrank,
        "I" => KeyAction::Menu("Invert"),
        "S" => KeyAction::Menu("Scale"),
        "F" => KeyAction::Menu("Flip"),
        "L" => KeyAction::ToggleOverlay,
        "Escape" => KeyAction::Terminate,
        _ => return None,
    };
    Some(action)
}

/// Lowercase ASCII code for an unbound single-character key.
pub fn key_code(name: &str) -> Option<u32> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Some(u32::from(c.to_ascii_lowercase())),
        _ => None,
    }
}
