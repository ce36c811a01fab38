//! System font resolution.
//!
//! The console ships a handful of bitmap fonts addressed by path. Each known
//! path maps onto the widest ProFont face whose glyphs fit the console font's
//! cell, so measured text sizes still hold; unknown paths fail the same way a
//! missing font file does on the device.

use core::fmt;

use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_9_POINT, PROFONT_10_POINT, PROFONT_14_POINT};

/// Known system fonts and their faces.
const SYSTEM_FONTS: [(&str, &MonoFont<'static>); 5] = [
    ("/System/Fonts/Asheville-Sans-14-Bold.pft", &PROFONT_10_POINT),
    ("/System/Fonts/Asheville-Sans-14-Light.pft", &PROFONT_10_POINT),
    ("/System/Fonts/Asheville-Sans-24-Light.pft", &PROFONT_14_POINT),
    ("/System/Fonts/Roobert-10-Bold.pft", &PROFONT_10_POINT),
    ("/System/Fonts/Roobert-9-Mono-Condensed.pft", &PROFONT_9_POINT),
];

/// A loaded font.
#[derive(Clone, Copy)]
pub struct Font {
    path: &'static str,
    face: &'static MonoFont<'static>,
}

impl Font {
    /// Path the font was loaded from.
    #[inline]
    pub const fn path(&self) -> &'static str { self.path }

    /// Glyph data.
    #[inline]
    pub const fn face(&self) -> &'static MonoFont<'static> { self.face }
}

impl fmt::Debug for Font {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Font").field("path", &self.path).finish()
    }
}

/// Font loading failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontError {
    /// No font exists at the requested path.
    NotFound,
}

impl fmt::Display for FontError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("file not found"),
        }
    }
}

/// Look up a system font by path.
pub fn resolve(path: &str) -> Result<Font, FontError> {
    SYSTEM_FONTS
        .iter()
        .find(|(known, _)| *known == path)
        .map(|&(path, face)| Font { path, face })
        .ok_or(FontError::NotFound)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Baseline, Text};

    use super::*;
    use crate::colors::BLACK;
    use crate::config::{FONT_PATH, LABEL_HEIGHT, LABEL_TEXT, LABEL_WIDTH};

    #[test]
    fn test_resolve_label_font() {
        let font = resolve(FONT_PATH).unwrap();
        assert_eq!(font.path(), FONT_PATH);
        assert!(font.face().character_size.height > 0);
    }

    #[test]
    fn test_label_fits_measured_size() {
        let font = resolve(FONT_PATH).unwrap();
        let style = MonoTextStyle::new(font.face(), BLACK);
        let size = Text::with_baseline(LABEL_TEXT, Point::zero(), style, Baseline::Top)
            .bounding_box()
            .size;
        assert!(size.width <= LABEL_WIDTH, "label is {} px wide", size.width);
        assert!(size.height <= LABEL_HEIGHT, "label is {} px tall", size.height);
    }

    #[test]
    fn test_resolve_unknown_path() {
        assert_eq!(resolve("/System/Fonts/Missing.pft").unwrap_err(), FontError::NotFound);
        assert_eq!(resolve("").unwrap_err(), FontError::NotFound);
    }

    #[test]
    fn test_font_error_message() {
        assert_eq!(std::format!("{}", FontError::NotFound), "file not found");
    }
}
