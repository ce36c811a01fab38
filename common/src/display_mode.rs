//! Display-mode state driven by the system menu.
//!
//! - [`Scale`]: Pixel magnification, only 1, 2 or 4 are representable
//! - [`Flip`]: Axis mirroring selected from the "Flip" options item
//! - [`DisplayMode`]: The combined state consulted by rendering, boundary math
//!   and button mapping

/// Pixel magnification factor.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Scale {
    /// One display pixel per logical pixel.
    #[default]
    X1,
    /// 2x2 display pixels per logical pixel.
    X2,
    /// 4x4 display pixels per logical pixel.
    X4,
}

impl Scale {
    /// Option labels for the "Scale" menu item, in index order.
    pub const OPTIONS: &'static [&'static str] = &["1", "2", "4"];

    /// Scale for a menu option index: 0 -> 1, 1 -> 2, 2 -> 4.
    ///
    /// Out-of-range indices select the largest scale.
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::X1,
            1 => Self::X2,
            _ => Self::X4,
        }
    }

    /// Menu option index of this scale.
    pub const fn index(self) -> usize {
        match self {
            Self::X1 => 0,
            Self::X2 => 1,
            Self::X4 => 2,
        }
    }

    /// Magnification factor (`1 << index`).
    #[inline]
    pub const fn factor(self) -> i32 { 1 << self.index() }
}

/// Axis mirroring.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Flip {
    /// No mirroring.
    #[default]
    None,
    /// Mirror horizontally.
    X,
    /// Mirror vertically.
    Y,
    /// Mirror both axes.
    Both,
}

impl Flip {
    /// Option labels for the "Flip" menu item, in index order.
    pub const OPTIONS: &'static [&'static str] = &["-", "X", "Y", "XY"];

    /// Flip for a menu option index, out-of-range indices select [`Flip::Both`].
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::None,
            1 => Self::X,
            2 => Self::Y,
            _ => Self::Both,
        }
    }

    /// Menu option index of this flip.
    pub const fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::X => 1,
            Self::Y => 2,
            Self::Both => 3,
        }
    }

    /// Odd indices mirror the X axis.
    #[inline]
    pub const fn flip_x(self) -> bool { self.index() % 2 == 1 }

    /// Indices 2 and up mirror the Y axis.
    #[inline]
    pub const fn flip_y(self) -> bool { self.index() >= 2 }
}

/// Current display mode.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DisplayMode {
    pub scale: Scale,
    pub inverted: bool,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl DisplayMode {
    /// Unscaled, non-inverted, unflipped.
    pub const fn new() -> Self {
        Self {
            scale: Scale::X1,
            inverted: false,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Apply a flip selection to both axis flags.
    pub const fn set_flip(
        &mut self,
        flip: Flip,
    ) {
        self.flip_x = flip.flip_x();
        self.flip_y = flip.flip_y();
    }

    /// Flip selection matching the axis flags.
    pub const fn flip(&self) -> Flip {
        match (self.flip_x, self.flip_y) {
            (false, false) => Flip::None,
            (true, false) => Flip::X,
            (false, true) => Flip::Y,
            (true, true) => Flip::Both,
        }
    }
}
