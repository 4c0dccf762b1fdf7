use crate::core::types::Number;
use std::fmt::{Display, Formatter};

/// An 8-bit grey level.
///
/// Displays as the CSS colour string `rgb(l, l, l)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GreyLevel(pub u8);

impl GreyLevel {
    pub const BLACK: Self = Self(u8::MIN);
    pub const WHITE: Self = Self(u8::MAX);

    /// Maps a noise value from `[-1, 1]` onto `[0, 255]` as `floor((v + 1) * 128)`.
    ///
    /// Values outside the nominal range are clamped, NaN maps to black.
    pub fn from_noise(value: Number) -> Self {
        let level = ((value + 1.0) * 128.0).floor();
        // `as` saturates, and sends NaN to 0
        Self(level as u8)
    }

    pub fn get(self) -> u8 { self.0 }
}

impl Display for GreyLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "rgb({0}, {0}, {0})", self.0) }
}

impl From<GreyLevel> for image::Luma<u8> {
    fn from(level: GreyLevel) -> Self { image::Luma([level.0]) }
}

/// A single unit-sized pixel on the grid, with its colour
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPixel {
    pub x: u32,
    pub y: u32,
    pub colour: GreyLevel,
}

impl GridPixel {
    pub fn new(x: u32, y: u32, colour: GreyLevel) -> Self { Self { x, y, colour } }

    pub fn width(&self) -> u32 { 1 }
    pub fn height(&self) -> u32 { 1 }
}
