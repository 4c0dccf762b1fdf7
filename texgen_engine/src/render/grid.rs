use crate::core::error::{Result, TexgenError};
use crate::core::types::{Number, Seed};
use crate::shared::validate;
use getset::CopyGetters;
use nonzero::nonzero;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Multiplier shrinking pixel coordinates into noise space.
///
/// Smaller values zoom in on the field, giving larger features.
pub const NOISE_SCALE: Number = 0.05;

/// Serialisable description of a texture to render
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOpts {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub seed: Seed,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            width: nonzero!(400_u32),
            height: nonzero!(400_u32),
            seed: Seed::ZERO,
        }
    }
}

/// A grid of pixels with a noise seed.
///
/// Dimensions are always positive. Setters validate before assigning, so a rejected value leaves the grid as it
/// was.
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq)]
pub struct NoiseGrid {
    #[get_copy = "pub"]
    width: u32,
    #[get_copy = "pub"]
    height: u32,
    #[get_copy = "pub"]
    seed: Seed,
}

impl NoiseGrid {
    pub fn new(width: i64, height: i64, seed: impl Into<Seed>) -> Result<Self> {
        let w = validate::dimension("width", width)?;
        let h = validate::dimension("height", height)?;
        validate::pixel_count("width", width, w, h)?;
        Ok(Self {
            width: w,
            height: h,
            seed: seed.into(),
        })
    }

    pub fn set_width(&mut self, width: i64) -> Result<()> {
        let w = validate::dimension("width", width)?;
        validate::pixel_count("width", width, w, self.height)?;
        self.width = w;
        Ok(())
    }

    pub fn set_height(&mut self, height: i64) -> Result<()> {
        let h = validate::dimension("height", height)?;
        validate::pixel_count("height", height, self.width, h)?;
        self.height = h;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: impl Into<Seed>) { self.seed = seed.into(); }

    pub fn scale(&self) -> Number { NOISE_SCALE }

    /// Total number of pixels in the grid
    pub fn len(&self) -> usize { self.width as usize * self.height as usize }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Maps a pixel coordinate into noise space
    pub fn noise_coords(&self, px: u32, py: u32) -> (Number, Number) {
        (px as Number * self.scale(), py as Number * self.scale())
    }
}

impl Default for NoiseGrid {
    fn default() -> Self {
        let opts = GridOpts::default();
        Self {
            width: opts.width.get(),
            height: opts.height.get(),
            seed: opts.seed,
        }
    }
}

impl TryFrom<GridOpts> for NoiseGrid {
    type Error = TexgenError;

    fn try_from(opts: GridOpts) -> Result<Self> {
        Self::new(opts.width.get().into(), opts.height.get().into(), opts.seed)
    }
}

impl From<NoiseGrid> for GridOpts {
    fn from(grid: NoiseGrid) -> Self {
        // Both dimensions are validated as non-zero on the way in
        Self {
            width: NonZeroU32::new(grid.width).unwrap_or(NonZeroU32::MIN),
            height: NonZeroU32::new(grid.height).unwrap_or(NonZeroU32::MIN),
            seed: grid.seed,
        }
    }
}
