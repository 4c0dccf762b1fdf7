use crate::core::error::Result;
use crate::core::targets::RENDER;
use crate::core::types::{GreyImage, Number, Seed};
use crate::noise::PerlinNoise;
use crate::render::grid::NoiseGrid;
use crate::render::pixel::{GreyLevel, GridPixel};
use crate::render::sink::{FnSink, PixelSink};
use itertools::Itertools;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// How many pixels were written to the sink
    pub num_px: usize,
    /// How many distinct lattice gradients were computed and cached
    pub cached_gradients: usize,
    pub duration: Duration,
}

/// Renders `width × height` pixels of noise with the given seed into `sink`.
///
/// All arguments are validated before the sink sees a single pixel.
///
/// # Errors
/// - [crate::TexgenError::InvalidDimension] if either dimension isn't a positive `u32`, or the grid would exceed
///   [crate::shared::validate::MAX_PIXELS]
/// - [crate::TexgenError::InvalidNumericInput] if the seed isn't a finite whole number
pub fn render_grid(width: i64, height: i64, seed: Number, sink: &mut impl PixelSink) -> Result<RenderStats> {
    let seed = Seed::try_from(seed)?;
    let grid = NoiseGrid::new(width, height, seed)?;
    Ok(render(&grid, sink))
}

/// Like [render_grid], but hands each pixel to a `(x, y, level)` callback
pub fn render_fn(
    width: i64,
    height: i64,
    seed: Number,
    func: impl FnMut(u32, u32, GreyLevel),
) -> Result<RenderStats> {
    render_grid(width, height, seed, &mut FnSink(func))
}

/// Renders the whole grid into `sink`.
///
/// One generator is created per render and reused for every pixel. Pixels are visited column by column (outer loop
/// over `x`, inner over `y`).
pub fn render(grid: &NoiseGrid, sink: &mut impl PixelSink) -> RenderStats {
    debug!(
        target: RENDER,
        width = grid.width(),
        height = grid.height(),
        seed = %grid.seed(),
        "rendering noise grid"
    );

    let start = Instant::now();
    let mut perlin = PerlinNoise::new(grid.seed()).cached();
    let mut num_px = 0;

    for (x, y) in (0..grid.width()).cartesian_product(0..grid.height()) {
        let (nx, ny) = grid.noise_coords(x, y);
        // Scaled pixel coordinates are always finite
        let value = match perlin.sample(nx, ny) {
            Ok(value) => value,
            Err(err) => {
                debug_assert!(false, "pixel ({x}, {y}) mapped to invalid noise coordinates: {err}");
                warn!(target: RENDER, ?err, x, y, "invalid noise coordinates, rendering pixel as zero");
                0.0
            }
        };
        sink.fill_pixel(&GridPixel::new(x, y, GreyLevel::from_noise(value)));
        num_px += 1;
    }

    let stats = RenderStats {
        num_px,
        cached_gradients: perlin.gradients().len(),
        duration: start.elapsed(),
    };
    debug!(target: RENDER, ?stats, "finished rendering noise grid");
    stats
}

/// Renders the grid into a freshly allocated image of the same size
pub fn render_image(grid: &NoiseGrid) -> GreyImage {
    let mut img = GreyImage::new(grid.width(), grid.height());
    render(grid, &mut img);
    img
}
