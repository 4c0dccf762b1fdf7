//! Greyscale texture generation from seeded 2D Perlin noise.
//!
//! The noise itself lives in [noise], the pixel pipeline that turns the scalar field into grey levels lives in
//! [render]. The three entry points most callers want are re-exported here: [create_noise], [noise::noise] and
//! [render_grid].

pub mod core;
pub mod noise;
pub mod render;
pub mod shared;

pub use crate::core::error::{Result, TexgenError};
pub use crate::core::types::{Number, Seed};
pub use crate::noise::{create_noise, PerlinNoise};
pub use crate::render::renderer::render_grid;
