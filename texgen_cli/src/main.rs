//! Command line front end for the texture generator.
//!
//! Arguments are attribute changes in the form `name=value` (`width`, `height`, `seed`), applied in order, just
//! like a form would report them. `--preview` draws the result to the terminal.

use anyhow::{bail, Context};
use image::imageops;
use std::time::Duration;
use texgen_engine::core::types::GreyImage;
use texgen_engine::render::generator::TextureGenerator;
use texgen_engine::render::grid::NoiseGrid;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Characters for the terminal preview, darkest first
const RAMP: &[u8] = b" .:-=+*#%@";
const PREVIEW_COLUMNS: u32 = 64;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut preview = false;
    let mut changes = vec![];
    for arg in std::env::args().skip(1) {
        if arg == "--preview" {
            preview = true;
            continue;
        }
        let Some((name, value)) = arg.split_once('=') else {
            bail!("expected `name=value` or `--preview`, got `{arg}`");
        };
        changes.push((name.to_owned(), value.to_owned()));
    }

    let mut generator = TextureGenerator::new(NoiseGrid::default());
    for (name, value) in &changes {
        let change = generator
            .set_attribute(name, value)
            .with_context(|| format!("couldn't apply `{name}={value}`"))?;
        debug!(?change, "applied change");
    }

    let grid = *generator.grid();
    let stats = generator.last_render();
    info!(
        width = grid.width(),
        height = grid.height(),
        seed = %grid.seed(),
        pixels = stats.num_px,
        gradients = stats.cached_gradients,
        duration = %humantime::format_duration(round_duration(stats.duration)),
        "rendered texture"
    );

    let (min, mean, max) = grey_summary(generator.canvas());
    println!("grey levels: min {min}, mean {mean:.1}, max {max}");

    if preview {
        print!("{}", ascii_preview(generator.canvas()));
    }
    Ok(())
}

/// Drops sub-microsecond noise so the log stays readable
fn round_duration(d: Duration) -> Duration { Duration::from_micros(d.as_micros() as u64) }

fn grey_summary(img: &GreyImage) -> (u8, f64, u8) {
    let (mut min, mut max, mut sum) = (u8::MAX, u8::MIN, 0_u64);
    for px in img.pixels() {
        let [level] = px.0;
        min = min.min(level);
        max = max.max(level);
        sum += level as u64;
    }
    let count = (img.width() as u64 * img.height() as u64).max(1);
    (min, sum as f64 / count as f64, max)
}

/// Downsamples the canvas and maps each grey level onto [RAMP].
///
/// Terminal cells are roughly twice as tall as they are wide, so rows are halved.
fn ascii_preview(img: &GreyImage) -> String {
    let cols = img.width().min(PREVIEW_COLUMNS).max(1);
    let rows = ((img.height() as u64 * cols as u64) / (img.width() as u64 * 2)).max(1) as u32;
    let small = imageops::thumbnail(img, cols, rows);

    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for y in 0..rows {
        for x in 0..cols {
            let [level] = small.get_pixel(x, y).0;
            let idx = level as usize * (RAMP.len() - 1) / u8::MAX as usize;
            out.push(RAMP[idx] as char);
        }
        out.push('\n');
    }
    out
}
