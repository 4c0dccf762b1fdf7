//! Attribute-driven texture generation.
//!
//! A form (or anything else) reports changes as `(name, value)` string pairs. The generator parses them, applies
//! them to its grid and re-renders the whole canvas.

use crate::core::error::{Result, TexgenError};
use crate::core::targets::GENERATOR;
use crate::core::types::{GreyImage, Seed};
use crate::render::grid::NoiseGrid;
use crate::render::renderer::{self, RenderStats};
use derivative::Derivative;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, info};

/// The attributes a [TextureGenerator] observes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
    Width,
    Height,
    Seed,
}

/// A single applied attribute change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeChange {
    pub name: Attribute,
    pub old_value: i64,
    pub new_value: i64,
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct TextureGenerator {
    grid: NoiseGrid,
    #[derivative(Debug = "ignore")]
    canvas: GreyImage,
    last_render: RenderStats,
}

impl TextureGenerator {
    /// Creates a generator and renders the initial canvas
    pub fn new(grid: NoiseGrid) -> Self {
        let mut canvas = GreyImage::new(grid.width(), grid.height());
        let last_render = renderer::render(&grid, &mut canvas);
        Self {
            grid,
            canvas,
            last_render,
        }
    }

    pub fn grid(&self) -> &NoiseGrid { &self.grid }
    pub fn canvas(&self) -> &GreyImage { &self.canvas }
    pub fn last_render(&self) -> RenderStats { self.last_render }

    /// Applies a named attribute change and re-renders the canvas.
    ///
    /// Nothing changes if the name is unknown, the value isn't an integer, or the value is out of range.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<AttributeChange> {
        let attribute = Attribute::from_str(name.trim()).map_err(|_| TexgenError::UnknownAttribute { name: name.into() })?;
        let new_value = value
            .trim()
            .parse::<i64>()
            .map_err(|source| TexgenError::AttributeParse {
                name: name.into(),
                value: value.into(),
                source,
            })?;

        self.apply(attribute, new_value)
    }

    /// Applies an already parsed attribute change and re-renders the canvas
    pub fn apply(&mut self, attribute: Attribute, new_value: i64) -> Result<AttributeChange> {
        let mut grid = self.grid;
        let old_value = match attribute {
            Attribute::Width => {
                let old = grid.width();
                grid.set_width(new_value)?;
                old.into()
            }
            Attribute::Height => {
                let old = grid.height();
                grid.set_height(new_value)?;
                old.into()
            }
            Attribute::Seed => {
                let old = grid.seed();
                grid.set_seed(Seed(new_value));
                old.get()
            }
        };

        let change = AttributeChange {
            name: attribute,
            old_value,
            new_value,
        };
        info!(
            target: GENERATOR,
            attribute = %change.name,
            old = change.old_value,
            new = change.new_value,
            "attribute changed"
        );

        self.grid = grid;
        self.rerender();
        Ok(change)
    }

    /// Re-renders the full canvas from the current grid
    pub fn rerender(&mut self) -> RenderStats {
        if self.canvas.dimensions() != (self.grid.width(), self.grid.height()) {
            debug!(target: GENERATOR, width = self.grid.width(), height = self.grid.height(), "resizing canvas");
            self.canvas = GreyImage::new(self.grid.width(), self.grid.height());
        }
        self.last_render = renderer::render(&self.grid, &mut self.canvas);
        self.last_render
    }
}

impl Default for TextureGenerator {
    fn default() -> Self { Self::new(NoiseGrid::default()) }
}
