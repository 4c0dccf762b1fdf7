//! Numeric guards shared by the coordinate types, the noise generator and the grid.
//!
//! The `Result`-returning checks are the public validation surface and fail fast. The unit-length check is a
//! debug-only assertion for values the engine produces itself.

use crate::core::error::{Result, TexgenError};
use crate::core::types::Number;
use num_traits::ToPrimitive;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-9;

/// Checks that `val` is a finite number, returning it unchanged if so
#[inline(always)]
pub fn number(name: &'static str, val: impl Borrow<Number>) -> Result<Number> {
    let val = *val.borrow();
    if val.is_finite() {
        Ok(val)
    } else {
        Err(TexgenError::InvalidNumericInput { name, value: val })
    }
}

/// Checks both components of a coordinate pair
#[inline(always)]
pub fn pair(x: impl Borrow<Number>, y: impl Borrow<Number>) -> Result<(Number, Number)> {
    Ok((number("x", x)?, number("y", y)?))
}

/// Largest number of pixels a grid may cover, an 8192 × 8192 canvas (64 MiB of grey levels)
pub const MAX_PIXELS: u64 = 8192 * 8192;

/// Checks that a grid dimension is positive and fits in a [u32]
pub fn dimension(name: &'static str, val: i64) -> Result<u32> {
    val.to_u32()
        .filter(|&d| d > 0)
        .ok_or(TexgenError::InvalidDimension { name, value: val })
}

/// Checks that a `width × height` grid stays within [MAX_PIXELS], blaming `name = val` if it doesn't
pub fn pixel_count(name: &'static str, val: i64, width: u32, height: u32) -> Result<()> {
    if width as u64 * height as u64 <= MAX_PIXELS {
        Ok(())
    } else {
        Err(TexgenError::InvalidDimension { name, value: val })
    }
}

#[inline(always)]
#[track_caller]
pub fn unit_vector(x: Number, y: Number) {
    debug_assert_only!();
    assert!(
        ((x * x + y * y) - 1.0).abs() <= EPSILON,
        "should be normalised; vec: ({x}, {y}), len: {}",
        x.hypot(y)
    );
}
