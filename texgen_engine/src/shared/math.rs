use crate::core::types::Number;

/// Your standard linear interpolation function
///
/// Evaluated as `a + t * (b - a)`, which is the form the noise values are pinned to.
#[inline]
pub fn lerp(a: Number, b: Number, t: Number) -> Number { a + t * (b - a) }

/// Quintic smoothing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`, which hides the lattice in the output.
#[inline]
pub fn fade(t: Number) -> Number { t * t * t * (t * (t * 6.0 - 15.0) + 10.0) }
