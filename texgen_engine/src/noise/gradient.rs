//! Pseudo-random unit gradients for the lattice corners.
//!
//! A corner `(x, y)` and a seed are hashed into an angle `θ ∈ [0, 2π]`, and the gradient is `(cos θ, sin θ)`.
//! The hash is the integer mix from the "randomGradient" reference implementation of Perlin noise:
//!
//! ```text
//! h = x * 374761393 + y * 668265263 + seed * 961748941
//! h = (h ^ (h >> 13)) * 1274126177
//! h = h ^ (h >> 16)
//! u = (h & 0x7fffffff) / 0x7fffffff
//! ```
//!
//! Where exactly the 32-bit wraparound happens changes the output, see [HashMode].

use crate::core::targets::GRADIENT;
use crate::core::types::{Number, Seed};
use crate::shared::grid_component::{Point, Vector};
use crate::shared::validate;
use std::collections::HashMap;
use std::f64::consts::TAU;
use tracing::trace;

const PRIME_X: i32 = 374_761_393;
const PRIME_Y: i32 = 668_265_263;
const PRIME_SEED: i32 = 961_748_941;
const AVALANCHE: i32 = 1_274_126_177;
const MASK: i32 = 0x7fff_ffff;

/// Where the integer hash wraps to 32 bits
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashMode {
    /// Bitwise steps operate on wrapped `i32`s, but both multiplications are carried out in `f64` first.
    ///
    /// This reproduces the published gradient tables exactly, including for seeds large enough that the
    /// products lose precision.
    #[default]
    Reference,
    /// Every step is plain `i32` wrapping arithmetic.
    ///
    /// Agrees with [HashMode::Reference] to about `1e-6` for small corners and seeds, and diverges once the
    /// products exceed 2^53.
    Wrapping32,
}

/// Wraps a number to a signed 32-bit integer, modulo 2^32 (truncating any fraction).
///
/// Non-finite values map to `0`.
fn wrap_i32(val: Number) -> i32 {
    if !val.is_finite() {
        return 0;
    }
    // `%` is exact for floats, so this stays in `(-2^32, 2^32)` without losing bits
    let rem = val.trunc() % 4_294_967_296.0;
    rem as i64 as u32 as i32
}

/// Hashes a corner and seed into a value in `[0, 1]`
pub fn hash_unit(x: Number, y: Number, seed: Seed, mode: HashMode) -> Number {
    let h = match mode {
        HashMode::Reference => {
            let h = wrap_i32(x * PRIME_X as Number + y * PRIME_Y as Number + seed.get() as Number * PRIME_SEED as Number);
            let h = h ^ (h >> 13);
            let h = wrap_i32(h as Number * AVALANCHE as Number);
            h ^ (h >> 16)
        }
        HashMode::Wrapping32 => {
            let h = wrap_i32(x)
                .wrapping_mul(PRIME_X)
                .wrapping_add(wrap_i32(y).wrapping_mul(PRIME_Y))
                .wrapping_add((seed.get() as i32).wrapping_mul(PRIME_SEED));
            let h = (h ^ (h >> 13)).wrapping_mul(AVALANCHE);
            h ^ (h >> 16)
        }
    };

    (h & MASK) as Number / MASK as Number
}

/// A unit vector assigned to a lattice corner
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGradient {
    corner: Point,
    vector: Vector,
}

impl RandomGradient {
    pub fn new(corner: Point, seed: Seed) -> Self { Self::with_mode(corner, seed, HashMode::default()) }

    pub fn with_mode(corner: Point, seed: Seed, mode: HashMode) -> Self {
        let angle = hash_unit(corner.x(), corner.y(), seed, mode) * TAU;
        let (gx, gy) = (angle.cos(), angle.sin());
        validate::unit_vector(gx, gy);

        Self {
            corner,
            vector: Vector::new_unchecked(gx, gy),
        }
    }

    pub fn corner(&self) -> Point { self.corner }
    pub fn vector(&self) -> Vector { self.vector }
    pub fn dot(&self, other: &Vector) -> Number { self.vector.dot(other) }
}

/// The gradient at integer corner `(ix, iy)`, as `(gx, gy)` with `gx² + gy² = 1`
pub fn gradient(ix: i64, iy: i64, seed: Seed) -> (Number, Number) {
    let g = RandomGradient::new(Point::new_unchecked(ix as Number, iy as Number), seed).vector();
    (g.x(), g.y())
}

/// Something that can hand out the gradient for a lattice corner.
///
/// Takes `&mut self` so that implementations are free to memoise.
pub trait GradientSource {
    fn seed(&self) -> Seed;
    fn gradient(&mut self, corner: &Point) -> Vector;
}

/// Hashes every corner on every request
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HashedGradients {
    pub seed: Seed,
    pub mode: HashMode,
}

impl HashedGradients {
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            mode: HashMode::default(),
        }
    }
}

impl GradientSource for HashedGradients {
    fn seed(&self) -> Seed { self.seed }

    fn gradient(&mut self, corner: &Point) -> Vector { RandomGradient::with_mode(*corner, self.seed, self.mode).vector() }
}

/// Remembers every gradient the wrapped source has produced.
///
/// The hash is pure, so caching is invisible in the output. Corners are keyed by their bit patterns.
#[derive(Clone, Debug, Default)]
pub struct CachedGradients<S: GradientSource = HashedGradients> {
    source: S,
    cache: HashMap<(u64, u64), Vector>,
}

impl<S: GradientSource> CachedGradients<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// How many corners are currently cached
    pub fn len(&self) -> usize { self.cache.len() }
    pub fn is_empty(&self) -> bool { self.cache.is_empty() }

    pub fn clear(&mut self) {
        trace!(target: GRADIENT, count = self.cache.len(), "clearing gradient cache");
        self.cache.clear();
    }
}

impl<S: GradientSource> GradientSource for CachedGradients<S> {
    fn seed(&self) -> Seed { self.source.seed() }

    fn gradient(&mut self, corner: &Point) -> Vector {
        let key = (corner.x().to_bits(), corner.y().to_bits());
        let source = &mut self.source;
        *self.cache.entry(key).or_insert_with(|| source.gradient(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_gradient(ix: i64, iy: i64, seed: i64, expected: (Number, Number)) {
        let (gx, gy) = gradient(ix, iy, Seed(seed));
        assert_abs_diff_eq!(gx, expected.0, epsilon = 1e-9);
        assert_abs_diff_eq!(gy, expected.1, epsilon = 1e-9);
    }

    #[test]
    fn origin_gradient_points_along_x() {
        assert_eq!(gradient(0, 0, Seed::ZERO), (1.0, 0.0));

        let g = RandomGradient::new(Point::ZERO, Seed::ZERO);
        assert_eq!(g.corner(), Point::ZERO);
        assert_eq!(g.dot(&Vector::new_unchecked(2.0, 5.0)), 2.0);
    }

    #[test]
    fn reference_gradients_default_seed() {
        assert_gradient(1, 2, 0, (0.101279206, 0.994858041));
        assert_gradient(2, 2, 0, (0.007886916, -0.999968898));
        assert_gradient(1, 3, 0, (0.937233865, -0.348701422));
        assert_gradient(6, 4, 0, (-0.722342956, 0.691534998));
        assert_gradient(101, 201, 0, (0.263549536, -0.964645864));
    }

    #[test]
    fn reference_gradients_with_seed() {
        fn close(ix: i64, iy: i64, seed: i64, expected: (Number, Number)) {
            let (gx, gy) = gradient(ix, iy, Seed(seed));
            assert_abs_diff_eq!(gx, expected.0, epsilon = 1e-6);
            assert_abs_diff_eq!(gy, expected.1, epsilon = 1e-6);
        }
        close(0, 0, 1, (0.332503, 0.943102));
        close(0, 0, 337837103, (0.976169, -0.21701));
        close(6, 4, 337837103, (-0.999511, -0.031285));
        close(101, 201, 337837103, (-0.990532, -0.137282));
    }

    #[test]
    fn gradients_are_unit_length() {
        for ix in -20..20 {
            for iy in -20..20 {
                for seed in [0, 1, 4783, -99, 24815821] {
                    let (gx, gy) = gradient(ix, iy, Seed(seed));
                    assert_abs_diff_eq!(gx * gx + gy * gy, 1.0, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn wrapping_mode_agrees_for_small_inputs() {
        let corner = Point::new_unchecked(1.0, 2.0);
        let reference = RandomGradient::with_mode(corner, Seed::ZERO, HashMode::Reference).vector();
        let wrapping = RandomGradient::with_mode(corner, Seed::ZERO, HashMode::Wrapping32).vector();
        assert_abs_diff_eq!(reference.x(), wrapping.x(), epsilon = 1e-5);
        assert_abs_diff_eq!(reference.y(), wrapping.y(), epsilon = 1e-5);
    }

    #[test]
    fn wrap_matches_modular_arithmetic() {
        assert_eq!(wrap_i32(0.0), 0);
        assert_eq!(wrap_i32(-1.0), -1);
        assert_eq!(wrap_i32(2_147_483_648.0), i32::MIN);
        assert_eq!(wrap_i32(4_294_967_297.0), 1);
        assert_eq!(wrap_i32(-4_294_967_297.0), -1);
        assert_eq!(wrap_i32(7.9), 7);
        assert_eq!(wrap_i32(Number::NAN), 0);
    }

    #[test]
    fn cache_is_transparent() {
        let mut hashed = HashedGradients::new(Seed(4783));
        let mut cached = CachedGradients::new(hashed);

        for (x, y) in [(0.0, 0.0), (1.0, 2.0), (0.0, 0.0), (-3.0, 7.0), (1.0, 2.0)] {
            let corner = Point::new_unchecked(x, y);
            assert_eq!(cached.gradient(&corner), hashed.gradient(&corner));
        }
        assert_eq!(cached.len(), 3);
        assert_eq!(cached.seed(), Seed(4783));

        cached.clear();
        assert!(cached.is_empty());
    }
}
