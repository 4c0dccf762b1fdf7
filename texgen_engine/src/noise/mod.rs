use crate::core::error::Result;
use crate::core::targets::NOISE;
use crate::core::types::{Number, Seed};
use crate::shared::grid_component::{Point, Vector};
use crate::shared::math::{fade, lerp};
use crate::shared::validate;
use tracing::trace;

pub mod field;
pub mod gradient;

use self::gradient::{CachedGradients, GradientSource, HashMode, HashedGradients};

/// Seeded 2D Perlin noise.
///
/// Sampling is a pure function of `(x, y, seed)`. The generator additionally keeps the last successfully computed
/// value around, see [PerlinNoise::value]. A failed sample never touches it.
#[derive(Clone, Debug)]
pub struct PerlinNoise<G: GradientSource = HashedGradients> {
    gradients: G,
    last_value: Option<Number>,
}

/// Creates a generator from a seed given as a plain number.
///
/// `None` means the default seed `0`. NaN, infinities and fractional seeds are rejected.
pub fn create_noise(seed: Option<Number>) -> Result<PerlinNoise> {
    let seed = seed.map(Seed::try_from).transpose()?.unwrap_or_default();
    Ok(PerlinNoise::new(seed))
}

/// One-shot evaluation of the noise field at `(x, y)`
pub fn noise(x: Number, y: Number, seed: Seed) -> Result<Number> { PerlinNoise::new(seed).sample(x, y) }

impl PerlinNoise {
    pub fn new(seed: impl Into<Seed>) -> Self { Self::from_gradients(HashedGradients::new(seed.into())) }

    pub fn with_mode(seed: impl Into<Seed>, mode: HashMode) -> Self {
        Self::from_gradients(HashedGradients {
            seed: seed.into(),
            mode,
        })
    }

    /// Creates a generator and immediately samples it at `(x, y)`, so [PerlinNoise::value] is populated
    pub fn new_at(seed: impl Into<Seed>, x: Number, y: Number) -> Result<Self> {
        let mut noise = Self::new(seed);
        noise.sample(x, y)?;
        Ok(noise)
    }

    /// Wraps this generator's gradients in a memoising cache.
    ///
    /// The cache only ever grows, by one entry per distinct lattice corner sampled. Long-lived generators that
    /// wander over a large area can release it with `gradients_mut().clear()`.
    pub fn cached(self) -> PerlinNoise<CachedGradients> {
        PerlinNoise {
            gradients: CachedGradients::new(self.gradients),
            last_value: self.last_value,
        }
    }
}

impl<G: GradientSource> PerlinNoise<G> {
    pub fn from_gradients(gradients: G) -> Self {
        Self {
            gradients,
            last_value: None,
        }
    }

    pub fn seed(&self) -> Seed { self.gradients.seed() }

    /// The value computed by the last successful [PerlinNoise::sample], if any
    pub fn value(&self) -> Option<Number> { self.last_value }

    pub fn gradients(&self) -> &G { &self.gradients }
    pub fn gradients_mut(&mut self) -> &mut G { &mut self.gradients }

    /// Samples the noise at `(x, y)`, returning a value nominally in `[-1, 1]`.
    ///
    /// Integer coordinates always land on a lattice corner and give exactly `0`.
    ///
    /// # Errors
    /// Fails with [crate::TexgenError::InvalidNumericInput] if either coordinate is NaN or infinite.
    pub fn sample(&mut self, x: Number, y: Number) -> Result<Number> {
        let (x, y) = match validate::pair(x, y) {
            Ok(pair) => pair,
            Err(err) => {
                trace!(target: NOISE, ?err, x, y, "rejected noise sample");
                return Err(err);
            }
        };

        let value = self.compute(x, y);
        self.last_value = Some(value);
        Ok(value)
    }

    fn compute(&mut self, x: Number, y: Number) -> Number {
        // Lattice corners, ordered [00, 10, 01, 11]
        let p00 = Point::new_unchecked(x.floor(), y.floor());
        let p11 = p00.offset(1.0, 1.0);
        let corners = [p00, p00.offset(1.0, 0.0), p00.offset(0.0, 1.0), p11];
        let gradients = corners.map(|c| self.gradients.gradient(&c));

        // Offsets from the corners to the sample point, built from the two diagonal corners
        let (dx0, dy0) = (x - p00.x(), y - p00.y());
        let (dx1, dy1) = (x - p11.x(), y - p11.y());
        let offsets = [(dx0, dy0), (dx1, dy0), (dx0, dy1), (dx1, dy1)].map(|(dx, dy)| Vector::new_unchecked(dx, dy));

        let [n00, n10, n01, n11] = [0, 1, 2, 3].map(|i| gradients[i].dot(&offsets[i]));

        let fade_x = fade(dx0);
        let fade_y = fade(dy0);

        let ix0 = lerp(n00, n10, fade_x);
        let ix1 = lerp(n01, n11, fade_x);
        lerp(ix0, ix1, fade_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TexgenError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_seed_values() {
        let mut perlin = create_noise(None).unwrap();
        assert_eq!(perlin.seed(), Seed::ZERO);

        for (x, y, expected) in [
            (1.3, 2.1, 0.093744),
            (5.5, 3.7, -0.177968),
            (0.0, 0.5, -0.056895),
            (0.5, 0.5, 0.006776),
            (0.5, 1.0, -0.126147),
        ] {
            assert_abs_diff_eq!(perlin.sample(x, y).unwrap(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn lattice_points_are_zero() {
        for seed in [0, 4783, 6829, 7001, 24815821] {
            let mut perlin = PerlinNoise::new(seed);
            assert_eq!(perlin.sample(10.0, 20.0).unwrap(), 0.0);
            assert_eq!(perlin.sample(100.0, 200.0).unwrap(), 0.0);
            assert_eq!(perlin.sample(-3.0, 0.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn value_tracks_last_sample() {
        let mut perlin = PerlinNoise::new(0);
        assert_eq!(perlin.value(), None);

        perlin.sample(1.3, 2.1).unwrap();
        assert_abs_diff_eq!(perlin.value().unwrap(), 0.093744, epsilon = 1e-6);

        perlin.sample(3.5, 2.1).unwrap();
        assert_abs_diff_eq!(perlin.value().unwrap(), 0.22739, epsilon = 1e-5);
    }

    #[test]
    fn failed_sample_keeps_last_value() {
        let mut perlin = PerlinNoise::new(0);
        let good = perlin.sample(1.3, 2.1).unwrap();

        assert!(matches!(
            perlin.sample(Number::NAN, 2.0),
            Err(TexgenError::InvalidNumericInput { name: "x", .. })
        ));
        assert!(matches!(
            perlin.sample(1.0, Number::INFINITY),
            Err(TexgenError::InvalidNumericInput { name: "y", .. })
        ));
        assert_eq!(perlin.value(), Some(good));
    }

    #[test]
    fn create_noise_validates_seed() {
        assert_eq!(create_noise(Some(4783.0)).unwrap().seed(), Seed(4783));
        assert!(matches!(
            create_noise(Some(Number::NAN)),
            Err(TexgenError::InvalidNumericInput { name: "seed", .. })
        ));
        assert!(create_noise(Some(0.5)).is_err());
    }

    #[test]
    fn new_at_samples_immediately() {
        let perlin = PerlinNoise::new_at(4783, 1.3, 2.1).unwrap();
        assert_abs_diff_eq!(perlin.value().unwrap(), 0.028378, epsilon = 1e-6);

        assert!(PerlinNoise::new_at(0, Number::NAN, 0.0).is_err());
    }

    #[test]
    fn cached_generator_matches_uncached() {
        let mut plain = PerlinNoise::new(6829);
        let mut cached = PerlinNoise::new(6829).cached();

        for i in 0..200 {
            let (x, y) = (i as Number * 0.173, i as Number * -0.091);
            assert_eq!(plain.sample(x, y).unwrap(), cached.sample(x, y).unwrap());
        }
        assert!(!cached.gradients().is_empty());
    }

    #[test]
    fn clearing_cache_keeps_output() {
        let mut cached = PerlinNoise::new(6829).cached();
        let first = cached.sample(2.5, 7.25).unwrap();
        cached.sample(12.5, -3.75).unwrap();
        assert_eq!(cached.gradients().len(), 8);

        cached.gradients_mut().clear();
        assert!(cached.gradients().is_empty());
        assert_eq!(cached.sample(2.5, 7.25).unwrap(), first);
        assert_eq!(cached.gradients().len(), 4);
    }

    #[test]
    fn one_shot_noise() {
        assert_abs_diff_eq!(noise(5.5, 3.7, Seed(4783)).unwrap(), -0.223627, epsilon = 1e-6);
        assert!(noise(Number::NAN, 0.0, Seed::ZERO).is_err());
    }
}
