use crate::core::targets::NOISE;
use crate::core::types::{Number, Seed};
use crate::noise::gradient::{HashMode, HashedGradients};
use crate::noise::PerlinNoise;
use ::noise::NoiseFn;
use tracing::trace;

/// An immutable view of the noise field for a fixed seed.
///
/// Unlike [PerlinNoise] this keeps no state between samples, so it is `Send + Sync` and can be handed to anything
/// that accepts a [NoiseFn]. Since [NoiseFn::get] can't fail, invalid coordinates produce NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerlinField {
    gradients: HashedGradients,
}

impl PerlinField {
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            gradients: HashedGradients::new(seed.into()),
        }
    }

    pub fn with_mode(self, mode: HashMode) -> Self {
        Self {
            gradients: HashedGradients { mode, ..self.gradients },
        }
    }

    pub fn seed(&self) -> Seed { self.gradients.seed }
}

impl NoiseFn<Number, 2> for PerlinField {
    fn get(&self, [x, y]: [Number; 2]) -> Number {
        PerlinNoise::from_gradients(self.gradients).sample(x, y).unwrap_or_else(|err| {
            trace!(target: NOISE, ?err, "invalid coordinates for noise field");
            Number::NAN
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn field_matches_generator() {
        let field = PerlinField::new(7001);
        let mut perlin = PerlinNoise::new(7001);

        assert_eq!(field.seed(), Seed(7001));
        assert_abs_diff_eq!(field.get([1.3, 2.1]), -0.166117, epsilon = 1e-6);
        assert_eq!(field.get([5.5, 3.7]), perlin.sample(5.5, 3.7).unwrap());
    }

    #[test]
    fn invalid_coordinates_give_nan() {
        assert!(PerlinField::default().get([Number::NAN, 0.0]).is_nan());
    }

    #[test]
    fn usable_as_trait_object() {
        let boxed: Box<dyn NoiseFn<Number, 2> + Send + Sync> = Box::new(PerlinField::new(0));
        assert_eq!(boxed.get([10.0, 20.0]), 0.0);
    }
}
