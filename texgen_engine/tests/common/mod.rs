use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use texgen_engine::core::types::Number;

pub type TestRng = SmallRng;

/// Fixed so that failures are reproducible
pub const RNG_SEED: u64 = 0x5eed_1e55;

pub fn rng() -> TestRng { TestRng::seed_from_u64(RNG_SEED) }

/// A random coordinate pair with both components in `-range..range`
pub fn coords(rng: &mut TestRng, range: Number) -> (Number, Number) {
    (rng.gen_range(-range..range), rng.gen_range(-range..range))
}
