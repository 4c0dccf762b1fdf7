use crate::core::error::{Result, TexgenError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Numeric type used for most calculations in the engine
pub type Number = f64;

/// The drawing surface the engine renders into when it owns the pixels itself
pub type GreyImage = image::GrayImage;

/// Seed used to randomise the lattice gradients.
///
/// Seeds are whole numbers. The default seed is `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    pub const ZERO: Self = Self(0);

    pub const fn get(self) -> i64 { self.0 }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self { Self(value) }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self { Self(value.into()) }
}

impl TryFrom<Number> for Seed {
    type Error = TexgenError;

    /// Accepts any finite, integral number that fits in an [i64]
    fn try_from(value: Number) -> Result<Self> {
        let invalid = || TexgenError::InvalidNumericInput { name: "seed", value };

        if !value.is_finite() || value.fract() != 0.0 {
            return Err(invalid());
        }
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range
        if value < i64::MIN as Number || value >= i64::MAX as Number {
            return Err(invalid());
        }
        Ok(Self(value as i64))
    }
}

impl FromStr for Seed {
    type Err = TexgenError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|source| TexgenError::AttributeParse {
                name: "seed".into(),
                value: s.into(),
                source,
            })
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}
