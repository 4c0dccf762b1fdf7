//! Validated coordinate pairs.
//!
//! [GridComponent] is the shared storage; the kind parameter decides what a pair *means*. A [Vector] can be
//! dotted with another vector, a [Point] is a lattice corner and exists mostly so the two don't get mixed up.

use crate::core::error::Result;
use crate::core::types::Number;
use crate::shared::validate;
use glam::DVec2;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

/// Marker for what a [GridComponent] represents
pub trait ComponentKind: Copy + Clone + Debug + Send + Sync + 'static {
    /// Formats the pair for display, e.g. `P(1, 2)`
    fn fmt_pair(x: Number, y: Number, f: &mut Formatter<'_>) -> std::fmt::Result;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {}
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {}

impl ComponentKind for VectorKind {
    fn fmt_pair(x: Number, y: Number, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "V[{x}, {y}]") }
}

impl ComponentKind for PointKind {
    fn fmt_pair(x: Number, y: Number, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "P({x}, {y})") }
}

/// A pair of finite numbers `(x, y)`.
///
/// Every constructor and setter checks its input. A failed set leaves the pair untouched.
#[derive(Copy, Clone, PartialEq)]
pub struct GridComponent<K: ComponentKind> {
    inner: DVec2,
    _kind: PhantomData<K>,
}

pub type Vector = GridComponent<VectorKind>;
pub type Point = GridComponent<PointKind>;

impl<K: ComponentKind> GridComponent<K> {
    pub const ZERO: Self = Self::new_unchecked(0.0, 0.0);

    pub fn new(x: Number, y: Number) -> Result<Self> {
        let (x, y) = validate::pair(x, y)?;
        Ok(Self::new_unchecked(x, y))
    }

    /// For values the engine has derived from already validated input
    pub(crate) const fn new_unchecked(x: Number, y: Number) -> Self {
        Self {
            inner: DVec2::new(x, y),
            _kind: PhantomData,
        }
    }

    pub fn x(&self) -> Number { self.inner.x }
    pub fn y(&self) -> Number { self.inner.y }

    pub fn set_x(&mut self, x: Number) -> Result<()> {
        self.inner.x = validate::number("x", x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: Number) -> Result<()> {
        self.inner.y = validate::number("y", y)?;
        Ok(())
    }

    pub fn to_array(&self) -> [Number; 2] { self.inner.to_array() }
}

impl Vector {
    /// Computes `x * other.x + y * other.y`
    pub fn dot(&self, other: &Vector) -> Number { self.inner.dot(other.inner) }
}

impl Point {
    /// The integer lattice corner at or below the given coordinates
    pub fn floor(x: Number, y: Number) -> Result<Self> {
        let (x, y) = validate::pair(x, y)?;
        Ok(Self::new_unchecked(x.floor(), y.floor()))
    }

    /// Offsets the point by whole lattice steps
    pub fn offset(&self, dx: Number, dy: Number) -> Self { Self::new_unchecked(self.x() + dx, self.y() + dy) }
}

impl<K: ComponentKind> From<GridComponent<K>> for DVec2 {
    fn from(value: GridComponent<K>) -> Self { value.inner }
}

impl<K: ComponentKind> TryFrom<DVec2> for GridComponent<K> {
    type Error = crate::core::error::TexgenError;

    fn try_from(value: DVec2) -> Result<Self> { Self::new(value.x, value.y) }
}

impl<K: ComponentKind> Debug for GridComponent<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { K::fmt_pair(self.x(), self.y(), f) }
}

impl<K: ComponentKind> Display for GridComponent<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { K::fmt_pair(self.x(), self.y(), f) }
}
