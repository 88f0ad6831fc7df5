//! Two-term dot products of 2-D vectors.
//!
//! Same fused-or-not question as [`madd`](crate::madd), in the shape
//! `a.x * b.x + a.y * b.y` instead of an N-step fold.

use num_traits::MulAdd;

/// A 2-D vector of `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// First component.
    pub x: f64,
    /// Second component.
    pub y: f64,
}

impl Vec2 {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with `other` under strategy `D`.
    #[inline(always)]
    pub fn dot<D: Dot>(self, other: Vec2) -> f64 {
        D::dot(self, other)
    }

    /// Both components moved to the next representable value towards +inf.
    #[inline]
    pub fn next_up(self) -> Self {
        Self::new(self.x.next_up(), self.y.next_up())
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A way of combining the two products of a dot product.
pub trait Dot {
    /// Label used in reports.
    const DESCR: &'static str;

    /// Computes `a.x * b.x + a.y * b.y`.
    fn dot(a: Vec2, b: Vec2) -> f64;
}

/// One expression; fusion is up to the compiler backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneExprDot;

impl Dot for OneExprDot {
    const DESCR: &'static str = "a.x * b.x + a.y * b.y";

    #[cfg(not(feature = "relaxed"))]
    #[inline(always)]
    fn dot(a: Vec2, b: Vec2) -> f64 {
        a.x * b.x + a.y * b.y
    }

    #[cfg(feature = "relaxed")]
    #[inline(always)]
    fn dot(a: Vec2, b: Vec2) -> f64 {
        a.x.mul_add_relaxed(b.x, a.y * b.y)
    }
}

/// Both products rounded, then summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoStepDot;

impl Dot for TwoStepDot {
    const DESCR: &'static str = "p = a.x * b.x; q = a.y * b.y; p + q";

    #[inline(always)]
    fn dot(a: Vec2, b: Vec2) -> f64 {
        let p = a.x * b.x;
        let q = a.y * b.y;
        p + q
    }
}

/// Second product rounded, first one fused into the sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct FusedDot;

impl Dot for FusedDot {
    const DESCR: &'static str = "fma(a.x, b.x, a.y * b.y)";

    #[inline(always)]
    fn dot(a: Vec2, b: Vec2) -> f64 {
        MulAdd::mul_add(a.x, b.x, a.y * b.y)
    }
}

/// Starting pair for [`test_vectors`].
pub const TEST_VECTOR_SEED: (Vec2, Vec2) = (Vec2::new(-0.3, 100.1), Vec2::new(1e6, 1e6 / 3.0));

/// `n` vector pairs, each one representable step above the previous in every
/// component, starting from [`TEST_VECTOR_SEED`].
pub fn test_vectors(n: usize) -> Vec<(Vec2, Vec2)> {
    core::iter::successors(Some(TEST_VECTOR_SEED), |&(a, b)| {
        Some((a.next_up(), b.next_up()))
    })
    .take(n)
    .collect()
}
