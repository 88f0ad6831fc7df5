//! Horner's-rule polynomial evaluation with an injectable multiply-add.
//!
//! Coefficients are stored constant term first: `c[0] + c[1]*x + ... + c[N]*x^N`.
//! Evaluation starts from `c[N]` and folds one coefficient per step:
//!
//! ```text
//! v = c[N]
//! v = madd(x, v, c[N-1])
//! ...
//! v = madd(x, v, c[0])
//! ```
//!
//! A polynomial of degree N always takes exactly N multiply-adds. The strategy
//! changes rounding, never the number of steps.

use crate::error::{Error, Result};
use crate::madd::MAdd;

/// Evaluates the polynomial `coeffs` at `x`.
///
/// Returns [`Error::InvalidArgument`] for an empty slice, without calling
/// `madd`.
///
/// ```rust
/// use madd_bench::horner;
/// use madd_bench::madd::Fused;
///
/// // 1 + 2x + 3x^2 at x = 2
/// let v = horner::eval(&[1.0, 2.0, 3.0], 2.0, &Fused).unwrap();
/// assert_eq!(v, 17.0);
/// ```
#[inline]
pub fn eval<M: MAdd + ?Sized>(coeffs: &[f64], x: f64, madd: &M) -> Result<f64> {
    match coeffs.split_last() {
        Some((&last, rest)) => Ok(fold(last, rest, x, madd)),
        None => Err(Error::InvalidArgument("empty coefficient sequence")),
    }
}

/// Compile-time specialized [`eval`]; the trip count is a constant.
///
/// `LEN` is the number of coefficients (degree + 1). `LEN == 0` does not compile.
#[inline(always)]
pub fn eval_fixed<const LEN: usize, M: MAdd + ?Sized>(
    coeffs: &[f64; LEN],
    x: f64,
    madd: &M,
) -> f64 {
    const { assert!(LEN > 0, "polynomial needs at least one coefficient") };
    let mut v = coeffs[LEN - 1];
    for i in (1..LEN).rev() {
        v = madd.madd(x, v, coeffs[i - 1]);
    }
    v
}

#[inline(always)]
pub(crate) fn fold<M: MAdd + ?Sized>(last: f64, rest: &[f64], x: f64, madd: &M) -> f64 {
    let mut v = last;
    for &c in rest.iter().rev() {
        v = madd.madd(x, v, c);
    }
    v
}

/// Maclaurin coefficients of `e^x` up to `x^degree`: `[1, 1, 1/2!, ..., 1/degree!]`.
///
/// The factorial is a running `f64` product, so the values are bit-for-bit
/// the ones the benchmarks have always used.
pub fn exp_coeffs(degree: usize) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(degree + 1);
    let mut f = 1.0;
    coeffs.push(1.0);
    for k in 1..=degree {
        f *= k as f64;
        coeffs.push(1.0 / f);
    }
    coeffs
}

/// [`exp_coeffs`] as a fixed-size array, for [`eval_fixed`].
///
/// Produces `LEN` coefficients, i.e. degree `LEN - 1`.
pub const fn exp_array<const LEN: usize>() -> [f64; LEN] {
    let mut coeffs = [0.0; LEN];
    if LEN == 0 {
        return coeffs;
    }
    coeffs[0] = 1.0;
    let mut f = 1.0;
    let mut k = 1;
    while k < LEN {
        f *= k as f64;
        coeffs[k] = 1.0 / f;
        k += 1;
    }
    coeffs
}

/// A non-empty, immutable coefficient sequence, constant term first.
#[derive(Debug, Clone, PartialEq)]
pub struct Coeffs(Box<[f64]>);

impl Coeffs {
    /// Wraps `coeffs`, rejecting an empty sequence.
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Result<Self> {
        let coeffs = coeffs.into();
        if coeffs.is_empty() {
            log::debug!("rejecting empty coefficient sequence");
            return Err(Error::InvalidArgument("empty coefficient sequence"));
        }
        Ok(Self(coeffs.into_boxed_slice()))
    }

    /// Truncated exponential series of the given degree, see [`exp_coeffs`].
    pub fn exp(degree: usize) -> Self {
        Self(exp_coeffs(degree).into_boxed_slice())
    }

    /// Highest power of `x`.
    #[inline]
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// The coefficients, constant term first.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Evaluates the polynomial at `x`.
    #[inline]
    pub fn eval<M: MAdd + ?Sized>(&self, x: f64, madd: &M) -> f64 {
        let n = self.degree();
        fold(self.0[n], &self.0[..n], x, madd)
    }

    /// Splits off the leading coefficient for the batch kernels.
    #[inline]
    pub(crate) fn split(&self) -> (f64, &[f64]) {
        let n = self.degree();
        (self.0[n], &self.0[..n])
    }
}

impl TryFrom<Vec<f64>> for Coeffs {
    type Error = Error;

    fn try_from(coeffs: Vec<f64>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl AsRef<[f64]> for Coeffs {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accuracy::ulp_distance;
    use crate::madd::{Fused, OneExpr, Strategy, TwoStep};
    use core::cell::Cell;

    /// Counts calls and forwards to the inner strategy.
    struct Counting<M> {
        inner: M,
        calls: Cell<usize>,
    }

    impl<M> Counting<M> {
        fn new(inner: M) -> Self {
            Self {
                inner,
                calls: Cell::new(0),
            }
        }
    }

    impl<M: MAdd> MAdd for Counting<M> {
        fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.inner.madd(x, y, z)
        }

        fn descr(&self) -> &'static str {
            self.inner.descr()
        }
    }

    #[test]
    fn test_fold_count() {
        for len in [1usize, 2, 17] {
            let coeffs = exp_coeffs(len - 1);
            assert_eq!(coeffs.len(), len);
            for strategy in Strategy::ALL {
                let counting = Counting::new(strategy);
                eval(&coeffs, 0.5, &counting).unwrap();
                assert_eq!(counting.calls.get(), len - 1, "{strategy}, len {len}");
            }
        }
    }

    #[test]
    fn test_single_coefficient_returned_as_is() {
        let counting = Counting::new(Fused);
        assert_eq!(eval(&[42.5], 1e300, &counting), Ok(42.5));
        assert_eq!(counting.calls.get(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let counting = Counting::new(TwoStep);
        assert_eq!(
            eval(&[], 1.0, &counting),
            Err(Error::InvalidArgument("empty coefficient sequence"))
        );
        assert_eq!(counting.calls.get(), 0);
        assert_eq!(
            Coeffs::new(Vec::new()),
            Err(Error::InvalidArgument("empty coefficient sequence"))
        );
    }

    #[test]
    fn test_coeffs_from_vec() {
        assert_eq!(
            Coeffs::try_from(Vec::new()),
            Err(Error::InvalidArgument("empty coefficient sequence"))
        );

        let coeffs = Coeffs::try_from(vec![1.0, 2.0]).unwrap();
        assert_eq!(coeffs.as_ref(), &[1.0, 2.0]);
        assert_eq!(coeffs.as_ref(), coeffs.as_slice());
        // 1 + 2x at x = 3
        assert_eq!(coeffs.eval(3.0, &Fused), 7.0);
    }

    #[test]
    fn test_fold_order() {
        // 1 + 2x + 3x^2 + 4x^3 at x = 10
        assert_eq!(eval(&[1.0, 2.0, 3.0, 4.0], 10.0, &TwoStep), Ok(4321.0));
        assert_eq!(eval_fixed(&[1.0, 2.0, 3.0, 4.0], 10.0, &Fused), 4321.0);
        let coeffs = Coeffs::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(coeffs.degree(), 3);
        assert_eq!(coeffs.eval(10.0, &OneExpr), 4321.0);
    }

    #[test]
    fn test_exp_coeffs() {
        let c = exp_coeffs(8);
        assert_eq!(c.len(), 9);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 1.0);
        assert_eq!(c[2], 0.5);
        assert_eq!(c[3], 1.0 / 6.0);
        assert_eq!(c[4], 1.0 / 24.0);
        assert_eq!(c[5], 1.0 / 120.0);
        assert_eq!(exp_coeffs(0), vec![1.0]);
    }

    #[test]
    fn test_exp_array_matches_exp_coeffs() {
        const C: [f64; 21] = exp_array::<21>();
        let v = exp_coeffs(20);
        for (a, b) in C.iter().zip(&v) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert!(exp_array::<0>().is_empty());
    }

    #[test]
    fn test_fixed_matches_slice() {
        const C: [f64; 17] = exp_array::<17>();
        for strategy in Strategy::ALL {
            for i in 0..100 {
                let x = -0.1 + i as f64 * 1e-3;
                let slice = eval(&C, x, &strategy).unwrap();
                let fixed = eval_fixed(&C, x, &strategy);
                assert_eq!(slice.to_bits(), fixed.to_bits(), "{strategy} at {x}");
            }
        }
    }

    #[test]
    fn test_strategies_agree_within_4_ulp() {
        for degree in [1, 2, 3, 4, 8, 16] {
            let coeffs = Coeffs::exp(degree);
            for i in 0..=1000 {
                let x = -1.0 + 2.0 * i as f64 / 1000.0;
                let fused = coeffs.eval(x, &Fused);
                let one = coeffs.eval(x, &OneExpr);
                let two = coeffs.eval(x, &TwoStep);
                assert!(ulp_distance(fused, two) <= 4, "degree {degree}, x {x}");
                assert!(ulp_distance(fused, one) <= 4, "degree {degree}, x {x}");
                assert!(ulp_distance(one, two) <= 4, "degree {degree}, x {x}");
            }
        }
    }

    #[test]
    fn test_degree_16_approximates_exp() {
        let coeffs = Coeffs::exp(16);
        for x in [-0.1, 0.0, 0.25, 0.5] {
            let v = coeffs.eval(x, &Fused);
            assert!((v - x.exp()).abs() <= 8.0 * f64::EPSILON * x.exp(), "x = {x}");
        }
    }

    #[test]
    fn test_nan_point() {
        let coeffs = Coeffs::exp(4);
        for strategy in Strategy::ALL {
            assert!(coeffs.eval(f64::NAN, &strategy).is_nan());
        }
    }
}
