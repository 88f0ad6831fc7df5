//! Accuracy analysis and ULP comparison utilities.

use crate::dot::{Dot, Vec2};
use crate::horner::Coeffs;
use crate::madd::MAdd;

/// Compute ULP (units in last place) distance between two f64 values.
///
/// Returns the number of representable doubles between `a` and `b`.
/// `+0.0` and `-0.0` are 0 apart; any NaN gives `u64::MAX`.
#[inline]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    if a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    if a == b {
        return 0;
    }

    // Convert to lexicographically ordered integer representation
    fn to_lexical(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        if bits < 0 { i64::MIN - bits } else { bits }
    }

    let a_lex = to_lexical(a);
    let b_lex = to_lexical(b);

    (a_lex.wrapping_sub(b_lex)).unsigned_abs()
}

/// Statistics about ULP differences.
#[derive(Debug, Clone, Default)]
pub struct UlpStats {
    /// Largest distance seen.
    pub max_ulp: u64,
    /// Sum of all distances.
    pub total_ulp: u128,
    /// Number of samples.
    pub count: u64,
    /// Input at which `max_ulp` was seen.
    pub max_ulp_input: f64,
    /// Reference result at `max_ulp_input`.
    pub max_ulp_expected: f64,
    /// Candidate result at `max_ulp_input`.
    pub max_ulp_actual: f64,
    /// Samples with a non-zero distance.
    pub mismatches: u64,
}

impl UlpStats {
    /// Compute average ULP difference.
    #[inline]
    pub fn avg_ulp(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ulp as f64 / self.count as f64
        }
    }

    /// Adds one sample.
    pub fn record(&mut self, input: f64, expected: f64, actual: f64) {
        let ulp = ulp_distance(actual, expected);
        self.total_ulp = self.total_ulp.saturating_add(ulp as u128);
        self.count += 1;
        if ulp != 0 {
            self.mismatches += 1;
        }

        if ulp > self.max_ulp {
            self.max_ulp = ulp;
            self.max_ulp_input = input;
            self.max_ulp_expected = expected;
            self.max_ulp_actual = actual;
        }
    }
}

/// Compare a candidate strategy against a reference on `coeffs`, over
/// `steps + 1` evenly spaced points in `[start, end]`.
pub fn compare_horner<R, C>(
    coeffs: &Coeffs,
    reference: &R,
    candidate: &C,
    start: f64,
    end: f64,
    steps: u32,
) -> UlpStats
where
    R: MAdd + ?Sized,
    C: MAdd + ?Sized,
{
    let mut stats = UlpStats::default();
    let steps = steps.max(1);

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = start + t * (end - start);
        stats.record(x, coeffs.eval(x, reference), coeffs.eval(x, candidate));
    }

    stats
}

/// Compare two multiply-add strategies on each `(x, y, z)`.
///
/// `max_ulp_input` holds the `x` of the worst triple.
pub fn compare_madd<R, C>(reference: &R, candidate: &C, triples: &[(f64, f64, f64)]) -> UlpStats
where
    R: MAdd + ?Sized,
    C: MAdd + ?Sized,
{
    let mut stats = UlpStats::default();
    for &(x, y, z) in triples {
        stats.record(x, reference.madd(x, y, z), candidate.madd(x, y, z));
    }
    stats
}

/// Compare two dot-product strategies on each pair.
///
/// `max_ulp_input` holds the `a.x` of the worst pair.
pub fn compare_dot<R: Dot, C: Dot>(pairs: &[(Vec2, Vec2)]) -> UlpStats {
    let mut stats = UlpStats::default();
    for &(a, b) in pairs {
        stats.record(a.x, R::dot(a, b), C::dot(a, b));
    }
    stats
}
