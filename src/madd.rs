//! Multiply-add strategies: `x * y + z` three ways.
//!
//! - [`Fused`]: one correctly rounded fused multiply-add (single rounding).
//! - [`OneExpr`]: `x * y + z` as a single expression; fusion is up to the
//!   compiler backend.
//! - [`TwoStep`]: `p = x * y`, then `p + z`; two roundings, never fused.
//!
//! # Contraction
//!
//! Rust does not contract `a * b + c` on primitive floats: every `*` and `+`
//! rounds on its own unless the program asks for fusion (`mul_add`) or for
//! relaxed semantics. [`TwoStep`] relies on that guarantee and the tests pin it
//! down bit-for-bit. As a consequence, stable builds compute [`OneExpr`]
//! exactly like [`TwoStep`]. With the nightly-only `relaxed` feature,
//! [`OneExpr`] goes through `f64::mul_add_relaxed` and the backend picks.
//!
//! # Hardware Detection
//!
//! [`Fused`] always rounds once. Whether it is a single instruction or a
//! software `fma()` call depends on the target features the crate was built
//! with, see [`HARDWARE_FMA`]. The [`batch`](crate::batch) kernels dispatch at
//! runtime instead.

use core::fmt;
use core::str::FromStr;

use num_traits::MulAdd;

use crate::error::{Error, Result};

/// `true` when the build's target features include a hardware FMA instruction.
///
/// - x86/x86_64 with the `fma` feature (e.g. `-C target-cpu=native` on Haswell+)
/// - aarch64 with NEON
pub const HARDWARE_FMA: bool = cfg!(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
));

/// Runtime check for a hardware FMA unit on the running CPU.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn hardware_fma_detected() -> bool {
    std::arch::is_x86_feature_detected!("fma")
}

/// Runtime check for a hardware FMA unit on the running CPU.
#[cfg(target_arch = "aarch64")]
pub fn hardware_fma_detected() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

/// Runtime check for a hardware FMA unit on the running CPU.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
pub fn hardware_fma_detected() -> bool {
    HARDWARE_FMA
}

/// A way of computing `x * y + z`.
///
/// Implementations are pure and total: non-finite inputs propagate under
/// IEEE-754 rules, nothing is reported as an error.
pub trait MAdd {
    /// Computes `x * y + z`.
    fn madd(&self, x: f64, y: f64, z: f64) -> f64;

    /// Human-readable label, for reports only.
    fn descr(&self) -> &'static str;
}

/// Fused multiply-add: `x * y + z` with a single rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fused;

impl Fused {
    /// Label used in reports.
    pub const DESCR: &'static str = "fma()";
}

impl MAdd for Fused {
    #[inline(always)]
    fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
        MulAdd::mul_add(x, y, z)
    }

    fn descr(&self) -> &'static str {
        Self::DESCR
    }
}

/// `x * y + z` written as one expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OneExpr;

impl OneExpr {
    /// Label used in reports.
    pub const DESCR: &'static str = "x * y + z";
}

impl MAdd for OneExpr {
    #[cfg(not(feature = "relaxed"))]
    #[inline(always)]
    fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
        x * y + z
    }

    #[cfg(feature = "relaxed")]
    #[inline(always)]
    fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
        x.mul_add_relaxed(y, z)
    }

    fn descr(&self) -> &'static str {
        Self::DESCR
    }
}

/// Multiply, round, add, round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TwoStep;

impl TwoStep {
    /// Label used in reports.
    pub const DESCR: &'static str = "p = x * y; p + z";
}

impl MAdd for TwoStep {
    #[inline(always)]
    fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = x * y;
        p + z
    }

    fn descr(&self) -> &'static str {
        Self::DESCR
    }
}

/// Runtime-selectable strategy.
///
/// Delegates to the zero-sized strategy types; use those directly when the
/// choice is known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`TwoStep`]
    TwoStep,
    /// [`Fused`]
    Fused,
    /// [`OneExpr`]
    OneExpr,
}

impl Strategy {
    /// Every strategy, in report order.
    pub const ALL: [Strategy; 3] = [Strategy::TwoStep, Strategy::Fused, Strategy::OneExpr];

    /// Short name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::TwoStep => "two-step",
            Strategy::Fused => "fused",
            Strategy::OneExpr => "one-expr",
        }
    }
}

impl MAdd for Strategy {
    #[inline]
    fn madd(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Strategy::TwoStep => TwoStep.madd(x, y, z),
            Strategy::Fused => Fused.madd(x, y, z),
            Strategy::OneExpr => OneExpr.madd(x, y, z),
        }
    }

    fn descr(&self) -> &'static str {
        match self {
            Strategy::TwoStep => TwoStep::DESCR,
            Strategy::Fused => Fused::DESCR,
            Strategy::OneExpr => OneExpr::DESCR,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}
