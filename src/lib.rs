//! Fused vs unfused multiply-add, measured.
//!
//! This crate provides three interchangeable ways of computing `x * y + z`
//! and the harness pieces to compare them for speed and rounding:
//!
//! - [`Fused`](madd::Fused): one fused multiply-add, a single rounding
//! - [`OneExpr`](madd::OneExpr): `x * y + z` as one expression, fusion left to
//!   the compiler backend
//! - [`TwoStep`](madd::TwoStep): `p = x * y; p + z`, two roundings, never fused
//!
//! # Module Organization
//!
//! - [`madd`] - The [`MAdd`](madd::MAdd) trait and the three strategies
//! - [`horner`] - Horner's-rule polynomial evaluation over any strategy
//! - [`dot`] - 2-D dot products, one expression vs two steps
//! - [`batch`] - Runtime-dispatched batch kernels (hardware FMA when present)
//! - [`accuracy`] - ULP distance and strategy-vs-strategy statistics
//! - [`fmt`] - Hexfloat and 17-digit display of doubles
//!
//! # Quick Start
//!
//! ```rust
//! use madd_bench::madd::{Fused, MAdd, TwoStep};
//!
//! // 3 * fl(1/3) is 1 - 2^-54 exactly; only the fused form keeps it
//! assert_eq!(Fused.madd(3.0, 1.0 / 3.0, -1.0), -(2.0f64.powi(-54)));
//! assert_eq!(TwoStep.madd(3.0, 1.0 / 3.0, -1.0), 0.0);
//! ```
//!
//! # Polynomials
//!
//! ```rust
//! use madd_bench::horner::Coeffs;
//! use madd_bench::madd::Fused;
//!
//! let exp16 = Coeffs::exp(16); // 1 + x + x^2/2! + ... + x^16/16!
//! let v = exp16.eval(0.5, &Fused);
//! assert!((v - 0.5f64.exp()).abs() < 1e-15);
//! ```
//!
//! # Hardware FMA
//!
//! On a default x86_64 build there is no `fma` target feature, so
//! [`Fused`](madd::Fused) in scalar code calls a software `fma()`. Either
//! build with `RUSTFLAGS="-C target-cpu=native"` (see
//! [`HARDWARE_FMA`](madd::HARDWARE_FMA)) or use [`batch`], which selects an
//! FMA-capable code path at runtime.
//!
//! # Feature Flags
//!
//! - `relaxed` (nightly only): compute [`OneExpr`](madd::OneExpr) with
//!   `f64::mul_add_relaxed`, letting the backend fuse it or not

#![cfg_attr(feature = "relaxed", feature(float_mul_add_relaxed))]
#![warn(missing_docs)]

// Must come first: defines `madd_multiversion!` for the modules below
#[macro_use]
mod targets;

// ============================================================================
// Public modules
// ============================================================================

/// Multiply-add strategies.
pub mod madd;

/// Horner's-rule polynomial evaluation.
pub mod horner;

/// Two-term dot products.
pub mod dot;

/// Batch Horner kernels with runtime CPU dispatch.
pub mod batch;

/// ULP comparison utilities.
pub mod accuracy;

/// Float display helpers.
pub mod fmt;

mod error;

pub use error::{Error, Result};
pub use horner::Coeffs;
pub use madd::{Fused, MAdd, OneExpr, Strategy, TwoStep};

// ============================================================================
// Tests
// ============================================================================
