//! Batch Horner evaluation: one polynomial, many points.
//!
//! Each strategy gets its own kernel, compiled once per target in
//! [`targets`](crate::targets) and dispatched on the running CPU. This is what
//! makes [`Fused`] cheap on a default (`x86-64` baseline) build, where the
//! scalar path has to call a software `fma()`.
//!
//! Results are bit-identical to [`Coeffs::eval`] with the same strategy.

use crate::horner::Coeffs;
use crate::madd::{Fused, MAdd, OneExpr, Strategy, TwoStep};

macro_rules! horner_kernel {
    ($name:ident, $madd:ident) => {
        madd_multiversion! {
            fn $name(last: f64, rest: &[f64], xs: &[f64], out: &mut [f64]) {
                for (o, &x) in out.iter_mut().zip(xs) {
                    let mut v = last;
                    for &c in rest.iter().rev() {
                        v = $madd.madd(x, v, c);
                    }
                    *o = v;
                }
            }
        }
    };
}

horner_kernel!(fused_kernel, Fused);
horner_kernel!(one_expr_kernel, OneExpr);
horner_kernel!(two_step_kernel, TwoStep);

#[inline]
fn check_len(xs: &[f64], out: &[f64]) {
    assert_eq!(
        xs.len(),
        out.len(),
        "batch: {} points but {} output slots",
        xs.len(),
        out.len()
    );
}

/// Evaluates `coeffs` at every point of `xs` with [`Fused`].
///
/// # Panics
///
/// Panics if `xs` and `out` differ in length.
pub fn eval_fused(coeffs: &Coeffs, xs: &[f64], out: &mut [f64]) {
    check_len(xs, out);
    let (last, rest) = coeffs.split();
    fused_kernel(last, rest, xs, out);
}

/// Evaluates `coeffs` at every point of `xs` with [`OneExpr`].
///
/// # Panics
///
/// Panics if `xs` and `out` differ in length.
pub fn eval_one_expr(coeffs: &Coeffs, xs: &[f64], out: &mut [f64]) {
    check_len(xs, out);
    let (last, rest) = coeffs.split();
    one_expr_kernel(last, rest, xs, out);
}

/// Evaluates `coeffs` at every point of `xs` with [`TwoStep`].
///
/// # Panics
///
/// Panics if `xs` and `out` differ in length.
pub fn eval_two_step(coeffs: &Coeffs, xs: &[f64], out: &mut [f64]) {
    check_len(xs, out);
    let (last, rest) = coeffs.split();
    two_step_kernel(last, rest, xs, out);
}

/// Dispatches to the kernel for `strategy`.
///
/// # Panics
///
/// Panics if `xs` and `out` differ in length.
pub fn eval(strategy: Strategy, coeffs: &Coeffs, xs: &[f64], out: &mut [f64]) {
    match strategy {
        Strategy::Fused => eval_fused(coeffs, xs, out),
        Strategy::OneExpr => eval_one_expr(coeffs, xs, out),
        Strategy::TwoStep => eval_two_step(coeffs, xs, out),
    }
}
