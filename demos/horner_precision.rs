//! ULP differences between strategies for the benchmarked Horner degrees.
//!
//! Run with: cargo run --release --example horner_precision

use madd_bench::accuracy::{compare_dot, compare_horner};
use madd_bench::dot::{FusedDot, OneExprDot, TwoStepDot, test_vectors};
use madd_bench::horner::Coeffs;
use madd_bench::madd::{Fused, MAdd, OneExpr, TwoStep};

const DEGREES: [usize; 6] = [1, 2, 3, 4, 8, 16];
const STEPS: u32 = 100_000;

fn report<M: MAdd>(candidate: &M, start: f64, end: f64) {
    println!("{} vs {} on [{start}, {end}]", candidate.descr(), Fused.descr());
    println!("{:>6} {:>8} {:>10} {:>10}  worst x", "degree", "max ulp", "avg ulp", "differ");
    for degree in DEGREES {
        let coeffs = Coeffs::exp(degree);
        let stats = compare_horner(&coeffs, &Fused, candidate, start, end, STEPS);
        println!(
            "{:>6} {:>8} {:>10.4} {:>9.2}%  {:.6}",
            degree,
            stats.max_ulp,
            stats.avg_ulp(),
            100.0 * stats.mismatches as f64 / stats.count as f64,
            stats.max_ulp_input
        );
    }
    println!();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("{STEPS} points per degree");

    // Around the benchmark's evaluation point, then the full unit interval
    for (start, end) in [(-0.1, 0.1), (-1.0, 1.0)] {
        report(&TwoStep, start, end);
        report(&OneExpr, start, end);
    }

    let pairs = test_vectors(256);
    for (name, stats) in [
        (
            "two-step vs one-expr dot",
            compare_dot::<TwoStepDot, OneExprDot>(&pairs),
        ),
        ("two-step vs fused dot", compare_dot::<TwoStepDot, FusedDot>(&pairs)),
    ] {
        println!(
            "{name}: max {} ulp, avg {:.4}, {} of {} differ",
            stats.max_ulp,
            stats.avg_ulp(),
            stats.mismatches,
            stats.count
        );
    }
}
