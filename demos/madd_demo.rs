//! Shows how each multiply-add strategy rounds `x * y + z`.
//!
//! Run with: cargo run --release --example madd_demo [-- two-step fused one-expr]
//!
//! The first pass prints 17 significant digits, the second hexfloat.
//! `RUST_LOG=debug` adds the build and CPU details.

use std::hint::black_box;
use std::process::ExitCode;

use madd_bench::fmt::{HexFloat, Precise};
use madd_bench::madd::{HARDWARE_FMA, MAdd, Strategy, hardware_fma_detected};

#[derive(Clone, Copy)]
enum Notation {
    Decimal,
    Hex,
}

impl Notation {
    fn show(self, v: f64) -> String {
        match self {
            Notation::Decimal => Precise(v).to_string(),
            Notation::Hex => HexFloat(v).to_string(),
        }
    }
}

// Kept out of line so the inputs are never constants at the call
#[inline(never)]
fn demo(madd: &dyn MAdd, x: f64, y: f64, z: f64, notation: Notation) {
    let (x, y, z) = (black_box(x), black_box(y), black_box(z));
    println!(
        "x = {}, y = {}, z = {}",
        notation.show(x),
        notation.show(y),
        notation.show(z)
    );
    println!("x * y = {}", notation.show(x * y));
    println!("x * y + z = {}\n", notation.show(madd.madd(x, y, z)));
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let strategies = match std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Strategy>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(s) if s.is_empty() => Strategy::ALL.to_vec(),
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::debug!(
        "hardware fma: compiled in = {HARDWARE_FMA}, cpu = {}",
        hardware_fma_detected()
    );
    log::info!(
        "strategies: {}",
        strategies
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let s = 2.0f64.sqrt();
    let inputs = [(3.0, 1.0 / 3.0, -1.0), (s, s, -2.0)];

    for notation in [Notation::Decimal, Notation::Hex] {
        for strategy in &strategies {
            println!("Using {}", strategy.descr());
            for (x, y, z) in inputs {
                demo(strategy, x, y, z, notation);
            }
        }
    }

    ExitCode::SUCCESS
}
