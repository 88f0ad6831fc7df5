//! CPU targets for multiversion dispatch.
//!
//! Every target listed here has a hardware FMA unit, so `mul_add` inside a
//! multiversioned function lowers to one instruction instead of a libm call.
//! Plain `*` and `+` are unaffected: enabling `fma` never licenses contraction.

// ============================================================================
// x86/x86_64
// ============================================================================

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
macro_rules! madd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // x86-64-v3 (Haswell 2013+, Zen 2 2019+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+popcnt+cmpxchg16b+avx+avx2+bmi1+bmi2+f16c+fma+lzcnt+movbe+xsave+fxsr",
            // x86 with FMA3 (Piledriver 2012+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+avx+fma",
        ))]
        $($item)*
    };
}

// ============================================================================
// aarch64
// ============================================================================

#[cfg(target_arch = "aarch64")]
macro_rules! madd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // aarch64 baseline (all ARM64 have fused fmadd)
            "aarch64+neon+lse+aes+sha2+crc",
        ))]
        $($item)*
    };
}

// ============================================================================
// Fallback for other architectures (wasm32, etc.)
// ============================================================================

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
macro_rules! madd_multiversion {
    ($($item:tt)*) => {
        $($item)*
    };
}
