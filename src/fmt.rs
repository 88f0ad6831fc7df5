//! Display wrappers for showing exactly which double a computation produced.

use core::fmt;

/// Hexadecimal floating-point notation, as printed by C's `%a`.
///
/// ```rust
/// use madd_bench::fmt::HexFloat;
///
/// assert_eq!(HexFloat(1.0 / 3.0).to_string(), "0x1.5555555555555p-2");
/// assert_eq!(HexFloat(-2.0).to_string(), "-0x1p+1");
/// assert_eq!(HexFloat(0.0).to_string(), "0x0p+0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexFloat(pub f64);

impl fmt::Display for HexFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_sign_negative() {
            f.write_str("-")?;
        }
        if v.is_infinite() {
            return f.write_str("inf");
        }

        let bits = v.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let mut mantissa = bits & ((1u64 << 52) - 1);
        let (lead, exp) = match biased {
            0 if mantissa == 0 => (0, 0),
            // Subnormal
            0 => (0, -1022),
            _ => (1, biased - 1023),
        };

        write!(f, "0x{lead}")?;
        if mantissa != 0 {
            // 52 bits = 13 hex digits; drop trailing zeros
            let mut digits = 13;
            while mantissa & 0xf == 0 {
                mantissa >>= 4;
                digits -= 1;
            }
            write!(f, ".{mantissa:0digits$x}")?;
        }
        write!(f, "p{exp:+}")
    }
}

/// 17 significant digits, enough to tell any two doubles apart.
///
/// Laid out like C's `%.17g`: fixed notation for decimal exponents in
/// `-4..17`, exponent notation otherwise, trailing zeros dropped.
///
/// ```rust
/// use madd_bench::fmt::Precise;
///
/// assert_eq!(Precise(0.1).to_string(), "0.10000000000000001");
/// assert_eq!(Precise(-2.0).to_string(), "-2");
/// assert_eq!(Precise(1e300).to_string(), "1.0000000000000001e+300");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precise(pub f64);

const PRECISION: i32 = 17;

impl fmt::Display for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }

        // Rounded digits first; their exponent picks the layout
        let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
        let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

        if (-4..PRECISION).contains(&exp) {
            let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, v);
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
        }
    }
}

/// Drops trailing zeros after the decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
