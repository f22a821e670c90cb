//! Compact SI-prefixed number labels.
//!
//! Renders values the way a d3 `.Ns` format string does: `N` significant
//! digits followed by an SI prefix from yocto to yotta. Trailing zeros are
//! kept, so `1_000_000.0` with two digits is `1.0M`.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format `value` with `significant_digits` digits and an SI prefix.
///
/// # Examples
///
/// ```rust
/// use scenario_compare::scenario::format_si;
///
/// assert_eq!(format_si(1234567.0, 2), "1.2M");
/// assert_eq!(format_si(42_000.0, 3), "42.0k");
/// ```
pub fn format_si(value: f64, significant_digits: usize) -> String {
    let digits = significant_digits.clamp(1, 21);

    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    // Round first so 999_999 becomes 1.0e6 and picks the M prefix
    let sci = format!("{:.*e}", digits - 1, value.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return value.to_string();
    };
    let (Ok(mantissa), Ok(exponent)) = (mantissa.parse::<f64>(), exponent.parse::<i32>()) else {
        return value.to_string();
    };

    let prefix_exp = exponent.div_euclid(3).clamp(-8, 8) * 3;
    let shift = exponent - prefix_exp;
    let scaled = mantissa * 10f64.powi(shift);
    let decimals = (digits as i32 - 1 - shift).max(0) as usize;
    let prefix = PREFIXES[(prefix_exp / 3 + 8) as usize];

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}{}", sign, decimals, scaled, prefix)
}

/// Significant digits of a d3 `.Ns` format string such as `".2s"`.
pub fn si_precision(text_format: &str) -> Option<usize> {
    let digits = text_format.strip_prefix('.')?.strip_suffix('s')?;
    atoi_simd::parse::<usize, false, false>(digits.as_bytes()).ok().filter(|&d| d > 0)
}
