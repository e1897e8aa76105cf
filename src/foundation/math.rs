/// Clamp a signed value into `[min, max]`, returning it as `usize`.
///
/// `min` must be non-negative and not above `max`.
pub(crate) fn clamp_index(v: i64, min: usize, max: usize) -> usize {
    debug_assert!(min <= max);
    if v <= min as i64 {
        min
    } else if v >= max as i64 {
        max
    } else {
        v as usize
    }
}

/// Strip length as the `i32` values see it; saturates on absurd lengths.
pub(crate) fn len_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// SplitMix64 step; stateless so a seed always maps to the same output.
pub(crate) fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Format like C's `%.{digits}g`: `digits` significant digits, trailing
/// zeros dropped, scientific notation outside `[1e-4, 10^digits)`.
pub(crate) fn format_significant(v: f64, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return if v.is_finite() { "0".into() } else { v.to_string() };
    }
    let digits = digits.max(1);
    // Round to the requested precision first; rounding can bump the exponent.
    let sci = format!("{:.*e}", digits - 1, v);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let mantissa = strip_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
    }
    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    strip_zeros(&format!("{v:.decimals$}")).to_owned()
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
