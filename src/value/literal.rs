//! The compact string grammar for values.
//!
//! | literal | value |
//! |---|---|
//! | `t` | [`Value::TimeMs`] |
//! | `l` | [`Value::Length`] |
//! | `10` | [`Value::Const`] |
//! | `12.5%`, `-10%` | [`Value::Percent`] |
//! | `+N`, `-N` | [`Value::OpAdd`] of `t` and a constant |
//! | `%N` | [`Value::OpMod`] of `t` and a constant |
//! | `(expr)` | [`Value::OpGroup`] |
//! | `step(expr)` | [`Value::OpStep`] |
//! | `rand`, `Rand` | [`Value::Rand`] with tick 0 |
//! | `Rand(N)` | [`Value::Rand`] with tick N |
//!
//! `Rand(0)` re-encodes as `rand` and `-0` as `+0`. Nesting of `(...)` and
//! `step(...)` is limited to [`MAX_NESTING`] levels.
//!
//! Every rule answers `None` when the string is not its form, and
//! `Some(Err(_))` when it claims the form but the payload is invalid.

use crate::codec::registry::LiteralRule;
use crate::foundation::error::{StripError, StripResult};
use crate::foundation::math::format_significant;
use crate::value::model::{SValue, Value};

const PERCENT_SCALE: f64 = 655.36;

/// Deepest `(...)` or `step(...)` nesting a literal may carry.
pub(crate) const MAX_NESTING: usize = 64;

/// Value literal rules in resolution order; the first rule that claims a
/// string decides it.
pub(crate) const RULES: &[LiteralRule<Value>] = &[
    time,
    length,
    rand,
    group,
    rand_tick,
    step,
    percent,
    offset,
    modulo,
    constant,
];

/// Parse a value literal.
pub fn parse(s: &str) -> StripResult<Value> {
    RULES
        .iter()
        .find_map(|rule| rule(s))
        .unwrap_or_else(|| Err(StripError::unrecognized(s)))
}

/// The literal form of `v`, when it has one.
///
/// Negative constants have none since `-N` reads back as an offset from `t`.
pub fn format(v: &Value) -> Option<String> {
    match v {
        Value::TimeMs => Some("t".into()),
        Value::Length => Some("l".into()),
        Value::Const(c) if *c >= 0 => Some(c.to_string()),
        Value::Const(_) => None,
        Value::Percent(p) => Some(format_percent(*p)),
        Value::OpAdd { l, r } => match (l.get(), r.get()) {
            (Some(Value::TimeMs), Some(Value::Const(n))) if *n >= 0 => Some(format!("+{n}")),
            (Some(Value::TimeMs), Some(Value::Const(n))) => Some(n.to_string()),
            _ => None,
        },
        Value::OpMod { l, r } => match (l.get(), r.get()) {
            (Some(Value::TimeMs), Some(Value::Const(n))) if *n >= 0 => Some(format!("%{n}")),
            _ => None,
        },
        Value::OpStep { v } => Some(format!("step({})", format(v.get()?)?)),
        Value::OpGroup { v } => Some(format!("({})", format(v.get()?)?)),
        Value::Rand { tick_ms: 0 } => Some("rand".into()),
        Value::Rand { tick_ms } => Some(format!("Rand({tick_ms})")),
        Value::OpSub { .. } | Value::OpMul { .. } => None,
    }
}

/// Four significant digits unless more are needed to read back the same
/// fixed-point number.
fn format_percent(p: i32) -> String {
    let n = f64::from(p) / PERCENT_SCALE;
    (4..=12)
        .map(|digits| format_significant(n, digits))
        .find(|s| {
            s.parse::<f64>()
                .is_ok_and(|back| (back * PERCENT_SCALE).round() == f64::from(p))
        })
        .map_or_else(|| format!("{n}%"), |s| format!("{s}%"))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn int(literal: &str, digits: &str) -> StripResult<i32> {
    digits
        .parse::<i32>()
        .map_err(|_| StripError::malformed(literal, "integer out of 32-bit range"))
}

fn time(s: &str) -> Option<StripResult<Value>> {
    (s == "t").then_some(Ok(Value::TimeMs))
}

fn length(s: &str) -> Option<StripResult<Value>> {
    (s == "l").then_some(Ok(Value::Length))
}

fn rand(s: &str) -> Option<StripResult<Value>> {
    matches!(s, "rand" | "Rand").then_some(Ok(Value::Rand { tick_ms: 0 }))
}

fn group(s: &str) -> Option<StripResult<Value>> {
    if !s.starts_with('(') {
        return None;
    }
    if s.len() < 3 || !s.ends_with(')') {
        return Some(Err(StripError::malformed(s, "expected (expr)")));
    }
    // The opening parenthesis must close at the very end.
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != s.len() - 1 {
                    return Some(Err(StripError::malformed(s, "unbalanced parentheses")));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Some(Err(StripError::malformed(s, "unbalanced parentheses")));
    }
    Some(nested(s, &s[1..s.len() - 1]).map(|v| Value::OpGroup { v: v.into() }))
}

/// Parse the body of a wrapping form, refusing trees deeper than
/// [`MAX_NESTING`] before recursing into them.
fn nested(s: &str, inner: &str) -> StripResult<Value> {
    if nesting(s) > MAX_NESTING {
        return Err(StripError::malformed(s, "nesting too deep"));
    }
    parse(inner)
}

fn nesting(s: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    for b in s.bytes() {
        match b {
            b'(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn rand_tick(s: &str) -> Option<StripResult<Value>> {
    let inner = s.strip_prefix("Rand(")?;
    let Some(n) = inner.strip_suffix(')') else {
        return Some(Err(StripError::malformed(s, "expected Rand(N)")));
    };
    let n = n.strip_prefix('-').unwrap_or(n);
    if !is_digits(n) {
        return Some(Err(StripError::malformed(s, "expected Rand(N)")));
    }
    Some(int(s, &inner[..inner.len() - 1]).map(|tick_ms| Value::Rand { tick_ms }))
}

fn step(s: &str) -> Option<StripResult<Value>> {
    let inner = s.strip_prefix("step(")?;
    let Some(inner) = inner.strip_suffix(')') else {
        return Some(Err(StripError::malformed(s, "expected step(expr)")));
    };
    Some(nested(s, inner).map(|v| Value::OpStep { v: SValue::new(v) }))
}

fn percent(s: &str) -> Option<StripResult<Value>> {
    if s.starts_with('%') {
        return None;
    }
    let body = s.strip_suffix('%')?;
    let valid = !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    let n = match body.parse::<f64>() {
        Ok(n) if valid && n.is_finite() => n,
        _ => return Some(Err(StripError::malformed(s, "expected a number before %"))),
    };
    let fixed = (n * PERCENT_SCALE).round();
    if fixed < f64::from(i32::MIN) || fixed > f64::from(i32::MAX) {
        return Some(Err(StripError::malformed(s, "percent out of range")));
    }
    Some(Ok(Value::Percent(fixed as i32)))
}

fn offset(s: &str) -> Option<StripResult<Value>> {
    let (digits, negative) = match s.as_bytes().first() {
        Some(b'+') => (&s[1..], false),
        Some(b'-') => (&s[1..], true),
        _ => return None,
    };
    if !is_digits(digits) {
        return Some(Err(StripError::malformed(s, "expected +N or -N")));
    }
    let n = if negative { int(s, s) } else { int(s, digits) };
    Some(n.map(Value::time_plus))
}

fn modulo(s: &str) -> Option<StripResult<Value>> {
    let digits = s.strip_prefix('%')?;
    if !is_digits(digits) {
        return Some(Err(StripError::malformed(s, "expected %N")));
    }
    Some(int(s, digits).map(Value::time_mod))
}

fn constant(s: &str) -> Option<StripResult<Value>> {
    is_digits(s).then(|| int(s, s).map(Value::Const))
}

#[cfg(test)]
#[path = "../../tests/unit/value/literal.rs"]
mod tests;
