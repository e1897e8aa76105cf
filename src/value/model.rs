use crate::foundation::math::splitmix64;

/// Tick used by [`Value::Rand`] when none is configured, about 60 fps.
pub const DEFAULT_RAND_TICK_MS: u32 = 16;

/// A 32-bit integer function of elapsed time and strip length.
///
/// Evaluation is pure and total: the same inputs always give the same output
/// and no variant can fail or panic. Arithmetic wraps on overflow.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// The elapsed milliseconds, reinterpreted as signed.
    TimeMs,
    /// The strip length in pixels.
    Length,
    /// A constant.
    Const(i32),
    /// A fraction of the length, as 16.16 fixed point (`65536` is 100%).
    Percent(i32),
    /// `l + r`.
    OpAdd {
        /// Left operand.
        l: SValue,
        /// Right operand.
        r: SValue,
    },
    /// `l - r`.
    OpSub {
        /// Left operand.
        l: SValue,
        /// Right operand.
        r: SValue,
    },
    /// `l * r`.
    OpMul {
        /// Left operand.
        l: SValue,
        /// Right operand.
        r: SValue,
    },
    /// `l % r`, or 0 when `r` is 0.
    OpMod {
        /// Dividend.
        l: SValue,
        /// Divisor.
        r: SValue,
    },
    /// Elapsed time floored to a multiple of the period `v`.
    OpStep {
        /// Period in milliseconds.
        v: SValue,
    },
    /// Parenthesis pair; evaluates to `v`.
    OpGroup {
        /// Wrapped value.
        v: SValue,
    },
    /// Pseudo-random non-negative number, reseeded every `tick_ms`.
    Rand {
        /// Resolution in milliseconds; 0 selects [`DEFAULT_RAND_TICK_MS`].
        tick_ms: i32,
    },
}

impl Value {
    /// Evaluate at `time_ms` for a strip of `length` pixels.
    pub fn eval(&self, time_ms: u32, length: i32) -> i32 {
        match self {
            Self::TimeMs => time_ms as i32,
            Self::Length => length,
            Self::Const(c) => *c,
            Self::Percent(p) => (i64::from(length) * i64::from(*p) / 65536) as i32,
            Self::OpAdd { l, r } => l.eval(time_ms, length).wrapping_add(r.eval(time_ms, length)),
            Self::OpSub { l, r } => l.eval(time_ms, length).wrapping_sub(r.eval(time_ms, length)),
            Self::OpMul { l, r } => l.eval(time_ms, length).wrapping_mul(r.eval(time_ms, length)),
            Self::OpMod { l, r } => {
                let d = r.eval(time_ms, length);
                if d == 0 {
                    0
                } else {
                    l.eval(time_ms, length).wrapping_rem(d)
                }
            }
            Self::OpStep { v } => {
                if v.is_absent() {
                    return 0;
                }
                let period = v.eval(time_ms, length);
                if period <= 0 {
                    return time_ms as i32;
                }
                let period = period as u32;
                (time_ms / period * period) as i32
            }
            Self::OpGroup { v } => v.eval(time_ms, length),
            Self::Rand { tick_ms } => {
                let tick = match *tick_ms {
                    0 => DEFAULT_RAND_TICK_MS,
                    t if t < 0 => 1,
                    t => t as u32,
                };
                (splitmix64(u64::from(time_ms / tick)) >> 33) as i32
            }
        }
    }

    /// The `_type` name of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::TimeMs => "TimeMS",
            Self::Length => "Length",
            Self::Const(_) => "Const",
            Self::Percent(_) => "Percent",
            Self::OpAdd { .. } => "OpAdd",
            Self::OpSub { .. } => "OpSub",
            Self::OpMul { .. } => "OpMul",
            Self::OpMod { .. } => "OpMod",
            Self::OpStep { .. } => "OpStep",
            Self::OpGroup { .. } => "OpGroup",
            Self::Rand { .. } => "Rand",
        }
    }

    /// `t + offset`, the form written as `+N` or `-N`.
    pub fn time_plus(offset: i32) -> Self {
        Self::OpAdd {
            l: Self::TimeMs.into(),
            r: Self::Const(offset).into(),
        }
    }

    /// `t % period`, the form written as `%N`.
    pub fn time_mod(period: i32) -> Self {
        Self::OpMod {
            l: Self::TimeMs.into(),
            r: Self::Const(period).into(),
        }
    }

    /// Percent from a whole-number percentage, e.g. `50` for half the length.
    pub fn percent(pct: i32) -> Self {
        Self::Percent(pct.saturating_mul(65536) / 100)
    }
}

/// Serializable holder for an optional [`Value`].
///
/// An absent value evaluates to 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SValue(pub Option<Box<Value>>);

impl SValue {
    /// Wrap a value.
    pub fn new(v: Value) -> Self {
        Self(Some(Box::new(v)))
    }

    /// The absent holder.
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Whether no value is held.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the held value.
    pub fn get(&self) -> Option<&Value> {
        self.0.as_deref()
    }

    /// Evaluate the held value, or 0 when absent.
    pub fn eval(&self, time_ms: u32, length: i32) -> i32 {
        self.0.as_ref().map_or(0, |v| v.eval(time_ms, length))
    }
}

impl From<Value> for SValue {
    fn from(v: Value) -> Self {
        Self::new(v)
    }
}

impl From<i32> for SValue {
    fn from(c: i32) -> Self {
        Self::new(Value::Const(c))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/model.rs"]
mod tests;
