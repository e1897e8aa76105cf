use crate::value::model::{SValue, Value};

const MS_PER_HOUR: u32 = 3_600_000;

/// Movement rate in moves per hour, positive or negative.
///
/// The inner value is clamped to ±3,600,000 (1000 moves per second) when
/// evaluated. Sample rates: 1 is one move per hour, 3600 one per second,
/// 216000 sixty per second.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovePerHour(pub SValue);

impl MovePerHour {
    /// A constant rate.
    pub fn constant(rate: i32) -> Self {
        Self(Value::Const(rate).into())
    }

    /// Number of moves done at `time_ms`, reduced modulo `cycle` when it is
    /// non-zero.
    ///
    /// The remainder keeps the sign of the rate. Without a cycle the result
    /// wraps to 32 bits.
    pub fn eval_moves(&self, time_ms: u32, length: i32, cycle: i32) -> i32 {
        let rate = i64::from(
            self.0
                .eval(time_ms, length)
                .clamp(-(MS_PER_HOUR as i32), MS_PER_HOUR as i32),
        );
        let low = i64::from(time_ms % MS_PER_HOUR) * rate / i64::from(MS_PER_HOUR);
        let high = i64::from(time_ms / MS_PER_HOUR) * rate;
        if cycle != 0 {
            ((low + high) % i64::from(cycle)) as i32
        } else {
            (low + high) as i32
        }
    }
}

impl From<SValue> for MovePerHour {
    fn from(v: SValue) -> Self {
        Self(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/moves.rs"]
mod tests;
