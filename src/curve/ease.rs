use std::fmt;
use std::sync::OnceLock;

/// Number of samples in each bezier lookup table.
const LUT_SAMPLES: usize = 18;

/// Guard band for the step curves, so boundary inputs resolve the same way
/// on every call.
const STEP_GUARD: u16 = 256;

/// Named easing curve mapping `[0, 65535]` onto `[0, 65535]`.
///
/// The bezier curves follow the CSS timing functions of the same names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// `cubic-bezier(0, 0, 0.58, 1)`; the default.
    #[default]
    EaseOut,
    /// Identity mapping.
    Direct,
    /// Jumps to full almost immediately.
    StepStart,
    /// Jumps to full at the midpoint.
    StepMiddle,
    /// Jumps to full only at the very end.
    StepEnd,
}

impl Curve {
    /// Every curve, in wire-name order.
    pub const ALL: [Self; 8] = [
        Self::Ease,
        Self::EaseIn,
        Self::EaseInOut,
        Self::EaseOut,
        Self::Direct,
        Self::StepStart,
        Self::StepMiddle,
        Self::StepEnd,
    ];

    /// The wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseInOut => "ease-in-out",
            Self::EaseOut => "ease-out",
            Self::Direct => "direct",
            Self::StepStart => "steps(1,start)",
            Self::StepMiddle => "steps(1,middle)",
            Self::StepEnd => "steps(1,end)",
        }
    }

    /// Strict lookup by wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Lenient lookup: unknown or empty names fall back to [`Curve::EaseOut`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Map `intensity` through the curve.
    pub fn scale(self, intensity: u16) -> u16 {
        match self {
            Self::Ease | Self::EaseIn | Self::EaseInOut | Self::EaseOut => {
                tables()[self.table_index()].eval(intensity)
            }
            Self::Direct => intensity,
            Self::StepStart => {
                if intensity < STEP_GUARD {
                    0
                } else {
                    u16::MAX
                }
            }
            Self::StepMiddle => {
                if intensity < 32768 {
                    0
                } else {
                    u16::MAX
                }
            }
            Self::StepEnd => {
                if intensity >= u16::MAX - STEP_GUARD {
                    u16::MAX
                } else {
                    0
                }
            }
        }
    }

    /// A bell rising from 0 to full at the midpoint and back to 0, made of
    /// two mirrored [`Curve::EaseInOut`] halves.
    pub fn bell(intensity: u16) -> u16 {
        match intensity {
            0 | u16::MAX => 0,
            32767 => u16::MAX,
            v if v < 32767 => Self::EaseInOut.scale(v * 2),
            v => Self::EaseInOut.scale(u16::MAX.wrapping_sub(v.wrapping_mul(2))),
        }
    }

    /// [`Curve::scale`] reduced to 8 bits, for use as a blend weight.
    pub fn scale8(self, intensity: u16) -> u8 {
        (self.scale(intensity) >> 8) as u8
    }

    const fn table_index(self) -> usize {
        match self {
            Self::Ease => 0,
            Self::EaseIn => 1,
            Self::EaseInOut => 2,
            _ => 3,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piecewise-linear approximation of a unit cubic bezier, sampled evenly
/// along x.
#[derive(Debug)]
struct BezierLut {
    points: [u16; LUT_SAMPLES],
}

impl BezierLut {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut points = [0u16; LUT_SAMPLES];
        for (i, p) in points.iter_mut().enumerate() {
            let x = i as f64 / (LUT_SAMPLES - 1) as f64;
            let t = solve_t(x, x1, x2);
            let y = bezier(t, y1, y2).clamp(0.0, 1.0);
            *p = (y * 65535.0).round() as u16;
        }
        Self { points }
    }

    fn eval(&self, v: u16) -> u16 {
        let segments = (LUT_SAMPLES - 1) as u32;
        let pos = u32::from(v) * segments;
        let idx = (pos / 65535) as usize;
        if idx >= LUT_SAMPLES - 1 {
            return self.points[LUT_SAMPLES - 1];
        }
        let frac = i64::from(pos % 65535);
        let a = i64::from(self.points[idx]);
        let b = i64::from(self.points[idx + 1]);
        (a + (b - a) * frac / 65535) as u16
    }
}

fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Find `t` with `bezier(t, x1, x2) == x`; x is monotonic for control points
/// inside the unit square.
fn solve_t(x: f64, x1: f64, x2: f64) -> f64 {
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if bezier(mid, x1, x2) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

fn tables() -> &'static [BezierLut; 4] {
    static TABLES: OnceLock<[BezierLut; 4]> = OnceLock::new();
    TABLES.get_or_init(|| {
        [
            BezierLut::new(0.25, 0.1, 0.25, 1.0),
            BezierLut::new(0.42, 0.0, 1.0, 1.0),
            BezierLut::new(0.42, 0.0, 0.58, 1.0),
            BezierLut::new(0.0, 0.0, 0.58, 1.0),
        ]
    })
}

#[cfg(test)]
#[path = "../../tests/unit/curve/ease.rs"]
mod tests;
