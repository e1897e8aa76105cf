use std::fmt;

use crate::foundation::color::Color;

/// Fixed blend weight used by [`Interpolation::Linear`].
///
/// Known limitation: the weight does not follow the sub-pixel distance.
const LINEAR_WEIGHT: u8 = 127;

/// Resampling algorithm used to fit one run of pixels into another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Nearest source pixel; blocky when upscaling.
    #[default]
    Nearest,
    /// Like [`Interpolation::Nearest`], but when upscaling only the exact
    /// target of each source pixel is written, leaving gaps.
    NearestSkip,
    /// Blend each nearest source pixel with its right neighbour.
    Linear,
}

impl Interpolation {
    /// Every algorithm, in wire-name order.
    pub const ALL: [Self; 3] = [Self::Nearest, Self::NearestSkip, Self::Linear];

    /// The wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::NearestSkip => "nearest-skip",
            Self::Linear => "linear",
        }
    }

    /// Strict lookup by wire name; also accepts the legacy `nearestskip`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "nearest" => Some(Self::Nearest),
            "nearest-skip" | "nearestskip" => Some(Self::NearestSkip),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }

    /// Lenient lookup: unknown or empty names fall back to
    /// [`Interpolation::Nearest`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Resample `src` into `dst`. A no-op when either side is empty.
    pub fn scale(self, src: &[Color], dst: &mut [Color]) {
        let (li, lo) = (src.len(), dst.len());
        if li == 0 || lo == 0 {
            return;
        }
        match self {
            Self::NearestSkip if li < lo => {
                for (i, p) in src.iter().enumerate() {
                    dst[(i * lo + lo / 2) / li] = *p;
                }
            }
            Self::Nearest | Self::NearestSkip => {
                for (i, p) in dst.iter_mut().enumerate() {
                    *p = src[(i * li + li / 2) / lo];
                }
            }
            Self::Linear => {
                for (i, p) in dst.iter_mut().enumerate() {
                    let x = (i * li + li / 2) / lo;
                    let mut c = src[x];
                    if x + 1 < li {
                        c = c.mix(src[x + 1], LINEAR_WEIGHT);
                    }
                    *p = c;
                }
            }
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/interpolation.rs"]
mod tests;
