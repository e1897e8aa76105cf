use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::foundation::color::Color;
use crate::foundation::error::{StripError, StripResult};

/// An ordered, resizable run of pixels; one snapshot of the strip.
///
/// Dereferences to `[Color]`, so every [`PixelSpan`] operation and every
/// pattern render works on both owned frames and sub-slices of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame(Vec<Color>);

impl Frame {
    /// An empty frame.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A frame of `len` black pixels.
    pub fn black(len: usize) -> Self {
        Self(vec![Color::BLACK; len])
    }

    /// Discard the content and resize to `len` black pixels.
    pub fn reset(&mut self, len: usize) {
        self.0.clear();
        self.0.resize(len, Color::BLACK);
    }

    /// Drop the content and the backing storage.
    pub fn release(&mut self) {
        self.0 = Vec::new();
    }

    /// Borrow the pixels.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Consume the frame and return its pixels.
    pub fn into_vec(self) -> Vec<Color> {
        self.0
    }

    /// Pack the pixels as consecutive R, G, B bytes.
    ///
    /// Writes `min(self.len(), out.len() / 3)` pixels and leaves the rest of
    /// `out` untouched.
    pub fn to_rgb(&self, out: &mut [u8]) {
        for (dst, c) in out.chunks_exact_mut(3).zip(self.0.iter()) {
            dst[0] = c.r;
            dst[1] = c.g;
            dst[2] = c.b;
        }
    }
}

impl Deref for Frame {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.0
    }
}

impl DerefMut for Frame {
    fn deref_mut(&mut self) -> &mut [Color] {
        &mut self.0
    }
}

impl From<Vec<Color>> for Frame {
    fn from(pixels: Vec<Color>) -> Self {
        Self(pixels)
    }
}

impl From<&[Color]> for Frame {
    fn from(pixels: &[Color]) -> Self {
        Self(pixels.to_vec())
    }
}

impl<const N: usize> From<[Color; N]> for Frame {
    fn from(pixels: [Color; N]) -> Self {
        Self(pixels.to_vec())
    }
}

impl FromIterator<Color> for Frame {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(1 + self.0.len() * 6);
        out.push('L');
        for c in &self.0 {
            c.write_rgb_hex(&mut out);
        }
        f.write_str(&out)
    }
}

impl FromStr for Frame {
    type Err = StripError;

    /// Decode `L` followed by `RRGGBB` per pixel.
    fn from_str(s: &str) -> StripResult<Self> {
        let Some(hex) = s.strip_prefix('L') else {
            return Err(StripError::malformed(s, "frame must start with 'L'"));
        };
        if !hex.is_ascii() || hex.len() % 6 != 0 {
            return Err(StripError::malformed(
                s,
                "frame payload must be 6 hex digits per pixel",
            ));
        }
        let mut pixels = Vec::with_capacity(hex.len() / 6);
        for i in (0..hex.len()).step_by(6) {
            let c = Color::from_rgb_hex(&hex[i..i + 6])
                .map_err(|_| StripError::malformed(s, "invalid hex digit"))?;
            pixels.push(c);
        }
        Ok(Self(pixels))
    }
}

/// Element-wise pixel operations over a run of colors.
///
/// Binary operations stop at the shorter of the two runs; callers size the
/// buffers.
pub trait PixelSpan {
    /// Blend every pixel toward the matching pixel of `other` by `alpha`.
    fn mix(&mut self, other: &[Color], alpha: u8);
    /// Saturating-add the matching pixel of `other` into every pixel.
    fn add(&mut self, other: &[Color]);
    /// Dim every pixel by `intensity / 255`.
    fn dim(&mut self, intensity: u8);
}

impl PixelSpan for [Color] {
    fn mix(&mut self, other: &[Color], alpha: u8) {
        for (dst, src) in self.iter_mut().zip(other) {
            *dst = dst.mix(*src, alpha);
        }
    }

    fn add(&mut self, other: &[Color]) {
        for (dst, src) in self.iter_mut().zip(other) {
            *dst = dst.add_saturating(*src);
        }
    }

    fn dim(&mut self, intensity: u8) {
        for p in self.iter_mut() {
            *p = p.dim(intensity);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/frame.rs"]
mod tests;
