use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StripError, StripResult};

/// A 24-bit RGB color.
///
/// Operations return a new value; nothing aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black, the zero color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `new` by `alpha`.
    ///
    /// Each channel is `(self * (255 - alpha) + new * alpha) / 255` with floor
    /// division, so `alpha == 0` keeps `self` and `alpha == 255` yields `new`.
    #[must_use]
    pub fn mix(self, new: Self, alpha: u8) -> Self {
        let a = u32::from(alpha);
        let inv = 255 - a;
        let ch = |s: u8, n: u8| ((u32::from(s) * inv + u32::from(n) * a) / 255) as u8;
        Self {
            r: ch(self.r, new.r),
            g: ch(self.g, new.g),
            b: ch(self.b, new.b),
        }
    }

    /// Per-channel saturating addition.
    #[must_use]
    pub fn add_saturating(self, other: Self) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
        }
    }

    /// Scale every channel by `intensity / 255`, rounding down.
    #[must_use]
    pub fn dim(self, intensity: u8) -> Self {
        let i = u32::from(intensity);
        let ch = |c: u8| ((u32::from(c) * i) / 255) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }

    /// Parse the six hex digits `RRGGBB` (no prefix), case-insensitive.
    pub fn from_rgb_hex(s: &str) -> StripResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(StripError::malformed(s, "expected 6 hex digits"));
        }
        let byte = |i: usize| -> StripResult<u8> {
            let hi = hex_nibble(bytes[i]);
            let lo = hex_nibble(bytes[i + 1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(StripError::malformed(s, "invalid hex digit")),
            }
        };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
        })
    }

    /// Append the lowercase `rrggbb` digits to `out`.
    pub(crate) fn write_rgb_hex(self, out: &mut String) {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        for c in [self.r, self.g, self.b] {
            out.push(DIGITS[usize::from(c >> 4)] as char);
            out.push(DIGITS[usize::from(c & 0x0f)] as char);
        }
    }
}

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = StripError;

    /// Decode `#RRGGBB`.
    fn from_str(s: &str) -> StripResult<Self> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(StripError::malformed(s, "color must start with '#'"));
        };
        Self::from_rgb_hex(hex).map_err(|_| StripError::malformed(s, "expected #RRGGBB"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
