//! Patterns built from other patterns.
//!
//! Each mixer owns the scratch buffers it needs and resizes them on demand.
//! Children always see the caller's time except where a mixer documents a
//! shift.

use crate::curve::ease::Curve;
use crate::curve::interpolation::Interpolation;
use crate::foundation::color::Color;
use crate::foundation::frame::PixelSpan;
use crate::foundation::math::{clamp_index, len_i32};
use crate::pattern::model::{Pattern, Render, SPattern, Scratch};
use crate::value::model::SValue;
use crate::value::moves::MovePerHour;

/// Blend from `left` at pixel 0 to `right` at the last pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gradient {
    /// Drawn at the start.
    pub left: SPattern,
    /// Drawn at the end.
    pub right: SPattern,
    /// Shape of the blend.
    pub curve: Curve,
    pub(crate) buf: Scratch,
}

impl Render for Gradient {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        if n == 0 {
            return;
        }
        self.buf.reset(n);
        self.left.render(pixels, time_ms);
        self.right.render(&mut self.buf, time_ms);
        if n == 1 {
            pixels.mix(&self.buf, self.curve.scale8(u16::MAX >> 1));
            return;
        }
        let max = (n - 1) as u64;
        for (i, (p, r)) in pixels.iter_mut().zip(self.buf.iter()).enumerate() {
            let intensity = (i as u64 * 65535 / max) as u16;
            *p = p.mix(*r, self.curve.scale8(intensity));
        }
    }
}

/// Two independent children side by side, split at `offset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Split {
    /// Drawn into `[0, offset)`.
    pub left: SPattern,
    /// Drawn into `[offset, n)`.
    pub right: SPattern,
    /// Split point, clamped to the buffer.
    pub offset: SValue,
}

impl Render for Split {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        let offset = clamp_index(
            i64::from(self.offset.eval(time_ms, len_i32(n))),
            0,
            n,
        );
        let (left, right) = pixels.split_at_mut(offset);
        if !left.is_empty() {
            self.left.render(left, time_ms);
        }
        if !right.is_empty() {
            self.right.render(right, time_ms);
        }
    }
}

/// One-shot change from `before` to `after`, starting at `offset_ms` and
/// fading for `transition_ms`.
///
/// `after` sees time shifted back by `offset_ms`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Shown until the transition starts.
    pub before: SPattern,
    /// Shown once it ends.
    pub after: SPattern,
    /// Start of the fade.
    pub offset_ms: u32,
    /// Length of the fade.
    pub transition_ms: u32,
    /// Shape of the fade.
    pub curve: Curve,
    pub(crate) buf: Scratch,
}

impl Render for Transition {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        if time_ms <= self.offset_ms {
            self.before.render(pixels, time_ms);
            return;
        }
        let elapsed = time_ms - self.offset_ms;
        self.after.render(pixels, elapsed);
        if elapsed >= self.transition_ms {
            if !self.buf.is_empty() {
                tracing::trace!("transition done, releasing scratch");
                self.buf.release();
            }
            return;
        }
        self.buf.reset(pixels.len());
        self.before.render(&mut self.buf, time_ms);
        let intensity =
            (u64::from(elapsed) * 65535 / u64::from(self.transition_ms)) as u16;
        pixels.mix(&self.buf, 255 - self.curve.scale8(intensity));
    }
}

/// Show each child for `show_ms`, then fade into the next over
/// `transition_ms`, forever.
///
/// Time is passed through unchanged, as if every child kept animating in
/// the background.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Loop {
    /// Shown in order.
    pub patterns: Vec<SPattern>,
    /// Time each child is shown alone.
    pub show_ms: u32,
    /// Time spent fading into the next child; may be 0.
    pub transition_ms: u32,
    /// Shape of the fade.
    pub curve: Curve,
    pub(crate) buf: Scratch,
}

impl Render for Loop {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let count = self.patterns.len() as u64;
        if count == 0 {
            return;
        }
        let cycle = u64::from(self.show_ms) + u64::from(self.transition_ms);
        if cycle == 0 {
            tracing::trace!("loop has a zero cycle, locked to the first pattern");
            self.patterns[0].render(pixels, time_ms);
            return;
        }
        let t = u64::from(time_ms);
        let base = t / cycle;
        let index = (base % count) as usize;
        self.patterns[index].render(pixels, time_ms);
        let offset = t - base * cycle;
        if offset <= u64::from(self.show_ms) {
            return;
        }

        self.buf.reset(pixels.len());
        let next = (index + 1) % self.patterns.len();
        self.patterns[next].render(&mut self.buf, time_ms);
        let into = offset - u64::from(self.show_ms);
        let transition = u64::from(self.transition_ms);
        let intensity = ((transition - into) * 65535 / transition) as u16;
        pixels.mix(&self.buf, self.curve.scale8(u16::MAX - intensity));
    }
}

/// Circular shift of a child, one pixel per move.
///
/// Negative rates shift toward pixel 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rotate {
    /// The pattern being rotated.
    pub child: SPattern,
    /// Pixel moves per hour.
    pub move_per_hour: MovePerHour,
    pub(crate) buf: Scratch,
}

impl Render for Rotate {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        if n == 0 {
            return;
        }
        self.buf.reset(n);
        self.child.render(&mut self.buf, time_ms);
        let len = len_i32(n);
        let mut offset = self.move_per_hour.eval_moves(time_ms, len, len);
        if offset < 0 {
            offset += len;
        }
        let offset = offset as usize;
        pixels[offset..].copy_from_slice(&self.buf[..n - offset]);
        pixels[..offset].copy_from_slice(&self.buf[n - offset..]);
    }
}

/// Clock hands: second, minute and hour markers over a background.
///
/// The child is rendered into four pixels read as
/// `[background, second, minute, hour]`. When markers share a pixel the hour
/// shows, then the minute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chronometer {
    /// Provides the four colors.
    pub child: SPattern,
    pub(crate) buf: Scratch,
}

impl Render for Chronometer {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        if n == 0 {
            return;
        }
        self.buf.reset(4);
        self.child.render(&mut self.buf, time_ms);

        let seconds = u64::from(time_ms / 1000);
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let len = n as u64;
        let sec_pos = (len * (seconds % 60) + 30) / 60;
        let min_pos = (len * (minutes % 60) + 30) / 60;
        let hour_pos = hours % len;

        pixels.fill(self.buf[0]);
        let markers = [
            (sec_pos, self.buf[1]),
            (min_pos, self.buf[2]),
            (hour_pos, self.buf[3]),
        ];
        for (pos, color) in markers {
            if let Some(p) = pixels.get_mut(pos as usize) {
                *p = color;
            }
        }
    }
}

/// A trail bouncing between both ends.
///
/// The child draws the trail along a round trip of `2n - 1` pixels with the
/// head at pixel 0; a full bounce takes `2(n - 1)` moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PingPong {
    /// The trail.
    pub child: SPattern,
    /// Head moves per hour.
    pub move_per_hour: MovePerHour,
    pub(crate) buf: Scratch,
}

impl Render for PingPong {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        if n == 0 {
            return;
        }
        self.buf.reset(n * 2 - 1);
        self.child.render(&mut self.buf, time_ms);
        if n == 1 {
            pixels[0] = self.buf[0];
            return;
        }
        // With a trail "01234567" on 8 pixels:
        //   move 0  -> "01234567"
        //   move 2  -> "21056789"
        //   move 7  -> "76543210"
        //   move 9  -> "98765012"
        //   move 13 -> "d0123456"
        let cycle = len_i32(n - 1).saturating_mul(2);
        let pos = self
            .move_per_hour
            .eval_moves(time_ms, len_i32(n), cycle)
            .rem_euclid(cycle) as usize;

        if pos >= n - 1 {
            // Head runs back toward pixel 0.
            let from_end = pos + 1 - n;
            let limit = n - from_end - 1;
            for (i, p) in pixels.iter_mut().enumerate() {
                *p = if i < limit {
                    self.buf[n - i + from_end - 1]
                } else {
                    self.buf[i - limit]
                };
            }
        } else {
            for (i, p) in pixels.iter_mut().enumerate() {
                *p = if i <= pos {
                    self.buf[pos - i]
                } else {
                    self.buf[pos + i]
                };
            }
        }
    }
}

/// Drop `before` pixels at the start and `after` pixels at the end of the
/// child, each clamped to `[0, 1000]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Crop {
    /// The cropped pattern.
    pub child: SPattern,
    /// Leading pixels to drop.
    pub before: SValue,
    /// Trailing pixels to drop.
    pub after: SValue,
    pub(crate) buf: Scratch,
}

impl Render for Crop {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        let len = len_i32(n);
        let before = self.before.eval(time_ms, len).clamp(0, 1000) as usize;
        let after = self.after.eval(time_ms, len).clamp(0, 1000) as usize;
        self.buf.reset(n + before + after);
        self.child.render(&mut self.buf, time_ms);
        pixels.copy_from_slice(&self.buf[before..before + n]);
    }
}

/// Draw the child into `[offset, offset + length)` only.
///
/// `offset` is clamped to `[0, n - 1]` and `length` to
/// `[0, n - 1 - offset]`; pixels outside are left as they were.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Subset {
    /// The pattern drawn into the window.
    pub child: SPattern,
    /// First pixel of the window.
    pub offset: SValue,
    /// Window size.
    pub length: SValue,
}

impl Render for Subset {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        if n == 0 || self.child.is_absent() {
            return;
        }
        let len = len_i32(n);
        let offset = clamp_index(i64::from(self.offset.eval(time_ms, len)), 0, n - 1);
        let length = clamp_index(
            i64::from(self.length.eval(time_ms, len)),
            0,
            n - 1 - offset,
        );
        self.child
            .render(&mut pixels[offset..offset + length], time_ms);
    }
}

/// Dim the child by `intensity / 255`, with `intensity` clamped to
/// `[0, 255]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dim {
    /// The dimmed pattern.
    pub child: SPattern,
    /// 0 is black, 255 keeps the original colors.
    pub intensity: SValue,
}

impl Render for Dim {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        self.child.render(pixels, time_ms);
        let i = self.intensity.eval(time_ms, len_i32(pixels.len())).clamp(0, 255);
        pixels.dim(i as u8);
    }
}

/// Saturating per-channel sum of every child.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Add {
    /// Summed in order; usually [`Dim`] children acting as weights.
    pub patterns: Vec<SPattern>,
    pub(crate) buf: Scratch,
}

impl Render for Add {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        pixels.fill(Color::BLACK);
        for p in &mut self.patterns {
            self.buf.reset(pixels.len());
            p.render(&mut self.buf, time_ms);
            pixels.add(&self.buf);
        }
    }
}

/// Render the child into `round(n * ratio_milli / 1000)` pixels, then
/// resample to the buffer.
///
/// When the child is a fixed [`Frame`](crate::Frame) and `ratio_milli` is 0,
/// the frame is resampled straight to the buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scale {
    /// The resampled pattern.
    pub child: SPattern,
    /// Resampling algorithm.
    pub interpolation: Interpolation,
    /// Child size relative to the buffer, in thousandths; clamped to
    /// `[1, 1_000_000]`.
    pub ratio_milli: SValue,
    pub(crate) buf: Scratch,
}

impl Render for Scale {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        let n = pixels.len();
        let ratio = self.ratio_milli.eval(time_ms, len_i32(n));
        if let Some(Pattern::Frame(f)) = self.child.get() {
            if ratio == 0 {
                self.interpolation.scale(f, pixels);
                return;
            }
        }
        let ratio = ratio.clamp(1, 1_000_000) as u64;
        let len = ((ratio * n as u64 + 500) / 1000) as usize;
        self.buf.reset(len);
        self.child.render(&mut self.buf, time_ms);
        self.interpolation.scale(&self.buf, pixels);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/mixer.rs"]
mod tests;
