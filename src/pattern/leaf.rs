use crate::foundation::color::Color;
use crate::foundation::frame::Frame;
use crate::pattern::model::{Render, Scratch};

impl Render for Color {
    fn render(&mut self, pixels: &mut [Color], _time_ms: u32) {
        pixels.fill(*self);
    }
}

impl Render for Frame {
    /// Copies as many pixels as both sides hold; the rest is left alone.
    fn render(&mut self, pixels: &mut [Color], _time_ms: u32) {
        let n = pixels.len().min(self.len());
        pixels[..n].copy_from_slice(&self[..n]);
    }
}

const VIOLET_NM: i32 = 380;
const RED_NM: i32 = 781;

/// The visible spectrum from violet at pixel 0 to red, spread
/// logarithmically so the violet end gets more pixels.
///
/// The spectrum is computed once per buffer length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rainbow {
    cache: Scratch,
}

impl Rainbow {
    /// A rainbow with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Render for Rainbow {
    fn render(&mut self, pixels: &mut [Color], _time_ms: u32) {
        let n = pixels.len();
        if self.cache.len() != n {
            self.cache.reset(n);
            let scale = std::f32::consts::LN_2;
            let step = 1.0 / n as f32;
            for (i, c) in self.cache.iter_mut().enumerate() {
                let j = ((n - i - 1) as f32 * step).ln_1p() / scale;
                let nm = VIOLET_NM as f32 + (RED_NM - VIOLET_NM) as f32 * (1.0 - j);
                *c = wavelength_to_rgb(nm as i32);
            }
        }
        pixels.copy_from_slice(&self.cache);
    }
}

/// Approximate color of a wavelength in nanometers; black outside
/// `[380, 781)`.
pub(crate) fn wavelength_to_rgb(w: i32) -> Color {
    let ch = |v: i32| v.clamp(0, 255) as u8;
    match w {
        ..380 => Color::BLACK,
        380..420 => Color::new(
            ch(196 - (170 * (440 - w)) / (440 - 380)),
            0,
            ch(26 + (229 * (w - 380)) / (420 - 380)),
        ),
        420..440 => Color::new(ch((0x89 * (440 - w)) / (440 - 420)), 0, 255),
        440..490 => Color::new(0, ch((255 * (w - 440)) / (490 - 440)), 255),
        490..510 => Color::new(0, 255, ch((255 * (510 - w)) / (510 - 490))),
        510..580 => Color::new(ch((255 * (w - 510)) / (580 - 510)), 255, 0),
        580..645 => Color::new(255, ch((255 * (645 - w)) / (645 - 580)), 0),
        645..700 => Color::new(255, 0, 0),
        700..RED_NM => Color::new(ch(26 + (229 * (780 - w)) / (780 - 700)), 0, 0),
        _ => Color::BLACK,
    }
}

/// A frame tiled from pixel 0 across the whole buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Repeated {
    /// The tile.
    pub frame: Frame,
}

impl Render for Repeated {
    fn render(&mut self, pixels: &mut [Color], _time_ms: u32) {
        if self.frame.is_empty() {
            return;
        }
        for chunk in pixels.chunks_mut(self.frame.len()) {
            chunk.copy_from_slice(&self.frame[..chunk.len()]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/leaf.rs"]
mod tests;
