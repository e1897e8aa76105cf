use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::foundation::color::Color;
use crate::foundation::error::StripResult;
use crate::foundation::frame::Frame;
use crate::pattern::model::{Render, SPattern};

const DEFAULT_PIXELS: usize = 150;

fn default_pixels() -> usize {
    DEFAULT_PIXELS
}

/// Serializable description of one strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StripConfig {
    /// Number of pixels on the strip.
    #[serde(default = "default_pixels")]
    pub pixels: usize,
    /// The pattern shown on the strip.
    #[serde(default)]
    pub pattern: SPattern,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pixels: DEFAULT_PIXELS,
            pattern: SPattern::absent(),
        }
    }
}

impl StripConfig {
    /// Parse a configuration document.
    pub fn from_json(text: &str) -> StripResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One strip: a pattern tree and the frame it renders into.
///
/// A driver calls [`Strip::render`] once per tick and ships the frame.
#[derive(Clone, Debug, Default)]
pub struct Strip {
    pattern: SPattern,
    frame: Frame,
}

impl Strip {
    /// A strip of `pixels` black pixels showing nothing.
    pub fn new(pixels: usize) -> Self {
        Self {
            pattern: SPattern::absent(),
            frame: Frame::black(pixels),
        }
    }

    /// A strip set up from a configuration.
    pub fn from_config(config: StripConfig) -> Self {
        Self {
            pattern: config.pattern,
            frame: Frame::black(config.pixels),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> StripConfig {
        StripConfig {
            pixels: self.frame.len(),
            pattern: self.pattern.clone(),
        }
    }

    /// The pattern shown.
    pub fn pattern(&self) -> &SPattern {
        &self.pattern
    }

    /// Swap in a pattern tree.
    pub fn set_pattern(&mut self, pattern: SPattern) {
        self.pattern = pattern;
    }

    /// Replace the pattern with one decoded from JSON text. On failure the
    /// current pattern stays.
    #[tracing::instrument(skip(self, text), fields(pixels = self.frame.len()))]
    pub fn load(&mut self, text: &str) -> StripResult<()> {
        let pattern = SPattern::decode(text)?;
        tracing::debug!(
            from = self.pattern.get().map_or("none", |p| p.type_name()),
            to = pattern.get().map_or("none", |p| p.type_name()),
            "replacing pattern"
        );
        self.pattern = pattern;
        Ok(())
    }

    /// Number of pixels.
    pub fn pixels(&self) -> usize {
        self.frame.len()
    }

    /// Resize the strip; pixels are cleared.
    pub fn set_pixels(&mut self, pixels: usize) {
        self.frame.reset(pixels);
    }

    /// Render the pattern for `time_ms` and return the frame.
    ///
    /// The frame is cleared first so an absent pattern shows black.
    pub fn render(&mut self, time_ms: u32) -> &Frame {
        self.frame.fill(Color::BLACK);
        self.pattern.render(&mut self.frame, time_ms);
        &self.frame
    }

    /// The pattern as JSON.
    pub fn pattern_json(&self) -> Json {
        self.pattern.to_json()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/strip.rs"]
mod tests;
