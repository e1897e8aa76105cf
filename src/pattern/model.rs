use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::foundation::color::Color;
use crate::foundation::frame::Frame;
use crate::pattern::leaf::{Rainbow, Repeated};
use crate::pattern::mixer::{
    Add, Chronometer, Crop, Dim, Gradient, Loop, PingPong, Rotate, Scale, Split, Subset,
    Transition,
};

/// Something that draws into a run of pixels at a point in time.
///
/// `render` never fails: empty buffers and absent children are no-ops.
/// Rendering twice with the same time yields the same pixels.
pub trait Render {
    /// Draw into `pixels` for the elapsed `time_ms`.
    fn render(&mut self, pixels: &mut [Color], time_ms: u32);
}

/// Private working buffer owned by one mixer.
///
/// Not part of a pattern's identity: clones start empty and every scratch
/// compares equal.
#[derive(Default)]
pub(crate) struct Scratch(Frame);

impl Clone for Scratch {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PartialEq for Scratch {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Scratch {}

impl Hash for Scratch {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl std::fmt::Debug for Scratch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scratch({})", self.0.len())
    }
}

impl Deref for Scratch {
    type Target = Frame;

    fn deref(&self) -> &Frame {
        &self.0
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut Frame {
        &mut self.0
    }
}

/// Every pattern the engine knows, leaves first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Solid color over the whole buffer.
    Color(Color),
    /// Fixed pixels, copied from the start of the buffer.
    Frame(Frame),
    /// Visible spectrum from red to violet.
    Rainbow(Rainbow),
    /// A frame tiled across the buffer.
    Repeated(Repeated),
    /// Blend two children across the buffer.
    Gradient(Gradient),
    /// Two children side by side.
    Split(Split),
    /// One-shot fade from one child to another.
    Transition(Transition),
    /// Cycle through children with fades.
    Loop(Loop),
    /// Circular shift of a child.
    Rotate(Rotate),
    /// Second, minute and hour markers.
    Chronometer(Chronometer),
    /// A bouncing trail.
    PingPong(PingPong),
    /// Drop pixels at both ends of a child.
    Crop(Crop),
    /// Draw a child into part of the buffer only.
    Subset(Subset),
    /// Dim a child.
    Dim(Dim),
    /// Saturating sum of children.
    Add(Add),
    /// Render a child at another resolution and resample.
    Scale(Scale),
}

impl Pattern {
    /// The `_type` name of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Color(_) => "Color",
            Self::Frame(_) => "Frame",
            Self::Rainbow(_) => "Rainbow",
            Self::Repeated(_) => "Repeated",
            Self::Gradient(_) => "Gradient",
            Self::Split(_) => "Split",
            Self::Transition(_) => "Transition",
            Self::Loop(_) => "Loop",
            Self::Rotate(_) => "Rotate",
            Self::Chronometer(_) => "Chronometer",
            Self::PingPong(_) => "PingPong",
            Self::Crop(_) => "Crop",
            Self::Subset(_) => "Subset",
            Self::Dim(_) => "Dim",
            Self::Add(_) => "Add",
            Self::Scale(_) => "Scale",
        }
    }
}

impl Render for Pattern {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        match self {
            Self::Color(p) => p.render(pixels, time_ms),
            Self::Frame(p) => p.render(pixels, time_ms),
            Self::Rainbow(p) => p.render(pixels, time_ms),
            Self::Repeated(p) => p.render(pixels, time_ms),
            Self::Gradient(p) => p.render(pixels, time_ms),
            Self::Split(p) => p.render(pixels, time_ms),
            Self::Transition(p) => p.render(pixels, time_ms),
            Self::Loop(p) => p.render(pixels, time_ms),
            Self::Rotate(p) => p.render(pixels, time_ms),
            Self::Chronometer(p) => p.render(pixels, time_ms),
            Self::PingPong(p) => p.render(pixels, time_ms),
            Self::Crop(p) => p.render(pixels, time_ms),
            Self::Subset(p) => p.render(pixels, time_ms),
            Self::Dim(p) => p.render(pixels, time_ms),
            Self::Add(p) => p.render(pixels, time_ms),
            Self::Scale(p) => p.render(pixels, time_ms),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Pattern {
                fn from(p: $variant) -> Self {
                    Self::$variant(p)
                }
            }

            impl From<$variant> for SPattern {
                fn from(p: $variant) -> Self {
                    Self::new(Pattern::$variant(p))
                }
            }
        )*
    };
}

impl_from_variant!(
    Color,
    Frame,
    Rainbow,
    Repeated,
    Gradient,
    Split,
    Transition,
    Loop,
    Rotate,
    Chronometer,
    PingPong,
    Crop,
    Subset,
    Dim,
    Add,
    Scale,
);

/// Serializable holder for an optional [`Pattern`].
///
/// Rendering an absent pattern leaves the buffer untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SPattern(pub Option<Box<Pattern>>);

impl SPattern {
    /// Wrap a pattern.
    pub fn new(p: Pattern) -> Self {
        Self(Some(Box::new(p)))
    }

    /// The absent holder.
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Whether no pattern is held.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the held pattern.
    pub fn get(&self) -> Option<&Pattern> {
        self.0.as_deref()
    }
}

impl Render for SPattern {
    fn render(&mut self, pixels: &mut [Color], time_ms: u32) {
        if let Some(p) = self.0.as_deref_mut() {
            p.render(pixels, time_ms);
        }
    }
}

impl From<Pattern> for SPattern {
    fn from(p: Pattern) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/model.rs"]
mod tests;
