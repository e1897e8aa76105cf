//! stripfx is a pattern engine for one-dimensional LED strips.
//!
//! A pattern is a tree: leaves produce pixels (a solid [`Color`], a fixed
//! [`Frame`], a [`Rainbow`]) and mixers combine or transform their children
//! (fades, rotation, bouncing trails, cropping, resampling). Numeric
//! parameters are [`Value`] expressions over elapsed time and strip length,
//! so the same tree animates on any strip.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: JSON text -> [`SPattern`] through the [`Registry`]
//! 2. **Render**: `SPattern + time_ms -> pixels` via [`Render`]
//! 3. **Ship** (external): [`Frame::to_rgb`] packs bytes for a transport
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure in time**: rendering twice at the same `time_ms` gives the same
//!   pixels; mixers keep only scratch buffers between calls.
//! - **Render never fails**: empty buffers and absent children are no-ops.
//!   Only decoding returns errors ([`StripError`]).
//!
//! # Wire format
//!
//! Leaves with a literal form encode as strings (`"#010203"`,
//! `"L010203040506"`, `"Rainbow"`), values as numbers or literals (`"t"`,
//! `"50%"`, `"%1000"`), and everything else as an object tagged with
//! `_type`:
//!
//! ```
//! use stripfx::{Color, Dim, SPattern};
//!
//! let p: SPattern = Dim {
//!     child: Color::new(0x60, 0x60, 0x60).into(),
//!     intensity: 127.into(),
//! }
//! .into();
//! assert_eq!(
//!     p.encode(),
//!     r##"{"Child":"#606060","Intensity":127,"_type":"Dim"}"##
//! );
//! assert_eq!(SPattern::decode(&p.encode()).unwrap(), p);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod curve;
mod foundation;
mod pattern;
mod session;
mod value;

pub use codec::fields::{FieldWriter, Fields};
pub use codec::registry::{FieldDecoder, LiteralRule, Registry, RegistryBuilder};
pub use codec::text::TextCodec;
pub use curve::ease::Curve;
pub use curve::interpolation::Interpolation;
pub use foundation::color::Color;
pub use foundation::error::{StripError, StripResult};
pub use foundation::frame::{Frame, PixelSpan};
pub use pattern::leaf::{Rainbow, Repeated};
pub use pattern::mixer::{
    Add, Chronometer, Crop, Dim, Gradient, Loop, PingPong, Rotate, Scale, Split, Subset,
    Transition,
};
pub use pattern::model::{Pattern, Render, SPattern};
pub use session::strip::{Strip, StripConfig};
pub use value::literal::{format as format_value_literal, parse as parse_value_literal};
pub use value::model::{DEFAULT_RAND_TICK_MS, SValue, Value};
pub use value::moves::MovePerHour;
