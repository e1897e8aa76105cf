use serde_json::Value as Json;

use crate::codec::fields::{FieldWriter, Fields};
use crate::codec::registry::{Registry, RegistryBuilder};
use crate::foundation::color::Color;
use crate::foundation::error::StripResult;
use crate::foundation::frame::Frame;
use crate::pattern::leaf::{Rainbow, Repeated};
use crate::pattern::mixer::{
    Add, Chronometer, Crop, Dim, Gradient, Loop, PingPong, Rotate, Scale, Split, Subset,
    Transition,
};
use crate::pattern::model::{Pattern, SPattern};
use crate::value::literal;
use crate::value::model::{SValue, Value};

/// Text form of one pattern variant.
///
/// A variant with a literal form encodes as that string; every other
/// variant encodes as an object of its fields tagged with `_type`.
pub trait TextCodec: Sized {
    /// The `_type` tag.
    const TYPE_NAME: &'static str;

    /// The literal string form, for variants that have one.
    fn to_literal(&self) -> Option<String> {
        None
    }

    /// Write the structural fields.
    fn write_fields(&self, out: &mut FieldWriter);

    /// Read the structural fields; missing fields take their defaults.
    fn read_fields(fields: &Fields<'_>) -> StripResult<Self>;

    /// The most specific JSON form.
    fn to_json(&self) -> Json {
        match self.to_literal() {
            Some(s) => Json::String(s),
            None => {
                let mut out = FieldWriter::new();
                self.write_fields(&mut out);
                out.finish(Self::TYPE_NAME)
            }
        }
    }
}

impl TextCodec for Color {
    const TYPE_NAME: &'static str = "Color";

    fn to_literal(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.int("R", self.r).int("G", self.g).int("B", self.b);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self::new(f.u8("R")?, f.u8("G")?, f.u8("B")?))
    }
}

impl TextCodec for Frame {
    const TYPE_NAME: &'static str = "Frame";

    fn to_literal(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.frame("Pixels", self);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        f.frame("Pixels")
    }
}

impl TextCodec for Rainbow {
    const TYPE_NAME: &'static str = "Rainbow";

    fn to_literal(&self) -> Option<String> {
        Some(Self::TYPE_NAME.to_owned())
    }

    fn write_fields(&self, _: &mut FieldWriter) {}

    fn read_fields(_: &Fields<'_>) -> StripResult<Self> {
        Ok(Self::new())
    }
}

impl TextCodec for Repeated {
    const TYPE_NAME: &'static str = "Repeated";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.frame("Frame", &self.frame);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            frame: f.frame("Frame")?,
        })
    }
}

impl TextCodec for Gradient {
    const TYPE_NAME: &'static str = "Gradient";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Left", &self.left)
            .pattern("Right", &self.right)
            .curve("Curve", self.curve);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            left: f.pattern("Left")?,
            right: f.pattern("Right")?,
            curve: f.curve("Curve")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Split {
    const TYPE_NAME: &'static str = "Split";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Left", &self.left)
            .pattern("Right", &self.right)
            .value("Offset", &self.offset);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            left: f.pattern("Left")?,
            right: f.pattern("Right")?,
            offset: f.value("Offset")?,
        })
    }
}

impl TextCodec for Transition {
    const TYPE_NAME: &'static str = "Transition";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Before", &self.before)
            .pattern("After", &self.after)
            .int("OffsetMS", self.offset_ms)
            .int("TransitionMS", self.transition_ms)
            .curve("Curve", self.curve);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            before: f.pattern("Before")?,
            after: f.pattern("After")?,
            offset_ms: f.u32("OffsetMS")?,
            transition_ms: f.u32("TransitionMS")?,
            curve: f.curve("Curve")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Loop {
    const TYPE_NAME: &'static str = "Loop";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.patterns("Patterns", &self.patterns)
            .int("ShowMS", self.show_ms)
            .int("TransitionMS", self.transition_ms)
            .curve("Curve", self.curve);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            patterns: f.patterns("Patterns")?,
            show_ms: f.u32("ShowMS")?,
            transition_ms: f.u32("TransitionMS")?,
            curve: f.curve("Curve")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Rotate {
    const TYPE_NAME: &'static str = "Rotate";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .moves("MovePerHour", &self.move_per_hour);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            move_per_hour: f.moves("MovePerHour")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Chronometer {
    const TYPE_NAME: &'static str = "Chronometer";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            ..Default::default()
        })
    }
}

impl TextCodec for PingPong {
    const TYPE_NAME: &'static str = "PingPong";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .moves("MovePerHour", &self.move_per_hour);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            move_per_hour: f.moves("MovePerHour")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Crop {
    const TYPE_NAME: &'static str = "Crop";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .value("Before", &self.before)
            .value("After", &self.after);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            before: f.value("Before")?,
            after: f.value("After")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Subset {
    const TYPE_NAME: &'static str = "Subset";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .value("Offset", &self.offset)
            .value("Length", &self.length);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            offset: f.value("Offset")?,
            length: f.value("Length")?,
        })
    }
}

impl TextCodec for Dim {
    const TYPE_NAME: &'static str = "Dim";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .value("Intensity", &self.intensity);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            intensity: f.value("Intensity")?,
        })
    }
}

impl TextCodec for Add {
    const TYPE_NAME: &'static str = "Add";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.patterns("Patterns", &self.patterns);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            patterns: f.patterns("Patterns")?,
            ..Default::default()
        })
    }
}

impl TextCodec for Scale {
    const TYPE_NAME: &'static str = "Scale";

    fn write_fields(&self, out: &mut FieldWriter) {
        out.pattern("Child", &self.child)
            .interpolation("Interpolation", self.interpolation)
            .value("RatioMilli", &self.ratio_milli);
    }

    fn read_fields(f: &Fields<'_>) -> StripResult<Self> {
        Ok(Self {
            child: f.pattern("Child")?,
            interpolation: f.interpolation("Interpolation")?,
            ratio_milli: f.value("RatioMilli")?,
            ..Default::default()
        })
    }
}

impl Pattern {
    /// The most specific JSON form of this pattern.
    pub fn to_json(&self) -> Json {
        match self {
            Self::Color(p) => p.to_json(),
            Self::Frame(p) => p.to_json(),
            Self::Rainbow(p) => p.to_json(),
            Self::Repeated(p) => p.to_json(),
            Self::Gradient(p) => p.to_json(),
            Self::Split(p) => p.to_json(),
            Self::Transition(p) => p.to_json(),
            Self::Loop(p) => p.to_json(),
            Self::Rotate(p) => p.to_json(),
            Self::Chronometer(p) => p.to_json(),
            Self::PingPong(p) => p.to_json(),
            Self::Crop(p) => p.to_json(),
            Self::Subset(p) => p.to_json(),
            Self::Dim(p) => p.to_json(),
            Self::Add(p) => p.to_json(),
            Self::Scale(p) => p.to_json(),
        }
    }
}

impl SPattern {
    /// JSON form of the holder; absent encodes as `{}`.
    pub fn to_json(&self) -> Json {
        self.get()
            .map_or_else(|| Json::Object(Default::default()), Pattern::to_json)
    }

    /// Compact JSON text.
    pub fn encode(&self) -> String {
        self.to_json().to_string()
    }

    /// Decode JSON text through the standard registry.
    pub fn decode(text: &str) -> StripResult<Self> {
        Registry::standard().pattern_from_str(text)
    }

    /// Replace the held pattern with the decoded `text`. On failure the
    /// holder is left as it was.
    pub fn load(&mut self, text: &str) -> StripResult<()> {
        *self = Self::decode(text)?;
        Ok(())
    }
}

impl Value {
    /// The most specific JSON form: a number for constants, the literal
    /// when there is one, otherwise the tagged object.
    pub fn to_json(&self) -> Json {
        if let Self::Const(c) = self {
            return Json::from(*c);
        }
        if let Some(s) = literal::format(self) {
            return Json::String(s);
        }
        let mut out = FieldWriter::new();
        match self {
            Self::OpAdd { l, r }
            | Self::OpSub { l, r }
            | Self::OpMul { l, r }
            | Self::OpMod { l, r } => {
                out.value("L", l).value("R", r);
            }
            Self::OpStep { v } | Self::OpGroup { v } => {
                out.value("V", v);
            }
            Self::Rand { tick_ms } => {
                out.int("TickMS", *tick_ms);
            }
            Self::Percent(n) | Self::Const(n) => {
                out.int("V", *n);
            }
            Self::TimeMs | Self::Length => {}
        }
        out.finish(self.type_name())
    }
}

impl SValue {
    /// JSON form of the holder; absent encodes as `0`.
    pub fn to_json(&self) -> Json {
        self.get().map_or_else(|| Json::from(0), Value::to_json)
    }

    /// Compact JSON text.
    pub fn encode(&self) -> String {
        self.to_json().to_string()
    }

    /// Decode JSON text through the standard registry.
    pub fn decode(text: &str) -> StripResult<Self> {
        Registry::standard().value_from_str(text)
    }

    /// Replace the held value with the decoded `text`. On failure the
    /// holder is left as it was.
    pub fn load(&mut self, text: &str) -> StripResult<()> {
        *self = Self::decode(text)?;
        Ok(())
    }
}

fn decode_as<T: TextCodec + Into<Pattern>>(f: &Fields<'_>) -> StripResult<Pattern> {
    T::read_fields(f).map(Into::into)
}

fn rainbow_literal(s: &str) -> Option<StripResult<Pattern>> {
    (s == Rainbow::TYPE_NAME).then(|| Ok(Rainbow::new().into()))
}

fn color_literal(s: &str) -> Option<StripResult<Pattern>> {
    s.starts_with('#')
        .then(|| s.parse::<Color>().map(Pattern::Color))
}

fn frame_literal(s: &str) -> Option<StripResult<Pattern>> {
    s.starts_with('L')
        .then(|| s.parse::<Frame>().map(Pattern::Frame))
}

fn binary(f: &Fields<'_>) -> StripResult<(SValue, SValue)> {
    Ok((f.value("L")?, f.value("R")?))
}

fn unary(f: &Fields<'_>) -> StripResult<SValue> {
    f.value("V")
}

/// Register every built-in pattern and value variant.
pub(crate) fn register_standard(b: RegistryBuilder) -> RegistryBuilder {
    let b = literal::RULES.iter().fold(b, |b, rule| b.value_literal(*rule));
    b.pattern_literal(rainbow_literal)
        .pattern_literal(color_literal)
        .pattern_literal(frame_literal)
        .pattern(Color::TYPE_NAME, decode_as::<Color>)
        .pattern(Frame::TYPE_NAME, decode_as::<Frame>)
        .pattern(Rainbow::TYPE_NAME, decode_as::<Rainbow>)
        .pattern(Repeated::TYPE_NAME, decode_as::<Repeated>)
        .pattern(Gradient::TYPE_NAME, decode_as::<Gradient>)
        .pattern(Split::TYPE_NAME, decode_as::<Split>)
        .pattern(Transition::TYPE_NAME, decode_as::<Transition>)
        .pattern(Loop::TYPE_NAME, decode_as::<Loop>)
        .pattern(Rotate::TYPE_NAME, decode_as::<Rotate>)
        .pattern(Chronometer::TYPE_NAME, decode_as::<Chronometer>)
        .pattern(PingPong::TYPE_NAME, decode_as::<PingPong>)
        .pattern(Crop::TYPE_NAME, decode_as::<Crop>)
        .pattern(Subset::TYPE_NAME, decode_as::<Subset>)
        .pattern(Dim::TYPE_NAME, decode_as::<Dim>)
        .pattern(Add::TYPE_NAME, decode_as::<Add>)
        .pattern(Scale::TYPE_NAME, decode_as::<Scale>)
        .value("TimeMS", |_| Ok(Value::TimeMs))
        .value("Length", |_| Ok(Value::Length))
        .value("Const", |f| f.i32("V").map(Value::Const))
        .value("Percent", |f| f.i32("V").map(Value::Percent))
        .value("OpAdd", |f| binary(f).map(|(l, r)| Value::OpAdd { l, r }))
        .value("OpSub", |f| binary(f).map(|(l, r)| Value::OpSub { l, r }))
        .value("OpMul", |f| binary(f).map(|(l, r)| Value::OpMul { l, r }))
        .value("OpMod", |f| binary(f).map(|(l, r)| Value::OpMod { l, r }))
        .value("OpStep", |f| unary(f).map(|v| Value::OpStep { v }))
        .value("OpGroup", |f| unary(f).map(|v| Value::OpGroup { v }))
        .value("Rand", |f| f.i32("TickMS").map(|tick_ms| Value::Rand { tick_ms }))
}

#[cfg(test)]
#[path = "../../tests/unit/codec/text.rs"]
mod tests;
