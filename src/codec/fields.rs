//! Structural fields of a tagged object, read and written by name.
//!
//! Missing fields read as their default, so `{"_type":"Dim"}` is a `Dim`
//! with an absent child and intensity. A field that is present with the
//! wrong JSON kind is an [`StripError::InvalidField`].

use serde_json::{Map, Value as Json};

use crate::codec::registry::{Registry, json_kind};
use crate::curve::ease::Curve;
use crate::curve::interpolation::Interpolation;
use crate::foundation::error::{StripError, StripResult};
use crate::foundation::frame::Frame;
use crate::pattern::model::SPattern;
use crate::value::model::SValue;
use crate::value::moves::MovePerHour;

/// Read access to the fields of one tagged object.
///
/// Nested holders decode through the same [`Registry`] that dispatched the
/// object.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Json>,
    registry: &'a Registry,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(map: &'a Map<String, Json>, registry: &'a Registry) -> Self {
        Self { map, registry }
    }

    /// The registry nested holders decode through.
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The raw JSON of a field; `null` counts as missing.
    pub fn raw(&self, name: &str) -> Option<&'a Json> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    /// A nested pattern holder; missing means absent.
    pub fn pattern(&self, name: &str) -> StripResult<SPattern> {
        match self.raw(name) {
            None => Ok(SPattern::absent()),
            Some(json) => self
                .registry
                .decode_pattern(json)
                .map_err(|e| e.within(name)),
        }
    }

    /// A list of pattern holders; missing means empty.
    pub fn patterns(&self, name: &str) -> StripResult<Vec<SPattern>> {
        match self.raw(name) {
            None => Ok(Vec::new()),
            Some(Json::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, json)| {
                    self.registry
                        .decode_pattern(json)
                        .map_err(|e| e.within(&format!("{name}[{i}]")))
                })
                .collect(),
            Some(other) => Err(invalid(name, "an array", other)),
        }
    }

    /// A nested value holder; missing means absent.
    pub fn value(&self, name: &str) -> StripResult<SValue> {
        match self.raw(name) {
            None => Ok(SValue::absent()),
            Some(json) => self
                .registry
                .decode_value(json)
                .map_err(|e| e.within(name)),
        }
    }

    /// A movement rate, stored as a value holder.
    pub fn moves(&self, name: &str) -> StripResult<MovePerHour> {
        self.value(name).map(MovePerHour)
    }

    /// An unsigned 32-bit integer; missing means 0.
    pub fn u32(&self, name: &str) -> StripResult<u32> {
        self.integer(name)
    }

    /// A signed 32-bit integer; missing means 0.
    pub fn i32(&self, name: &str) -> StripResult<i32> {
        self.integer(name)
    }

    /// A byte; missing means 0.
    pub fn u8(&self, name: &str) -> StripResult<u8> {
        self.integer(name)
    }

    /// An easing curve by name; missing means the default curve. Unknown
    /// names fall back to the default as well.
    pub fn curve(&self, name: &str) -> StripResult<Curve> {
        self.name(name)
            .map(|s| s.map(Curve::from_name).unwrap_or_default())
    }

    /// An interpolation by name; missing or unknown means `nearest`.
    pub fn interpolation(&self, name: &str) -> StripResult<Interpolation> {
        self.name(name)
            .map(|s| s.map(Interpolation::from_name).unwrap_or_default())
    }

    /// A frame in its `L...` form; missing means empty.
    pub fn frame(&self, name: &str) -> StripResult<Frame> {
        match self.name(name)? {
            None => Ok(Frame::new()),
            Some(s) => s.parse().map_err(|e: StripError| {
                StripError::field(name, e.to_string())
            }),
        }
    }

    fn name(&self, name: &str) -> StripResult<Option<&'a str>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Json::String(s)) => Ok(Some(s)),
            Some(other) => Err(invalid(name, "a string", other)),
        }
    }

    fn integer<T: TryFrom<i64> + Default>(&self, name: &str) -> StripResult<T> {
        let Some(json) = self.raw(name) else {
            return Ok(T::default());
        };
        let n = json
            .as_i64()
            .ok_or_else(|| invalid(name, "an integer", json))?;
        T::try_from(n).map_err(|_| {
            StripError::field(
                name,
                format!("{n} is out of range for {}", std::any::type_name::<T>()),
            )
        })
    }
}

fn invalid(name: &str, expected: &str, got: &Json) -> StripError {
    StripError::field(name, format!("expected {expected}, got {}", json_kind(got)))
}

/// Builds the JSON object of one tagged variant.
///
/// Every field is written, defaults included, so an encoded tree shows its
/// full shape. Keys come out sorted.
#[derive(Debug, Default)]
pub struct FieldWriter {
    map: Map<String, Json>,
}

impl FieldWriter {
    /// An empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw JSON field.
    pub fn raw(&mut self, name: &str, json: Json) -> &mut Self {
        self.map.insert(name.to_owned(), json);
        self
    }

    /// Write a nested pattern holder.
    pub fn pattern(&mut self, name: &str, p: &SPattern) -> &mut Self {
        self.raw(name, p.to_json())
    }

    /// Write a list of pattern holders.
    pub fn patterns(&mut self, name: &str, ps: &[SPattern]) -> &mut Self {
        self.raw(name, Json::Array(ps.iter().map(SPattern::to_json).collect()))
    }

    /// Write a nested value holder.
    pub fn value(&mut self, name: &str, v: &SValue) -> &mut Self {
        self.raw(name, v.to_json())
    }

    /// Write a movement rate.
    pub fn moves(&mut self, name: &str, m: &MovePerHour) -> &mut Self {
        self.value(name, &m.0)
    }

    /// Write an integer.
    pub fn int(&mut self, name: &str, n: impl Into<i64>) -> &mut Self {
        self.raw(name, Json::from(n.into()))
    }

    /// Write a curve name.
    pub fn curve(&mut self, name: &str, c: Curve) -> &mut Self {
        self.raw(name, Json::from(c.name()))
    }

    /// Write an interpolation name.
    pub fn interpolation(&mut self, name: &str, i: Interpolation) -> &mut Self {
        self.raw(name, Json::from(i.name()))
    }

    /// Write a frame in its `L...` form.
    pub fn frame(&mut self, name: &str, f: &Frame) -> &mut Self {
        self.raw(name, Json::from(f.to_string()))
    }

    /// Add the `_type` tag and produce the object.
    pub fn finish(mut self, type_name: &str) -> Json {
        self.map.insert("_type".to_owned(), Json::from(type_name));
        Json::Object(self.map)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/fields.rs"]
mod tests;
