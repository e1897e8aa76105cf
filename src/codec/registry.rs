use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::{Map, Value as Json};

use crate::codec::fields::Fields;
use crate::codec::text;
use crate::foundation::error::{StripError, StripResult};
use crate::pattern::model::{Pattern, SPattern};
use crate::value::model::{SValue, Value};

/// Decodes one literal form. `None` means the string is not this form;
/// `Some(Err(_))` means it is, but the payload is invalid.
pub type LiteralRule<T> = fn(&str) -> Option<StripResult<T>>;

/// Decodes the structural fields of one tagged variant.
pub type FieldDecoder<T> = fn(&Fields<'_>) -> StripResult<T>;

/// Name-to-decoder tables for every pattern and value variant, plus the
/// ordered literal rules.
///
/// Built once, then read-only. [`Registry::standard`] holds every variant
/// this crate defines; [`RegistryBuilder`] assembles custom subsets.
pub struct Registry {
    pattern_literals: Vec<LiteralRule<Pattern>>,
    value_literals: Vec<LiteralRule<Value>>,
    patterns: BTreeMap<&'static str, FieldDecoder<Pattern>>,
    values: BTreeMap<&'static str, FieldDecoder<Value>>,
}

/// Accumulates registrations for a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    pattern_literals: Vec<LiteralRule<Pattern>>,
    value_literals: Vec<LiteralRule<Value>>,
    patterns: BTreeMap<&'static str, FieldDecoder<Pattern>>,
    values: BTreeMap<&'static str, FieldDecoder<Value>>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern literal rule; rules are tried in registration order.
    pub fn pattern_literal(mut self, rule: LiteralRule<Pattern>) -> Self {
        self.pattern_literals.push(rule);
        self
    }

    /// Append a value literal rule; rules are tried in registration order.
    pub fn value_literal(mut self, rule: LiteralRule<Value>) -> Self {
        self.value_literals.push(rule);
        self
    }

    /// Register the tagged form of a pattern variant. A later registration
    /// of the same name replaces the earlier one.
    pub fn pattern(mut self, name: &'static str, decode: FieldDecoder<Pattern>) -> Self {
        self.patterns.insert(name, decode);
        self
    }

    /// Register the tagged form of a value variant.
    pub fn value(mut self, name: &'static str, decode: FieldDecoder<Value>) -> Self {
        self.values.insert(name, decode);
        self
    }

    /// Freeze the registrations.
    pub fn build(self) -> Registry {
        Registry {
            pattern_literals: self.pattern_literals,
            value_literals: self.value_literals,
            patterns: self.patterns,
            values: self.values,
        }
    }
}

impl Registry {
    /// Start an empty registration.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry of every built-in variant, built on first use.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let reg = text::register_standard(Self::builder()).build();
            tracing::debug!(
                patterns = reg.patterns.len(),
                values = reg.values.len(),
                pattern_literals = reg.pattern_literals.len(),
                value_literals = reg.value_literals.len(),
                "built standard registry"
            );
            reg
        })
    }

    /// Registered pattern `_type` names, sorted.
    pub fn pattern_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    /// Registered value `_type` names, sorted.
    pub fn value_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// A pattern variant with every field at its default.
    pub fn default_pattern(&self, name: &str) -> StripResult<Pattern> {
        let decode = self
            .patterns
            .get(name)
            .ok_or_else(|| StripError::unknown_type(name))?;
        decode(&Fields::new(&Map::new(), self))
    }

    /// A value variant with every field at its default.
    pub fn default_value(&self, name: &str) -> StripResult<Value> {
        let decode = self
            .values
            .get(name)
            .ok_or_else(|| StripError::unknown_type(name))?;
        decode(&Fields::new(&Map::new(), self))
    }

    /// Decode a pattern holder from a JSON tree.
    ///
    /// Strings go through the literal rules, objects through their `_type`;
    /// `null` and `{}` decode as absent.
    pub fn decode_pattern(&self, json: &Json) -> StripResult<SPattern> {
        match json {
            Json::Null => Ok(SPattern::absent()),
            Json::String(s) => self.parse_pattern_literal(s).map(SPattern::new),
            Json::Object(map) => Ok(SPattern(
                self.decode_tagged(map, &self.patterns)?.map(Box::new),
            )),
            other => Err(StripError::unexpected(format!(
                "expected a pattern, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Decode a value holder from a JSON tree.
    ///
    /// Integers decode as constants, strings through the literal rules,
    /// objects through their `_type`; `null` and `{}` decode as absent.
    pub fn decode_value(&self, json: &Json) -> StripResult<SValue> {
        match json {
            Json::Null => Ok(SValue::absent()),
            Json::Number(n) => n
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(|c| SValue::new(Value::Const(c)))
                .ok_or_else(|| StripError::malformed(n.to_string(), "not a 32-bit integer")),
            Json::String(s) => self.parse_value_literal(s).map(SValue::new),
            Json::Object(map) => Ok(SValue(
                self.decode_tagged(map, &self.values)?.map(Box::new),
            )),
            other => Err(StripError::unexpected(format!(
                "expected a value, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Parse JSON text holding one pattern.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn pattern_from_str(&self, text: &str) -> StripResult<SPattern> {
        let json: Json = serde_json::from_str(text)?;
        self.decode_pattern(&json)
    }

    /// Parse JSON text holding one value.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn value_from_str(&self, text: &str) -> StripResult<SValue> {
        let json: Json = serde_json::from_str(text)?;
        self.decode_value(&json)
    }

    /// Resolve a pattern literal; the first claiming rule wins.
    pub fn parse_pattern_literal(&self, s: &str) -> StripResult<Pattern> {
        self.pattern_literals
            .iter()
            .find_map(|rule| rule(s))
            .unwrap_or_else(|| Err(StripError::unrecognized(s)))
    }

    /// Resolve a value literal; the first claiming rule wins.
    pub fn parse_value_literal(&self, s: &str) -> StripResult<Value> {
        self.value_literals
            .iter()
            .find_map(|rule| rule(s))
            .unwrap_or_else(|| Err(StripError::unrecognized(s)))
    }

    fn decode_tagged<T>(
        &self,
        map: &Map<String, Json>,
        table: &BTreeMap<&'static str, FieldDecoder<T>>,
    ) -> StripResult<Option<T>> {
        if map.is_empty() {
            return Ok(None);
        }
        let tag = map.get("_type").ok_or(StripError::MissingTypeTag)?;
        let name = tag.as_str().ok_or(StripError::InvalidTypeTag)?;
        let decode = table
            .get(name)
            .ok_or_else(|| StripError::unknown_type(name))?;
        decode(&Fields::new(map, self)).map(Some)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("patterns", &self.patterns.keys().collect::<Vec<_>>())
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .field("pattern_literals", &self.pattern_literals.len())
            .field("value_literals", &self.value_literals.len())
            .finish()
    }
}

pub(crate) fn json_kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/registry.rs"]
mod tests;
