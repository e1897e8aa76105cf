/// Convenience result type used across stripfx.
pub type StripResult<T> = Result<T, StripError>;

/// Top-level error taxonomy used by the codec and the strip boundary.
///
/// Rendering and evaluation never fail; every variant here comes from turning
/// text into a pattern or value tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// A string matched none of the registered literal forms.
    #[error("unrecognized literal: {0:?}")]
    UnrecognizedLiteral(String),

    /// A literal form was recognized but its payload is invalid.
    #[error("malformed literal {literal:?}: {reason}")]
    MalformedLiteral {
        /// The literal as received.
        literal: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A non-empty object carried no `_type` field.
    #[error("missing type tag: object has no \"_type\" field")]
    MissingTypeTag,

    /// The `_type` field is present but is not a string.
    #[error("invalid type tag: \"_type\" must be a string")]
    InvalidTypeTag,

    /// The `_type` field names a variant nobody registered.
    #[error("unknown type name: {0:?}")]
    UnknownTypeName(String),

    /// A structural field has the wrong shape.
    #[error("invalid field {field:?}: {reason}")]
    InvalidField {
        /// Field name as it appears on the wire.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A holder received a JSON kind it cannot represent.
    #[error("unexpected json: {0}")]
    UnexpectedJson(String),

    /// The input is not a JSON document at all.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl StripError {
    /// Build a [`StripError::UnrecognizedLiteral`] value.
    pub fn unrecognized(literal: impl Into<String>) -> Self {
        Self::UnrecognizedLiteral(literal.into())
    }

    /// Build a [`StripError::MalformedLiteral`] value.
    pub fn malformed(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`StripError::UnknownTypeName`] value.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownTypeName(name.into())
    }

    /// Build a [`StripError::InvalidField`] value.
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`StripError::UnexpectedJson`] value.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedJson(msg.into())
    }

    /// Build a [`StripError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix the field name onto nested field errors so the path survives
    /// recursion, e.g. `Before.After.Curve`.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            Self::InvalidField { field, reason } => Self::InvalidField {
                field: format!("{parent}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for StripError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
