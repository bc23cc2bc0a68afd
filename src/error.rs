use thiserror::Error;

/// Errors surfaced by a bind call.
///
/// Every failure is returned to the immediate caller; nothing is logged or
/// swallowed internally. The dispatcher stops at the first failing pass, so
/// a caller always sees the earliest error in body → query → uri → header
/// order.
#[derive(Debug, Error)]
pub enum BindError {
    /// The request body could not be decoded by the selected codec.
    ///
    /// Fields already written by the codec before it failed are left in
    /// whatever partial state it produced; there is no rollback.
    #[error("failed to decode {format} body")]
    Decode {
        /// Codec name (`"json"`, `"xml"`, `"yaml"`, `"toml"`, `"form"`, `"protobuf"`)
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A matched source value could not be coerced to the field's type.
    #[error("cannot bind {value:?} to field `{field}` as {target}")]
    Conversion {
        /// Destination field name
        field: String,
        /// The offending source value
        value: String,
        /// Target type kind (`"bool"`, `"i64"`, ...)
        target: &'static str,
    },

    /// The field's type cannot be populated from a string source at all.
    ///
    /// Mapping-typed fields always fail this way: with no per-key annotation
    /// there is nothing to drive conversion. Only a root-level string map
    /// destination is supported, and that path never reaches field mapping.
    #[error("unsupported binding type {target} for field `{field}`")]
    UnsupportedType {
        /// Destination field name
        field: String,
        /// Target type kind
        target: &'static str,
    },
}

impl BindError {
    /// Wrap a codec failure, tagging it with the format name.
    pub fn decode(
        format: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        BindError::Decode {
            format,
            source: source.into(),
        }
    }

    /// Prepend a parent field name to the error's field path, so a failure
    /// inside a nested struct reports `person.age` rather than `age`.
    /// Decode errors carry no field and pass through unchanged.
    #[must_use]
    pub fn prefix_field(self, parent: &str) -> Self {
        match self {
            BindError::Conversion {
                field,
                value,
                target,
            } => BindError::Conversion {
                field: format!("{parent}.{field}"),
                value,
                target,
            },
            BindError::UnsupportedType { field, target } => BindError::UnsupportedType {
                field: format!("{parent}.{field}"),
                target,
            },
            other => other,
        }
    }
}
