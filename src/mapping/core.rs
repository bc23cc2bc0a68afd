use std::collections::{BTreeMap, HashMap};

use crate::error::BindError;
use crate::mapping::FromBindValue;
use crate::source::ValueSource;

/// Which annotation namespace a binding pass reads.
///
/// Annotations for different tags are independent and may coexist on one
/// field, so the same field can be both a JSON body target and a query
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindTag {
    /// URL query string parameters (`#[bind(query = "...")]`)
    Query,
    /// Decoded form fields (`#[bind(form = "...")]`)
    Form,
    /// Request header fields (`#[bind(header = "...")]`)
    Header,
    /// Router-supplied path parameters (`#[bind(uri = "...")]`)
    Uri,
}

impl BindTag {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BindTag::Query => "query",
            BindTag::Form => "form",
            BindTag::Header => "header",
            BindTag::Uri => "uri",
        }
    }
}

/// A destination that the field mapper can walk.
///
/// Implemented by `#[derive(Bindable)]`, which turns the struct's declared
/// fields and `#[bind(...)]` annotations into a visitor over
/// [`bind_field`]/[`bind_nested`] calls, and directly for root-level string
/// maps.
///
/// The walk is depth-first, fields in declaration order. Cyclic struct
/// shapes (a struct containing itself transitively) are a caller error; the
/// mapper does not guard against infinite recursion.
pub trait Bindable {
    /// Run one binding pass: match each eligible field's key against `src`
    /// and convert matched values in place. Fields with no source entry are
    /// left untouched.
    fn apply(&mut self, src: &dyn ValueSource, tag: BindTag) -> Result<(), BindError>;

    /// Dispatcher gate: does any declared field carry an explicit, non-`"-"`
    /// annotation for `tag`? Scans the top-level declaration only.
    fn wants(tag: BindTag) -> bool
    where
        Self: Sized;

    /// Merge a protobuf payload into the destination in place.
    ///
    /// The default rejects: only destinations marked `#[bind(protobuf)]`
    /// (which must also implement `prost::Message`) can accept a protobuf
    /// body, mirroring the decode error for a non-protobuf-capable target.
    fn merge_protobuf(&mut self, _body: &[u8]) -> Result<(), BindError> {
        Err(BindError::decode(
            "protobuf",
            "destination is not a protobuf message",
        ))
    }
}

impl<T: Bindable> Bindable for Box<T> {
    fn apply(&mut self, src: &dyn ValueSource, tag: BindTag) -> Result<(), BindError> {
        (**self).apply(src, tag)
    }

    fn wants(tag: BindTag) -> bool {
        T::wants(tag)
    }

    fn merge_protobuf(&mut self, body: &[u8]) -> Result<(), BindError> {
        (**self).merge_protobuf(body)
    }
}

/// Resolve one field against the source and convert in place.
///
/// `field` is the declared field name (for error context); `key` is the
/// annotation-resolved source key, which still goes through the source's
/// `normalize_key` hook before lookup. Lookup happens exactly once per field
/// per pass; an absent key leaves the field at its existing value.
pub fn bind_field<T: FromBindValue>(
    slot: &mut T,
    src: &dyn ValueSource,
    field: &str,
    key: &str,
) -> Result<(), BindError> {
    let key = src.normalize_key(key);
    let Some(values) = src.values(key.as_ref()) else {
        return Ok(());
    };
    *slot = T::from_bind_values(values).map_err(|e| e.into_bind_error(field))?;
    Ok(())
}

/// Recurse into a nested struct field with the same flat source.
///
/// `field` is the nested field's declared name; failures inside the child
/// come back with it prepended, so deep errors report the full path
/// (`person.age`).
pub fn bind_nested<T: Bindable>(
    slot: &mut T,
    src: &dyn ValueSource,
    tag: BindTag,
    field: &str,
) -> Result<(), BindError> {
    slot.apply(src, tag).map_err(|e| e.prefix_field(field))
}

/// Recurse into a nilable nested struct field, allocating a zero value the
/// first time the walker descends through it.
pub fn bind_nested_opt<T: Bindable + Default>(
    slot: &mut Option<T>,
    src: &dyn ValueSource,
    tag: BindTag,
    field: &str,
) -> Result<(), BindError> {
    slot.get_or_insert_with(T::default)
        .apply(src, tag)
        .map_err(|e| e.prefix_field(field))
}

// Root-level string maps bypass annotation matching entirely: every source
// key becomes an entry, and the *last* of repeated values wins — unlike
// scalar fields, which take the first. The asymmetry is inherited behavior
// and is preserved on purpose.
//
// Maps with non-string values have no impl: with no per-key annotation to
// drive conversion they cannot be bound, and the gap is surfaced at compile
// time instead of at runtime.
macro_rules! impl_bindable_string_map {
    ($($map:ident),*) => {
        $(
            impl Bindable for $map<String, String> {
                fn apply(&mut self, src: &dyn ValueSource, _tag: BindTag) -> Result<(), BindError> {
                    for key in src.keys() {
                        if let Some(last) = src.values(key).and_then(|vs| vs.last()) {
                            self.insert(key.to_string(), last.clone());
                        }
                    }
                    Ok(())
                }

                // Non-struct destinations never gate a dispatcher pass.
                fn wants(_tag: BindTag) -> bool {
                    false
                }
            }
        )*
    };
}

impl_bindable_string_map!(HashMap, BTreeMap);
