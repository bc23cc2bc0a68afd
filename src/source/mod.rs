//! # Value Sources
//!
//! A value source is a named, multi-valued string view over one part of a
//! request: URL query parameters, header fields, router-supplied path
//! parameters, or decoded form fields. The field mapper is dispatched over
//! the [`ValueSource`] trait rather than over concrete source types, so a
//! binding pass is the same algorithm regardless of where the strings came
//! from.
//!
//! Sources are request-scoped: built at the start of a bind call and
//! discarded at its end.

mod form;
mod header;
mod path;
mod query;

pub use form::FormSource;
pub use header::HeaderSource;
pub use path::PathParams;
pub use query::QuerySource;

use std::borrow::Cow;
use std::collections::HashMap;

/// A mapping from string key to an ordered sequence of string values.
///
/// Implementations may override [`normalize_key`](ValueSource::normalize_key)
/// to canonicalize keys before lookup; the header source uses this to make
/// lookups case-insensitive.
pub trait ValueSource {
    /// All values recorded for `key`, in the order they appeared.
    ///
    /// `None` means the key is absent from this source, which is never an
    /// error — the destination field is simply left unmodified.
    fn values(&self, key: &str) -> Option<&[String]>;

    /// Every key present in this source. Used only when binding into a
    /// root-level string map, where no annotation matching applies.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Pre-lookup key transform. The default is identity.
    fn normalize_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        Cow::Borrowed(key)
    }
}

/// Shared multi-valued storage backing the concrete sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    map: HashMap<String, Vec<String>>,
}

impl Values {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the sequence for `key`, preserving arrival order.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.entry(key.into()).or_default().push(value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.map.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (k, v) in iter {
            values.append(k, v);
        }
        values
    }
}
