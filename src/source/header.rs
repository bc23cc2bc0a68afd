use std::borrow::Cow;

use http::HeaderMap;

use super::{ValueSource, Values};

/// Request header fields, multi-valued, looked up case-insensitively.
///
/// Keys are stored lowercased and [`normalize_key`](ValueSource::normalize_key)
/// lowercases before lookup, so a field annotated `header = "limit"` matches
/// a header sent as `Limit: 1000`.
#[derive(Debug, Clone, Default)]
pub struct HeaderSource {
    values: Values,
}

impl HeaderSource {
    /// Snapshot the given header map. Non-UTF-8 header values are replaced
    /// lossily.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut values = Values::new();
        for (name, value) in headers {
            // http::HeaderName is already lowercase
            values.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        HeaderSource { values }
    }
}

impl ValueSource for HeaderSource {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.values.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.values.keys())
    }

    fn normalize_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if key.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(key.to_ascii_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("limit"),
            HeaderValue::from_static("1000"),
        );
        let src = HeaderSource::from_headers(&headers);
        let key = src.normalize_key("Limit");
        assert_eq!(src.values(&key), Some(&["1000".to_string()][..]));
    }

    #[test]
    fn test_repeated_header_values() {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static("x-tag"),
            HeaderValue::from_static("a"),
        );
        headers.append(
            HeaderName::from_static("x-tag"),
            HeaderValue::from_static("b"),
        );
        let src = HeaderSource::from_headers(&headers);
        assert_eq!(src.values("x-tag"), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_normalize_borrows_when_already_lowercase() {
        let src = HeaderSource::default();
        assert!(matches!(src.normalize_key("limit"), Cow::Borrowed(_)));
    }
}
