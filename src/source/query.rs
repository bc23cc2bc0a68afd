use super::{ValueSource, Values};

/// URL query string parameters, percent-decoded, multi-valued.
///
/// Repeated parameters (`?foo=bar&foo=baz`) are kept in order; a scalar
/// destination field takes the first, a root string map keeps the last.
#[derive(Debug, Clone, Default)]
pub struct QuerySource {
    values: Values,
}

impl QuerySource {
    /// Parse a raw query string (without the leading `?`).
    #[must_use]
    pub fn parse(raw_query: &str) -> Self {
        let values = url::form_urlencoded::parse(raw_query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        QuerySource { values }
    }
}

impl ValueSource for QuerySource {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.values.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.values.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let q = QuerySource::parse("x=1&y=2");
        assert_eq!(q.values("x"), Some(&["1".to_string()][..]));
        assert_eq!(q.values("y"), Some(&["2".to_string()][..]));
    }

    #[test]
    fn test_repeated_params_keep_order() {
        let q = QuerySource::parse("foo=bar&foo=2");
        assert_eq!(q.values("foo"), Some(&["bar".to_string(), "2".to_string()][..]));
    }

    #[test]
    fn test_percent_decoding() {
        let q = QuerySource::parse("name=hello%20world");
        assert_eq!(q.values("name"), Some(&["hello world".to_string()][..]));
    }

    #[test]
    fn test_empty_value_is_present() {
        let q = QuerySource::parse("map_foo=");
        assert_eq!(q.values("map_foo"), Some(&[String::new()][..]));
    }
}
