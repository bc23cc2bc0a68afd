use super::{ValueSource, Values};

/// Decoded form fields, from a URL-encoded body, the URL query string, or a
/// multipart body after the transport layer has extracted the raw key/value
/// pairs.
///
/// Multipart wire parsing is out of scope here: the HTTP layer hands over
/// already-extracted fields via [`FormSource::from_pairs`] and attaches them
/// to the request with
/// [`BindRequest::with_form`](crate::request::BindRequest::with_form).
#[derive(Debug, Clone, Default)]
pub struct FormSource {
    values: Values,
}

impl FormSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` payload.
    #[must_use]
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let values = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        FormSource { values }
    }

    /// Build from pre-extracted field pairs (e.g. a parsed multipart body).
    #[must_use]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        FormSource {
            values: Values::from_iter(pairs),
        }
    }

    /// Fold the URL query string into the form values, after any body
    /// values. Form binding considers both, the way `r.ParseForm` merges
    /// query parameters into the form set.
    pub fn merge_query(&mut self, raw_query: &str) {
        for (k, v) in url::form_urlencoded::parse(raw_query.as_bytes()) {
            self.values.append(k.into_owned(), v.into_owned());
        }
    }

    /// Record a single field value.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.append(key, value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueSource for FormSource {
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
    fn test_from_urlencoded() {
        let form = FormSource::from_urlencoded(b"foo=bar&bar=foo");
        assert_eq!(form.values("foo"), Some(&["bar".to_string()][..]));
        assert_eq!(form.values("bar"), Some(&["foo".to_string()][..]));
    }

    #[test]
    fn test_merge_query_appends_after_body() {
        let mut form = FormSource::from_urlencoded(b"foo=body");
        form.merge_query("foo=query&extra=1");
        assert_eq!(
            form.values("foo"),
            Some(&["body".to_string(), "query".to_string()][..])
        );
        assert_eq!(form.values("extra"), Some(&["1".to_string()][..]));
    }

    #[test]
    fn test_from_pairs() {
        let form = FormSource::from_pairs([("file_name", "logo.png")]);
        assert_eq!(form.values("file_name"), Some(&["logo.png".to_string()][..]));
    }
}
