//! Materialized view of an incoming HTTP request.
//!
//! Binding is transport-agnostic: the dispatcher consumes a [`BindRequest`]
//! holding borrowed headers, the raw query string, and the fully-read body
//! bytes. Callers on `http`-based stacks can build one straight from an
//! [`http::Request`] whose body has been collected.

use http::header::CONTENT_TYPE;
use http::HeaderMap;

use crate::content_type::filter_flags;
use crate::source::FormSource;

/// Borrowed request data for one bind call.
///
/// Request-scoped: build it, bind with it, drop it. The body must already be
/// materialized — imposing read deadlines on the transport below is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct BindRequest<'r> {
    headers: &'r HeaderMap,
    query: Option<&'r str>,
    body: &'r [u8],
    form: Option<&'r FormSource>,
}

impl<'r> BindRequest<'r> {
    #[must_use]
    pub fn new(headers: &'r HeaderMap, query: Option<&'r str>, body: &'r [u8]) -> Self {
        BindRequest {
            headers,
            query,
            body,
            form: None,
        }
    }

    /// Build from an `http::Request` with a collected body.
    #[must_use]
    pub fn from_http<B: AsRef<[u8]>>(req: &'r http::Request<B>) -> Self {
        BindRequest {
            headers: req.headers(),
            query: req.uri().query(),
            body: req.body().as_ref(),
            form: None,
        }
    }

    /// Attach form fields the transport extracted from a multipart body.
    #[must_use]
    pub fn with_form(mut self, form: &'r FormSource) -> Self {
        self.form = Some(form);
        self
    }

    /// The bare MIME type from `Content-Type`, parameters stripped.
    /// `None` when the header is absent or not valid UTF-8.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(filter_flags)
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }

    /// Raw query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        self.body
    }

    /// Pre-extracted multipart form fields, when the transport supplied any.
    #[must_use]
    pub fn form(&self) -> Option<&FormSource> {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::HeaderValue;

    #[test]
    fn test_content_type_strips_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let req = BindRequest::new(&headers, None, b"");
        assert_eq!(req.content_type(), Some("application/json"));
    }

    #[test]
    fn test_missing_content_type() {
        let headers = HeaderMap::new();
        let req = BindRequest::new(&headers, None, b"");
        assert_eq!(req.content_type(), None);
    }

    #[test]
    fn test_from_http_pulls_query() {
        let req = http::Request::builder()
            .uri("/users?limit=10")
            .body(Vec::<u8>::new())
            .unwrap();
        let view = BindRequest::from_http(&req);
        assert_eq!(view.query(), Some("limit=10"));
    }
}
