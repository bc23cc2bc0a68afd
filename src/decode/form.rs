//! Form body binding (`application/x-www-form-urlencoded`,
//! `multipart/form-data`).
//!
//! Form payloads are string key/value sets, so both adapters run a field
//! mapper pass with the `form` tag over a [`FormSource`] instead of going
//! through serde.

use crate::error::BindError;
use crate::mapping::{BindTag, Bindable};
use crate::request::BindRequest;
use crate::source::FormSource;

/// Bind a URL-encoded body. The request's query parameters are folded into
/// the same value set after the body pairs, so a `GET /?foo=bar` with a form
/// content type still binds `foo`.
pub fn bind_urlencoded<T: Bindable>(req: &BindRequest<'_>, obj: &mut T) -> Result<(), BindError> {
    let mut src = FormSource::from_urlencoded(req.body());
    if let Some(query) = req.query() {
        src.merge_query(query);
    }
    obj.apply(&src, BindTag::Form)
}

/// Bind multipart form fields already extracted by the transport.
///
/// Parsing the multipart wire format is the HTTP layer's job; a request
/// without attached fields is a decode error, not a silent skip.
pub fn bind_multipart<T: Bindable>(req: &BindRequest<'_>, obj: &mut T) -> Result<(), BindError> {
    let Some(form) = req.form() else {
        return Err(BindError::decode(
            "form",
            "multipart form fields were not extracted by the transport",
        ));
    };
    obj.apply(form, BindTag::Form)
}
