//! Content-Type MIME constants and helpers.
//!
//! The dispatcher matches the request's bare MIME type against these
//! constants exactly; parameters such as `; charset=utf-8` are stripped
//! first by [`filter_flags`].

pub const MIME_JSON: &str = "application/json";
pub const MIME_XML: &str = "application/xml";
pub const MIME_XML2: &str = "text/xml";
pub const MIME_YAML: &str = "application/x-yaml";
pub const MIME_TOML: &str = "application/toml";
pub const MIME_POST_FORM: &str = "application/x-www-form-urlencoded";
pub const MIME_MULTIPART_FORM: &str = "multipart/form-data";
pub const MIME_PROTOBUF: &str = "application/x-protobuf";

pub const MIME_HTML: &str = "text/html";
pub const MIME_PLAIN: &str = "text/plain";

/// Strip everything after the first `;` or space from a Content-Type value,
/// leaving the bare MIME type.
#[must_use]
pub fn filter_flags(content_type: &str) -> &str {
    match content_type.find([' ', ';']) {
        Some(idx) => &content_type[..idx],
        None => content_type,
    }
}
