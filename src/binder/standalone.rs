//! Single-pass binders, usable without the content-negotiating dispatcher.
//!
//! Each runs exactly one field-mapper pass and applies no gating, so they
//! also work on root-level string map destinations, which the dispatcher
//! deliberately skips.

use crate::decode::form;
use crate::error::BindError;
use crate::mapping::{BindTag, Bindable};
use crate::request::BindRequest;
use crate::source::{HeaderSource, PathParams, QuerySource};

/// Binds URL query parameters with the `query` tag.
pub struct Query;

impl Query {
    pub fn bind<T: Bindable>(req: &BindRequest<'_>, obj: &mut T) -> Result<(), BindError> {
        let src = QuerySource::parse(req.query().unwrap_or(""));
        obj.apply(&src, BindTag::Query)
    }
}

/// Binds request headers with the `header` tag.
pub struct Header;

impl Header {
    pub fn bind<T: Bindable>(req: &BindRequest<'_>, obj: &mut T) -> Result<(), BindError> {
        let src = HeaderSource::from_headers(req.headers());
        obj.apply(&src, BindTag::Header)
    }
}

/// Binds a URL-encoded body (merged with query parameters) with the `form`
/// tag.
pub struct Form;

impl Form {
    pub fn bind<T: Bindable>(req: &BindRequest<'_>, obj: &mut T) -> Result<(), BindError> {
        form::bind_urlencoded(req, obj)
    }
}

/// Binds router-supplied path parameters with the `uri` tag.
pub struct Uri;

impl Uri {
    pub fn bind<T: Bindable>(params: &PathParams, obj: &mut T) -> Result<(), BindError> {
        obj.apply(params, BindTag::Uri)
    }
}
