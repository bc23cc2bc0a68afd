//! # reqbind
//!
//! **reqbind** binds incoming HTTP request data — body payload, query
//! string, header fields, and path parameters — onto a caller-supplied,
//! arbitrarily-shaped destination struct, driven entirely by per-field
//! `#[bind(...)]` annotations discovered through `#[derive(Bindable)]`.
//!
//! ## Overview
//!
//! Two components compose top-down:
//!
//! - **[`binder`]** — the dispatcher. Selects a body decoder by the
//!   request's content type (exact MIME match, parameters stripped), runs
//!   it, then sequences query, uri, and header field-mapper passes against
//!   the same destination in a fixed order: body, query, uri, header.
//! - **[`mapping`]** — the field mapper. Walks the destination's declared
//!   fields in order, resolves each field's source key from its annotation
//!   (defaulting to the field name, `"-"` excludes), converts matched
//!   string values to the field's type, and recurses into nested structs
//!   with the same flat source.
//!
//! Supporting modules: [`source`] (the query/header/path/form value-source
//! adapters), [`decode`] (JSON, XML, YAML, TOML, form, protobuf codec
//! adapters), [`request`] (the materialized request view), and
//! [`content_type`] (MIME constants).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use reqbind::{bind, BindRequest, Bindable, PathParams};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize, Bindable)]
//! struct ListPets {
//!     #[serde(default)]
//!     #[bind(query = "limit", header = "x-limit")]
//!     limit: u32,
//!     #[serde(default)]
//!     #[bind(uri = "owner_id")]
//!     owner_id: String,
//! }
//!
//! let req = BindRequest::from_http(&http_request);
//! let params: PathParams = [("owner_id", "u-17")].into_iter().collect();
//!
//! let mut dest = ListPets::default();
//! bind(&req, &mut dest, Some(&params))?;
//! ```
//!
//! ## Semantics worth knowing
//!
//! - A field with no entry in a source keeps its existing value; absence is
//!   never an error.
//! - Scalar fields take the *first* of repeated source values; binding a
//!   query string straight into a `HashMap<String, String>` keeps the
//!   *last* value per key. The asymmetry is deliberate, for compatibility.
//! - Later passes overwrite earlier ones when a field is annotated for
//!   several sources.
//! - Header lookups are case-insensitive; everything else is
//!   case-sensitive.
//! - An unrecognized content type with no configured default decoder skips
//!   body binding silently — a GET without a body is not an error.
//!
//! ## Out of scope
//!
//! Business-rule validation, response encoding, the HTTP transport itself,
//! and multipart wire parsing (the transport hands over extracted fields
//! via [`source::FormSource`]).

pub mod binder;
pub mod content_type;
pub mod decode;
pub mod error;
pub mod mapping;
pub mod request;
pub mod source;

pub use binder::{bind, BindConfig, Binder, Form, Header, Query, Uri};
pub use decode::BodyFormat;
pub use error::BindError;
pub use mapping::{BindTag, Bindable, FromBindStr, FromBindValue};
pub use request::BindRequest;
pub use source::{FormSource, HeaderSource, PathParams, QuerySource, ValueSource};

/// Derives [`Bindable`] for a struct with named fields.
///
/// Field annotations: `#[bind(query = "k", form = "k", header = "k",
/// uri = "k")]` in any combination; `"-"` excludes the field from that
/// source; `#[bind(skip)]` excludes it from all sources; `#[bind(nested)]`
/// recurses into a nested struct (also through `Option` and `Box`, with the
/// `Option` allocated on first descent). A field with no annotation for a
/// source binds under its own name.
///
/// Struct annotation: `#[bind(protobuf)]` makes the destination accept
/// `application/x-protobuf` bodies; the struct must also implement
/// `prost::Message`.
pub use reqbind_macros::Bindable;

// The derive expands to `::reqbind::prost::Message` paths so downstream
// crates do not need their own prost dependency.
#[doc(hidden)]
pub use prost;
