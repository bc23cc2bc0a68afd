//! # Body Codecs
//!
//! One adapter per supported body format. Each structured format exposes a
//! streaming `decode` over `io::Read` plus a `decode_bytes` variant for
//! payloads that are already materialized (protobuf integrity checks, for
//! example, want the raw bytes anyway).
//!
//! The form adapters are not codecs in the serde sense: URL-encoded and
//! multipart bodies are string key/value sets, so they run a field-mapper
//! pass with the `form` tag instead of a deserializer.

pub mod form;
pub mod json;
pub mod protobuf;
pub mod toml;
pub mod xml;
pub mod yaml;

use serde::de::DeserializeOwned;

use crate::binder::BindConfig;
use crate::content_type::{
    MIME_JSON, MIME_MULTIPART_FORM, MIME_POST_FORM, MIME_PROTOBUF, MIME_TOML, MIME_XML, MIME_XML2,
    MIME_YAML,
};
use crate::error::BindError;
use crate::mapping::Bindable;
use crate::request::BindRequest;

/// A body format the dispatcher can select by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Xml,
    Yaml,
    Toml,
    /// `application/x-www-form-urlencoded`
    Form,
    /// `multipart/form-data`, fields pre-extracted by the transport
    Multipart,
    Protobuf,
}

impl BodyFormat {
    /// Exact-match a bare MIME type (parameters already stripped) against
    /// the static registry. Unrecognized types return `None` and fall
    /// through to the configured default decoder, if any.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_JSON => Some(BodyFormat::Json),
            MIME_XML | MIME_XML2 => Some(BodyFormat::Xml),
            MIME_YAML => Some(BodyFormat::Yaml),
            MIME_TOML => Some(BodyFormat::Toml),
            MIME_POST_FORM => Some(BodyFormat::Form),
            MIME_MULTIPART_FORM => Some(BodyFormat::Multipart),
            MIME_PROTOBUF => Some(BodyFormat::Protobuf),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            BodyFormat::Json => "json",
            BodyFormat::Xml => "xml",
            BodyFormat::Yaml => "yaml",
            BodyFormat::Toml => "toml",
            BodyFormat::Form => "form",
            BodyFormat::Multipart => "multipart form",
            BodyFormat::Protobuf => "protobuf",
        }
    }

    /// Run this format's decoder against the request body, mutating `obj`
    /// in place. Decode failures abort the whole bind; partially-written
    /// fields are not rolled back.
    pub fn decode<T>(
        &self,
        req: &BindRequest<'_>,
        obj: &mut T,
        config: &BindConfig,
    ) -> Result<(), BindError>
    where
        T: Bindable + DeserializeOwned,
    {
        match self {
            BodyFormat::Json => json::decode_bytes(req.body(), obj, config.deny_unknown_fields),
            BodyFormat::Xml => xml::decode_bytes(req.body(), obj),
            BodyFormat::Yaml => yaml::decode_bytes(req.body(), obj),
            BodyFormat::Toml => toml::decode_bytes(req.body(), obj),
            BodyFormat::Form => form::bind_urlencoded(req, obj),
            BodyFormat::Multipart => form::bind_multipart(req, obj),
            BodyFormat::Protobuf => protobuf::decode_bytes(req.body(), obj),
        }
    }
}
