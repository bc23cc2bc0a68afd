use serde::de::DeserializeOwned;
use tracing::debug;

use crate::decode::BodyFormat;
use crate::error::BindError;
use crate::mapping::{BindTag, Bindable};
use crate::request::BindRequest;
use crate::source::{HeaderSource, PathParams, QuerySource};

/// Decoder configuration, threaded by value into every bind call.
///
/// Set once at process start and shared; nothing here is mutated per
/// request, so concurrent binds see a consistent view without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindConfig {
    /// Decoder to run when the content type matches nothing in the
    /// registry. `None` skips body binding silently for unrecognized types.
    pub default_format: Option<BodyFormat>,
    /// Fail JSON decoding when the payload contains object keys the
    /// destination does not declare.
    pub deny_unknown_fields: bool,
}

/// The dispatcher: owns a [`BindConfig`] and drives the body, query, uri,
/// and header passes for one destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binder {
    config: BindConfig,
}

impl Binder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: BindConfig) -> Self {
        Binder { config }
    }

    #[must_use]
    pub fn config(&self) -> &BindConfig {
        &self.config
    }

    /// Bind the request onto `obj`.
    ///
    /// Passes run in fixed order — body, query, uri, header — and later
    /// passes may overwrite fields written by earlier ones when a field is
    /// annotated for several sources. The uri pass only runs when the
    /// caller wired a router and supplied `path`. The first failing pass
    /// aborts the call; fields already written keep their values.
    pub fn bind<T>(
        &self,
        req: &BindRequest<'_>,
        obj: &mut T,
        path: Option<&PathParams>,
    ) -> Result<(), BindError>
    where
        T: Bindable + DeserializeOwned,
    {
        let format = req
            .content_type()
            .and_then(BodyFormat::from_mime)
            .or(self.config.default_format);

        match format {
            Some(format) => {
                debug!(format = format.name(), "decoding request body");
                format.decode(req, obj, &self.config)?;
            }
            None => {
                debug!(
                    content_type = req.content_type().unwrap_or(""),
                    "no body decoder registered; skipping body pass"
                );
            }
        }

        if T::wants(BindTag::Query) {
            let src = QuerySource::parse(req.query().unwrap_or(""));
            obj.apply(&src, BindTag::Query)?;
        }

        if let Some(params) = path {
            if T::wants(BindTag::Uri) {
                obj.apply(params, BindTag::Uri)?;
            }
        }

        if T::wants(BindTag::Header) {
            let src = HeaderSource::from_headers(req.headers());
            obj.apply(&src, BindTag::Header)?;
        }

        Ok(())
    }
}

/// Bind with the default configuration: no default body decoder, unknown
/// JSON keys tolerated.
pub fn bind<T>(
    req: &BindRequest<'_>,
    obj: &mut T,
    path: Option<&PathParams>,
) -> Result<(), BindError>
where
    T: Bindable + DeserializeOwned,
{
    Binder::new().bind(req, obj, path)
}
