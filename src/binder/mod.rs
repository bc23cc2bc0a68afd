//! # Binder (dispatcher)
//!
//! Selects a body decoder from the request's content type, runs it, then
//! sequences the query, uri, and header field-mapper passes against the same
//! destination — body first, headers last, aborting at the first failure.
//!
//! ## Overview
//!
//! A bind call is strictly sequential and single-threaded: the dispatcher
//! owns the request view and one `&mut` destination for the call's duration,
//! touches no shared mutable state, and returns the first error it sees.
//! Concurrent bind calls on independent destinations need no coordination.
//!
//! ```rust,ignore
//! use reqbind::{bind, BindRequest, PathParams};
//!
//! let req = BindRequest::from_http(&http_request);
//! let params: PathParams = [("id", "123")].into_iter().collect();
//!
//! let mut dest = PetQuery::default();
//! bind(&req, &mut dest, Some(&params))?;
//! ```
//!
//! The standalone binders ([`Query`], [`Header`], [`Form`], [`Uri`]) run
//! exactly one pass each, without the dispatcher's gating — the way to bind
//! a query string straight into a root-level string map.

mod core;
mod standalone;

pub use core::{bind, BindConfig, Binder};
pub use standalone::{Form, Header, Query, Uri};
