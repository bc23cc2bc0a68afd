//! # Field Mapper
//!
//! The generic recursive algorithm that walks a destination struct's
//! declared fields, matches per-field annotations against a
//! [`ValueSource`](crate::source::ValueSource), converts the matched string
//! values to the field's type, and writes them in place.
//!
//! ## Overview
//!
//! The walk itself is not reflective: `#[derive(Bindable)]` generates a
//! field-descriptor visitor per struct, and the runtime side of it lives
//! here:
//!
//! - [`Bindable`] — the destination capability the derive implements
//! - [`BindTag`] — which annotation namespace a pass reads (`query`, `form`,
//!   `header`, `uri`)
//! - [`bind_field`] / [`bind_nested`] — the helpers the generated code calls
//!   per field
//! - [`FromBindValue`] / [`FromBindStr`] — runtime string-to-type coercion
//!
//! ## Semantics
//!
//! Fields are visited in declaration order, depth-first. A field with no
//! matching source key is left at its existing value. A scalar field takes
//! the *first* of repeated source values; a root-level string map keeps the
//! *last* — an inherited inconsistency that is preserved deliberately.
//! Nested struct fields (named or via `Option`/`Box`) are recursed into
//! with the same flat source; nesting never prefixes keys.

mod convert;
mod core;

pub use convert::{ConvertError, FromBindStr, FromBindValue};
pub use core::{bind_field, bind_nested, bind_nested_opt, BindTag, Bindable};
