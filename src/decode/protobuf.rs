//! Protobuf body decoding (`application/x-protobuf`).
//!
//! Reaches the destination through [`Bindable::merge_protobuf`], whose
//! default rejects with a decode error: only destinations marked
//! `#[bind(protobuf)]` (which implement `prost::Message`) can accept a
//! protobuf body. [`merge_message`] is the direct entry point when the
//! destination type is known to be a message.

use std::io::Read;

use crate::error::BindError;
use crate::mapping::Bindable;

/// Decode a protobuf stream into `obj`.
pub fn decode<T: Bindable>(mut reader: impl Read, obj: &mut T) -> Result<(), BindError> {
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|e| BindError::decode("protobuf", e))?;
    decode_bytes(&body, obj)
}

/// Decode an already-materialized protobuf payload into `obj`.
pub fn decode_bytes<T: Bindable>(body: &[u8], obj: &mut T) -> Result<(), BindError> {
    obj.merge_protobuf(body)
}

/// Merge a protobuf payload directly into a `prost` message.
pub fn merge_message<M: prost::Message>(body: &[u8], msg: &mut M) -> Result<(), BindError> {
    msg.merge(body).map_err(|e| BindError::decode("protobuf", e))
}
