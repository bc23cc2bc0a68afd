//! JSON body decoding (`application/json`).

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::BindError;

/// Decode a JSON stream into `obj`.
///
/// An empty stream is a successful no-op: a GET with
/// `Content-Type: application/json` and no body must not fail, and every
/// body-bound field stays at its existing value.
pub fn decode<T: DeserializeOwned>(
    mut reader: impl Read,
    obj: &mut T,
    deny_unknown_fields: bool,
) -> Result<(), BindError> {
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|e| BindError::decode("json", e))?;
    decode_bytes(&body, obj, deny_unknown_fields)
}

/// Decode an already-materialized JSON payload into `obj`.
///
/// With `deny_unknown_fields`, the deserializer tracks every object key the
/// destination ignored and fails naming the first one.
pub fn decode_bytes<T: DeserializeOwned>(
    body: &[u8],
    obj: &mut T,
    deny_unknown_fields: bool,
) -> Result<(), BindError> {
    if body.is_empty() {
        return Ok(());
    }

    if deny_unknown_fields {
        let mut de = serde_json::Deserializer::from_slice(body);
        let mut unknown: Option<String> = None;
        let value: T = serde_ignored::deserialize(&mut de, |path| {
            if unknown.is_none() {
                unknown = Some(path.to_string());
            }
        })
        .map_err(|e| BindError::decode("json", e))?;
        if let Some(key) = unknown {
            return Err(BindError::decode("json", format!("unknown field \"{key}\"")));
        }
        *obj = value;
    } else {
        *obj = serde_json::from_slice(body).map_err(|e| BindError::decode("json", e))?;
    }
    Ok(())
}
