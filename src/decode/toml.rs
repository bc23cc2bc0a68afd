//! TOML body decoding (`application/toml`).

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::BindError;

/// Decode a TOML stream into `obj`. The payload is read to a UTF-8 string
/// and decoded exactly once.
pub fn decode<T: DeserializeOwned>(mut reader: impl Read, obj: &mut T) -> Result<(), BindError> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| BindError::decode("toml", e))?;
    decode_str(&body, obj)
}

/// Decode an already-materialized TOML payload into `obj`.
pub fn decode_bytes<T: DeserializeOwned>(body: &[u8], obj: &mut T) -> Result<(), BindError> {
    let body = std::str::from_utf8(body).map_err(|e| BindError::decode("toml", e))?;
    decode_str(body, obj)
}

fn decode_str<T: DeserializeOwned>(body: &str, obj: &mut T) -> Result<(), BindError> {
    *obj = toml::from_str(body).map_err(|e| BindError::decode("toml", e))?;
    Ok(())
}
