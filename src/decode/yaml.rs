//! YAML body decoding (`application/x-yaml`).

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::BindError;

/// Decode a YAML stream into `obj`.
pub fn decode<T: DeserializeOwned>(reader: impl Read, obj: &mut T) -> Result<(), BindError> {
    *obj = serde_yaml::from_reader(reader).map_err(|e| BindError::decode("yaml", e))?;
    Ok(())
}

/// Decode an already-materialized YAML payload into `obj`.
pub fn decode_bytes<T: DeserializeOwned>(body: &[u8], obj: &mut T) -> Result<(), BindError> {
    *obj = serde_yaml::from_slice(body).map_err(|e| BindError::decode("yaml", e))?;
    Ok(())
}
