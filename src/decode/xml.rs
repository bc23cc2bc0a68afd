//! XML body decoding (`application/xml`, `text/xml`).

use std::io::{BufReader, Read};

use serde::de::DeserializeOwned;

use crate::error::BindError;

/// Decode an XML stream into `obj`.
pub fn decode<T: DeserializeOwned>(reader: impl Read, obj: &mut T) -> Result<(), BindError> {
    *obj = quick_xml::de::from_reader(BufReader::new(reader))
        .map_err(|e| BindError::decode("xml", e))?;
    Ok(())
}

/// Decode an already-materialized XML payload into `obj`.
pub fn decode_bytes<T: DeserializeOwned>(body: &[u8], obj: &mut T) -> Result<(), BindError> {
    *obj = quick_xml::de::from_reader(body).map_err(|e| BindError::decode("xml", e))?;
    Ok(())
}
