//! JSON payload codec for typed message-port exchanges.
//!
//! The wire representation is opaque bytes from the transport's point of
//! view; this module owns the structured boundary on either side of a
//! [`send`](crate::messageport::remote::RemotePort::send). Kept separate
//! from the macOS-only modules so it compiles and tests everywhere.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{BridgeError, Result};

/// Serialize a request value to JSON bytes.
///
/// # Errors
///
/// Returns [`BridgeError::Encode`] when the value cannot be represented
/// as JSON (for example a map with non-string keys).
pub fn encode<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(value).map_err(|err| BridgeError::Encode(err.to_string()))
}

/// Deserialize reply bytes into the expected response type.
///
/// # Errors
///
/// Returns [`BridgeError::Decode`] when the bytes are not valid JSON for
/// the target type.
pub fn decode<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|err| BridgeError::Decode(err.to_string()))
}
