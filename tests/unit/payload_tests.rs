//! Unit tests for the JSON payload codec.

use std::collections::BTreeMap;

use macbridge::{payload, BridgeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Handshake {
    name: String,
    version: u32,
    tags: Vec<String>,
}

fn sample() -> Handshake {
    Handshake {
        name: "com.example.testport".into(),
        version: 3,
        tags: vec!["alpha".into(), "beta".into()],
    }
}

#[test]
fn round_trip_preserves_structural_equality() {
    let value = sample();
    let bytes = payload::encode(&value).unwrap();
    let back: Handshake = payload::decode(&bytes).unwrap();
    assert_eq!(back, value);
}

#[test]
fn encoded_payload_is_json() {
    let bytes = payload::encode(&sample()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["name"], "com.example.testport");
    assert_eq!(json["version"], 3);
}

#[test]
fn unrepresentable_request_is_an_encode_error() {
    // JSON object keys must be strings; a tuple key cannot be encoded.
    let mut value = BTreeMap::new();
    value.insert((1_u8, 2_u8), "x");
    let err = payload::encode(&value).unwrap_err();
    assert!(matches!(err, BridgeError::Encode(_)), "got {err:?}");
}

#[test]
fn malformed_reply_is_a_decode_error() {
    let err = payload::decode::<Handshake>(b"not json").unwrap_err();
    assert!(matches!(err, BridgeError::Decode(_)), "got {err:?}");
}

#[test]
fn empty_reply_is_a_decode_error() {
    let err = payload::decode::<Handshake>(b"").unwrap_err();
    assert!(matches!(err, BridgeError::Decode(_)), "got {err:?}");
}

#[test]
fn mismatched_shape_is_a_decode_error() {
    let bytes = payload::encode(&sample()).unwrap();
    let err = payload::decode::<Vec<u32>>(&bytes).unwrap_err();
    assert!(matches!(err, BridgeError::Decode(_)), "got {err:?}");
}

#[test]
fn unsized_values_encode() {
    let bytes = payload::encode("ping").unwrap();
    assert_eq!(bytes, b"\"ping\"");
}
