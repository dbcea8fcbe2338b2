//! Error types shared across the crate.

use std::fmt::{Display, Formatter};

/// Shared crate result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Failure classes surfaced by the bindings.
///
/// Transport failures (`Send`) and local serialization failures
/// (`Encode`/`Decode`) are deliberately distinct variants so callers can
/// tell an OS-level problem from a payload-level one.
#[derive(Debug)]
pub enum BridgeError {
    /// The named remote message port could not be resolved or created.
    InvalidPort(String),
    /// The port handle was already closed; no send is possible.
    Closed,
    /// Transport failure: timeout, OS-reported error status, or a reply
    /// that never materialised.
    Send(String),
    /// Request serialization failed before any OS call was made.
    Encode(String),
    /// Reply deserialization failed after a successful exchange.
    Decode(String),
    /// The workspace could not open the given path.
    Open(String),
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(name) => write!(f, "invalid port: {name}"),
            Self::Closed => write!(f, "port closed"),
            Self::Send(msg) => write!(f, "send failed: {msg}"),
            Self::Encode(msg) => write!(f, "encode: {msg}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
            Self::Open(msg) => write!(f, "open: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {}
