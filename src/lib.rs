//! `macbridge` — minimal macOS framework bindings.
//!
//! Two independent components, both thin façades over OS frameworks:
//!
//! - [`messageport`] wraps CoreFoundation's `CFMessagePort` remote API:
//!   open a named remote port and perform synchronous request/reply
//!   exchanges of tagged byte payloads, raw or JSON-typed.
//! - [`workspace`] wraps AppKit's `NSWorkspace` to open a file with its
//!   default registered application.
//!
//! Message framing, transport, timeouts, and reply semantics are owned by
//! the OS; this crate adds ownership discipline (release exactly once,
//! no use after close) and a typed serialization boundary, nothing more.
//! Failures are returned synchronously to the caller; nothing is retried
//! or recovered internally.
//!
//! The platform-specific modules compile only on macOS. [`errors`] and
//! [`payload`] are portable so the crate builds everywhere.

pub mod errors;
pub mod payload;

#[cfg(target_os = "macos")]
pub mod messageport;
#[cfg(target_os = "macos")]
pub mod workspace;

pub use errors::{BridgeError, Result};
#[cfg(target_os = "macos")]
pub use messageport::remote::RemotePort;
