//! Client side of CoreFoundation distributed message ports.
//!
//! A `CFMessagePort` is an OS-managed named endpoint supporting
//! synchronous send-and-wait-for-reply between processes on one machine.
//! [`remote::RemotePort`] resolves a name against the process-local port
//! registry and performs tagged request/reply exchanges; [`ffi`] holds
//! the raw glue the safe wrapper is built on.

pub mod ffi;
pub mod remote;
