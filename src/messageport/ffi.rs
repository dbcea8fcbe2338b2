//! Raw CoreFoundation glue for the message-port wrapper.
//!
//! `core-foundation-sys` declares the `CFMessagePort` functions but no
//! owned wrapper type and no send-request status codes; both live here.

use core_foundation::base::TCFType;
use core_foundation::{declare_TCFType, impl_TCFType};
use core_foundation_sys::messageport::{CFMessagePortGetTypeID, CFMessagePortRef};

declare_TCFType! {
    /// Owned reference to a `CFMessagePort`, released exactly once on drop.
    CFMessagePort, CFMessagePortRef
}
impl_TCFType!(CFMessagePort, CFMessagePortRef, CFMessagePortGetTypeID);

/// Status codes returned by `CFMessagePortSendRequest` (`CFMessagePort.h`).
pub const MSG_SUCCESS: i32 = 0;
/// The request could not be delivered within the send budget.
pub const MSG_SEND_TIMEOUT: i32 = -1;
/// No reply arrived within the receive budget.
pub const MSG_RECEIVE_TIMEOUT: i32 = -2;
/// The port reference is invalid.
pub const MSG_IS_INVALID: i32 = -3;
/// The underlying transport reported an error.
pub const MSG_TRANSPORT_ERROR: i32 = -4;
/// The port became invalid while the request was in flight.
pub const MSG_BECAME_INVALID: i32 = -5;

/// Human-readable description of a send-request status code.
#[must_use]
pub fn describe_status(status: i32) -> String {
    match status {
        MSG_SEND_TIMEOUT => "send timed out".to_owned(),
        MSG_RECEIVE_TIMEOUT => "receive timed out".to_owned(),
        MSG_IS_INVALID => "port is invalid".to_owned(),
        MSG_TRANSPORT_ERROR => "transport error".to_owned(),
        MSG_BECAME_INVALID => "port became invalid".to_owned(),
        other => format!("status {other}"),
    }
}
