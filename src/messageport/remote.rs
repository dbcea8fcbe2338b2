//! Remote message-port client.
//!
//! [`RemotePort`] resolves a name against the OS's named-port registry and
//! performs synchronous request/reply exchanges. Each exchange is
//! self-contained: a tagged byte payload out, reply bytes (or a failure)
//! back, within two timeout budgets enforced by the OS.
//!
//! The handle lives behind a mutex. `CFMessagePort` is not documented as
//! thread-safe for concurrent sends on one reference, so sends are
//! serialised here rather than left to the caller; the same mutex carries
//! the open/closed state tag that makes [`close`](RemotePort::close)
//! idempotent and rejects use after close.

use std::ptr;
use std::sync::{Mutex, PoisonError};

use core_foundation::base::TCFType;
use core_foundation::data::CFData;
use core_foundation::string::CFString;
use core_foundation_sys::base::kCFAllocatorDefault;
use core_foundation_sys::data::CFDataRef;
use core_foundation_sys::messageport::{
    CFMessagePortCreateRemote, CFMessagePortInvalidate, CFMessagePortIsValid,
    CFMessagePortSendRequest,
};
use core_foundation_sys::runloop::kCFRunLoopDefaultMode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::messageport::ffi::{self, CFMessagePort};
use crate::payload;
use crate::{BridgeError, Result};

/// Default budget, in seconds, for delivering a request.
pub const DEFAULT_SEND_TIMEOUT: f64 = 10.0;
/// Default budget, in seconds, for the reply to arrive.
pub const DEFAULT_RECEIVE_TIMEOUT: f64 = 10.0;

/// Connection to a named remote message port.
///
/// Opened by name lookup against the OS port registry, closed exactly once
/// (explicitly or on drop). After [`close`](Self::close) every send returns
/// [`BridgeError::Closed`]; there is no transition back to open.
pub struct RemotePort {
    handle: Mutex<Option<CFMessagePort>>,
    send_timeout: f64,
    receive_timeout: f64,
}

// The raw port reference never leaves the mutex, so all access to it is
// serialised even though the CF type itself makes no Send/Sync promises.
unsafe impl Send for RemotePort {}
unsafe impl Sync for RemotePort {}

impl RemotePort {
    /// Open a connection to the remote port registered under `name`, with
    /// the default 10-second send and receive budgets.
    ///
    /// The name is a process-local identifier scoped by the OS; there is
    /// no portability guarantee across machines.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidPort`] when no port with that name
    /// exists or the OS refuses to create the remote reference.
    pub fn open(name: &str) -> Result<Self> {
        Self::open_with_timeouts(name, DEFAULT_SEND_TIMEOUT, DEFAULT_RECEIVE_TIMEOUT)
    }

    /// Open a connection with caller-chosen timeout budgets, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidPort`] when no port with that name
    /// exists or the OS refuses to create the remote reference.
    pub fn open_with_timeouts(
        name: &str,
        send_timeout: f64,
        receive_timeout: f64,
    ) -> Result<Self> {
        let cf_name = CFString::new(name);
        let raw = unsafe {
            CFMessagePortCreateRemote(kCFAllocatorDefault, cf_name.as_concrete_TypeRef())
        };
        if raw.is_null() {
            return Err(BridgeError::InvalidPort(name.to_owned()));
        }
        let handle = unsafe { CFMessagePort::wrap_under_create_rule(raw) };
        debug!(port = name, "remote message port opened");
        Ok(Self {
            handle: Mutex::new(Some(handle)),
            send_timeout,
            receive_timeout,
        })
    }

    /// Send `payload` tagged with `msgid` and block for the reply.
    ///
    /// Blocks the calling thread for up to the send budget to deliver and
    /// the receive budget for the reply. On success returns the reply
    /// bytes, which may be empty. The payload is copied into a `CFData`
    /// before the call, so the input buffer outlives the exchange by
    /// construction, and the OS-allocated reply buffer is released exactly
    /// once when the returned copy has been taken.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Closed`] after [`close`](Self::close), and
    /// [`BridgeError::Send`] on timeout, on an OS-reported failure status,
    /// or when the OS produced no reply data.
    pub fn send_bytes(&self, msgid: i32, payload: &[u8]) -> Result<Vec<u8>> {
        let guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        let port = guard.as_ref().ok_or(BridgeError::Closed)?;

        let request = CFData::from_buffer(payload);
        let mut reply: CFDataRef = ptr::null();
        let status = unsafe {
            CFMessagePortSendRequest(
                port.as_concrete_TypeRef(),
                msgid,
                request.as_concrete_TypeRef(),
                self.send_timeout,
                self.receive_timeout,
                kCFRunLoopDefaultMode,
                &mut reply,
            )
        };

        if status != ffi::MSG_SUCCESS {
            return Err(BridgeError::Send(ffi::describe_status(status)));
        }
        if reply.is_null() {
            return Err(BridgeError::Send("no reply data".to_owned()));
        }
        let reply = unsafe { CFData::wrap_under_create_rule(reply) };
        debug!(msgid, request_len = payload.len(), reply_len = reply.len(), "request sent");
        Ok(reply.bytes().to_vec())
    }

    /// Send a serializable request tagged with `msgid` and deserialize the
    /// reply into `Resp`.
    ///
    /// The request is encoded as JSON before any OS call; the reply bytes
    /// are decoded after a successful exchange.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Encode`] when the request cannot be
    /// serialized (no OS call is made), any [`send_bytes`](Self::send_bytes)
    /// error for the exchange itself, and [`BridgeError::Decode`] when the
    /// reply is not valid JSON for `Resp`. The three classes are distinct.
    pub fn send<Req, Resp>(&self, msgid: i32, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = payload::encode(request)?;
        let reply = self.send_bytes(msgid, &body)?;
        payload::decode(&reply)
    }

    /// Invalidate and release the OS port reference.
    ///
    /// Safe to call any number of times; only the first call releases.
    /// Subsequent sends return [`BridgeError::Closed`].
    pub fn close(&self) {
        let mut guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(port) = guard.take() {
            unsafe { CFMessagePortInvalidate(port.as_concrete_TypeRef()) };
            debug!("remote message port closed");
        }
    }

    /// Whether [`close`](Self::close) has already run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Whether the port can still be used for sends.
    ///
    /// `false` once closed, and also when the remote side has gone away
    /// and the OS invalidated the reference.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .is_some_and(|port| unsafe { CFMessagePortIsValid(port.as_concrete_TypeRef()) != 0 })
    }
}

impl Drop for RemotePort {
    fn drop(&mut self) {
        self.close();
    }
}
