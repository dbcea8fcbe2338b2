//! File opening through the shared `NSWorkspace`.
//!
//! Asks the OS launch-services layer to open a filesystem path with its
//! default registered application. The source contract is a bare boolean
//! ([`open`]); [`try_open`] carries the same outcome with an error message
//! attached for callers that want one.

use objc2::rc::autoreleasepool;
use objc2_app_kit::NSWorkspace;
use objc2_foundation::{NSString, NSURL};
use tracing::debug;

use crate::{BridgeError, Result};

/// Open `path` with its default application.
///
/// Returns whether the OS reported success. No error detail beyond the
/// boolean; use [`try_open`] for a message.
#[must_use]
pub fn open(path: &str) -> bool {
    try_open(path).is_ok()
}

/// Open `path` with its default application, reporting failure detail.
///
/// All intermediate Cocoa objects are scoped to an autorelease pool inside
/// the call; nothing allocated here outlives the return.
///
/// # Errors
///
/// Returns [`BridgeError::Open`] for an empty path or when the OS declines
/// to open the file (no such file, no registered handler).
pub fn try_open(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BridgeError::Open("empty path".to_owned()));
    }
    let opened = autoreleasepool(|_| {
        let file = NSString::from_str(path);
        let url = unsafe { NSURL::fileURLWithPath(&file) };
        unsafe { NSWorkspace::sharedWorkspace().openURL(&url) }
    });
    if opened {
        debug!(path, "opened with default handler");
        Ok(())
    } else {
        Err(BridgeError::Open(format!("workspace declined to open {path}")))
    }
}
