//! Session-scoped sink for libsecp256k1 illegal-argument reports
//!
//! libsecp256k1 reports illegal arguments through a per-context callback and
//! then returns a failure code. The shim below is installed on each session's
//! own context with a pointer to that session's sink, so a report lands in
//! the session that caused it and nowhere else. The shim never unwinds.

use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;
use std::ffi::CStr;

use secp256k1_sys::types::{c_char, c_void};
use secp256k1_sys::Context;

/// Illegal-argument callback signature of libsecp256k1
pub(crate) type IllegalCallback = unsafe extern "C" fn(message: *const c_char, data: *mut c_void);

extern "C" {
    // Not re-exported by `secp256k1-sys`; the symbol carries its version prefix.
    #[link_name = "rustsecp256k1_v0_10_0_context_set_illegal_callback"]
    fn context_set_illegal_callback(
        ctx: NonNull<Context>,
        callback: Option<IllegalCallback>,
        data: *mut c_void,
    );
}

/// Route illegal-argument reports raised on `ctx` into `sink`
///
/// # Safety
///
/// `ctx` must be a live context, and `sink` must outlive every call made
/// through it.
pub(crate) unsafe fn install(ctx: NonNull<Context>, sink: &ErrorSink) {
    unsafe { context_set_illegal_callback(ctx, Some(illegal_argument_shim), sink.as_callback_data()) }
}

/// Holds the last diagnostic reported for one session
#[derive(Default)]
pub(crate) struct ErrorSink {
    message: Cell<Option<String>>,
}

impl fmt::Debug for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSink").finish_non_exhaustive()
    }
}

impl ErrorSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record(&self, message: String) {
        self.message.set(Some(message));
    }

    /// Remove and return the pending diagnostic
    pub(crate) fn take(&self) -> Option<String> {
        self.message.take()
    }

    pub(crate) fn as_callback_data(&self) -> *mut c_void {
        self as *const ErrorSink as *mut c_void
    }
}

/// Illegal-argument callback installed on every session context
///
/// # Safety
///
/// `data` is null or points to the live `ErrorSink` of the session owning the
/// context; `message` is null or a NUL-terminated string.
pub(crate) unsafe extern "C" fn illegal_argument_shim(message: *const c_char, data: *mut c_void) {
    if data.is_null() {
        return;
    }

    let text = if message.is_null() {
        String::from("<no diagnostic>")
    } else {
        // SAFETY: libsecp256k1 passes a static NUL-terminated string.
        unsafe { CStr::from_ptr(message.cast()) }
            .to_string_lossy()
            .into_owned()
    };

    // SAFETY: the session keeps its sink alive longer than its context.
    let sink = unsafe { &*(data as *const ErrorSink) };
    sink.record(text);
}
