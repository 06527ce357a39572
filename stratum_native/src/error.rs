// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors, and the native last-error side channel.

use std::ffi::{CStr, CString, c_char, c_int};
use std::fmt;
use std::ptr::NonNull;

use stratum_sys::error::{SDL_ClearError, SDL_GetError, SDL_SetError};

/// Errors from the safe wrappers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The native library reported a failure. Holds the last-error text as
    /// it was right after the failing call.
    Native(String),
    /// An argument was rejected before reaching the native library.
    Invalid(String),
    /// A string passed to the native library contained a NUL byte.
    InteriorNul,
    /// A length or count did not fit the native integer type.
    SizeOverflow,
    /// A buffer is shorter than the operation needs.
    BufferTooSmall {
        /// Bytes the operation needs.
        needed: usize,
        /// Bytes provided.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(msg) if msg.is_empty() => f.write_str("native call failed"),
            Self::Native(msg) => f.write_str(msg),
            Self::Invalid(msg) => write!(f, "invalid argument: {msg}"),
            Self::InteriorNul => f.write_str("string contains an interior NUL byte"),
            Self::SizeOverflow => f.write_str("size does not fit the native integer type"),
            Self::BufferTooSmall { needed, actual } => {
                write!(f, "buffer too small: need {needed} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        Self::other(err)
    }
}

/// Result alias for the safe wrappers.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Captures the current native last-error text.
    pub(crate) fn native() -> Self {
        Self::Native(last_error())
    }
}

/// Returns the calling thread's last native error message; empty if none.
#[must_use]
pub fn last_error() -> String {
    // SAFETY: SDL_GetError has no preconditions and returns a thread-local,
    // NUL-terminated string (never null).
    unsafe { borrowed_string(SDL_GetError()) }.unwrap_or_default()
}

/// Sets the calling thread's native error message.
///
/// NUL bytes in `msg` are dropped.
pub fn set_error(msg: &str) {
    let text = CString::new(msg.replace('\0', "")).unwrap_or_default();
    // SAFETY: the format is a literal "%s" and its single argument a valid
    // C string, so no user text is interpreted as a format.
    unsafe { SDL_SetError(c"%s".as_ptr(), text.as_ptr()) };
}

/// Clears the calling thread's native error message.
pub fn clear_error() {
    // SAFETY: no preconditions.
    unsafe { SDL_ClearError() };
}

/// Converts a native success flag.
pub(crate) fn check(ok: bool) -> Result<()> {
    if ok { Ok(()) } else { Err(Error::native()) }
}

/// Converts a native handle, treating null as failure.
pub(crate) fn non_null<T>(ptr: *mut T) -> Result<NonNull<T>> {
    NonNull::new(ptr).ok_or_else(Error::native)
}

pub(crate) fn c_string(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::InteriorNul)
}

pub(crate) fn to_c_int(n: usize) -> Result<c_int> {
    c_int::try_from(n).map_err(|_| Error::SizeOverflow)
}

/// Copies a borrowed C string; `None` for null. Invalid UTF-8 is replaced.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub(crate) unsafe fn borrowed_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null and NUL-terminated per the caller.
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_nul_is_rejected() {
        assert_eq!(c_string("a\0b"), Err(Error::InteriorNul));
        assert_eq!(c_string("ab").unwrap().as_bytes(), b"ab");
    }

    #[test]
    fn c_int_range() {
        assert_eq!(to_c_int(12).unwrap(), 12);
        assert_eq!(to_c_int(usize::MAX), Err(Error::SizeOverflow));
    }

    #[test]
    fn borrowed_string_handles_null_and_lossy() {
        // SAFETY: null is allowed.
        assert_eq!(unsafe { borrowed_string(core::ptr::null()) }, None);
        let bytes = b"ok\xff\0";
        // SAFETY: `bytes` is NUL-terminated.
        let s = unsafe { borrowed_string(bytes.as_ptr().cast()) }.unwrap();
        assert_eq!(s, "ok\u{fffd}");
    }

    #[test]
    fn display() {
        assert_eq!(Error::Native(String::new()).to_string(), "native call failed");
        assert_eq!(Error::Native("No such file".into()).to_string(), "No such file");
        assert_eq!(
            Error::BufferTooSmall { needed: 8, actual: 4 }.to_string(),
            "buffer too small: need 8 bytes, got 4"
        );
    }
}
