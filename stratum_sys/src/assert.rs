// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_assert.h`.

use core::ffi::{c_char, c_int, c_void};

c_enum! {
    /// What the assertion handler wants done about a failed assertion.
    pub struct SDL_AssertState(c_int) {
        /// Retry the assertion immediately.
        RETRY = SDL_ASSERTION_RETRY = 0,
        /// Break into the debugger.
        BREAK = SDL_ASSERTION_BREAK = 1,
        /// Terminate the program.
        ABORT = SDL_ASSERTION_ABORT = 2,
        /// Ignore this failure.
        IGNORE = SDL_ASSERTION_IGNORE = 3,
        /// Ignore this assertion for the rest of the run.
        ALWAYS_IGNORE = SDL_ASSERTION_ALWAYS_IGNORE = 4,
    }
}

/// Static bookkeeping for one assertion site.
///
/// The library links every triggered site into a list reachable from
/// [`SDL_GetAssertionReport`].
#[repr(C)]
#[derive(Debug)]
pub struct SDL_AssertData {
    pub always_ignore: bool,
    pub trigger_count: u32,
    pub condition: *const c_char,
    pub filename: *const c_char,
    pub linenum: c_int,
    pub function: *const c_char,
    pub next: *const SDL_AssertData,
}

pub type SDL_AssertionHandler = Option<
    unsafe extern "C" fn(data: *const SDL_AssertData, userdata: *mut c_void) -> SDL_AssertState,
>;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_ReportAssertion(
        data: *mut SDL_AssertData,
        func: *const c_char,
        file: *const c_char,
        line: c_int,
    ) -> SDL_AssertState;
    /// A `None` handler restores the default.
    pub fn SDL_SetAssertionHandler(handler: SDL_AssertionHandler, userdata: *mut c_void);
    pub fn SDL_GetDefaultAssertionHandler() -> SDL_AssertionHandler;
    pub fn SDL_GetAssertionHandler(puserdata: *mut *mut c_void) -> SDL_AssertionHandler;
    /// Returns the head of the triggered-assertion list, or null.
    pub fn SDL_GetAssertionReport() -> *const SDL_AssertData;
    pub fn SDL_ResetAssertionReport();
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn assert_data_layout() {
        let ptr = size_of::<*const c_char>();
        assert_eq!(offset_of!(SDL_AssertData, trigger_count), 4);
        assert_eq!(offset_of!(SDL_AssertData, condition), 8);
        assert_eq!(size_of::<SDL_AssertData>() % ptr, 0);
    }

    #[test]
    fn assert_state_values() {
        assert_eq!(SDL_ASSERTION_RETRY.0, 0);
        assert_eq!(SDL_ASSERTION_ALWAYS_IGNORE.0, 4);
    }
}
