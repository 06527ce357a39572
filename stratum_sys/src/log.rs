// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_log.h`.
//!
//! The logging functions are C-variadic. Pass user text through a `"%s"`
//! format rather than as the format itself.

use core::ffi::{c_char, c_int, c_void};

c_enum! {
    /// Predefined log categories. Applications define their own from
    /// [`SDL_LogCategory::CUSTOM`] upward.
    pub struct SDL_LogCategory(c_int) {
        APPLICATION = SDL_LOG_CATEGORY_APPLICATION = 0,
        ERROR = SDL_LOG_CATEGORY_ERROR = 1,
        ASSERT = SDL_LOG_CATEGORY_ASSERT = 2,
        SYSTEM = SDL_LOG_CATEGORY_SYSTEM = 3,
        AUDIO = SDL_LOG_CATEGORY_AUDIO = 4,
        VIDEO = SDL_LOG_CATEGORY_VIDEO = 5,
        RENDER = SDL_LOG_CATEGORY_RENDER = 6,
        INPUT = SDL_LOG_CATEGORY_INPUT = 7,
        TEST = SDL_LOG_CATEGORY_TEST = 8,
        GPU = SDL_LOG_CATEGORY_GPU = 9,
        RESERVED2 = SDL_LOG_CATEGORY_RESERVED2 = 10,
        RESERVED3 = SDL_LOG_CATEGORY_RESERVED3 = 11,
        RESERVED4 = SDL_LOG_CATEGORY_RESERVED4 = 12,
        RESERVED5 = SDL_LOG_CATEGORY_RESERVED5 = 13,
        RESERVED6 = SDL_LOG_CATEGORY_RESERVED6 = 14,
        RESERVED7 = SDL_LOG_CATEGORY_RESERVED7 = 15,
        RESERVED8 = SDL_LOG_CATEGORY_RESERVED8 = 16,
        RESERVED9 = SDL_LOG_CATEGORY_RESERVED9 = 17,
        RESERVED10 = SDL_LOG_CATEGORY_RESERVED10 = 18,
        CUSTOM = SDL_LOG_CATEGORY_CUSTOM = 19,
    }
}

c_enum! {
    /// Log message priorities, lowest first.
    pub struct SDL_LogPriority(c_int) {
        INVALID = SDL_LOG_PRIORITY_INVALID = 0,
        TRACE = SDL_LOG_PRIORITY_TRACE = 1,
        VERBOSE = SDL_LOG_PRIORITY_VERBOSE = 2,
        DEBUG = SDL_LOG_PRIORITY_DEBUG = 3,
        INFO = SDL_LOG_PRIORITY_INFO = 4,
        WARN = SDL_LOG_PRIORITY_WARN = 5,
        ERROR = SDL_LOG_PRIORITY_ERROR = 6,
        CRITICAL = SDL_LOG_PRIORITY_CRITICAL = 7,
        COUNT = SDL_LOG_PRIORITY_COUNT = 8,
    }
}

/// Receives every message that passes the priority filter.
///
/// `category` is a plain `int` so custom categories pass through unchanged.
pub type SDL_LogOutputFunction = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        category: c_int,
        priority: SDL_LogPriority,
        message: *const c_char,
    ),
>;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_SetLogPriorities(priority: SDL_LogPriority);
    pub fn SDL_SetLogPriority(category: c_int, priority: SDL_LogPriority);
    pub fn SDL_GetLogPriority(category: c_int) -> SDL_LogPriority;
    pub fn SDL_ResetLogPriorities();
    /// A null `prefix` removes the prefix.
    pub fn SDL_SetLogPriorityPrefix(priority: SDL_LogPriority, prefix: *const c_char) -> bool;

    pub fn SDL_Log(fmt: *const c_char, ...);
    pub fn SDL_LogTrace(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogVerbose(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogDebug(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogInfo(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogWarn(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogError(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogCritical(category: c_int, fmt: *const c_char, ...);
    pub fn SDL_LogMessage(category: c_int, priority: SDL_LogPriority, fmt: *const c_char, ...);

    pub fn SDL_GetDefaultLogOutputFunction() -> SDL_LogOutputFunction;
    pub fn SDL_GetLogOutputFunction(
        callback: *mut SDL_LogOutputFunction,
        userdata: *mut *mut c_void,
    );
    pub fn SDL_SetLogOutputFunction(callback: SDL_LogOutputFunction, userdata: *mut c_void);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_values() {
        assert_eq!(SDL_LOG_CATEGORY_GPU.0, 9);
        assert_eq!(SDL_LOG_CATEGORY_RESERVED10.0, 18);
        assert_eq!(SDL_LOG_CATEGORY_CUSTOM.0, 19);
    }

    #[test]
    fn priorities_are_ordered() {
        let ordered = [
            SDL_LOG_PRIORITY_TRACE,
            SDL_LOG_PRIORITY_VERBOSE,
            SDL_LOG_PRIORITY_DEBUG,
            SDL_LOG_PRIORITY_INFO,
            SDL_LOG_PRIORITY_WARN,
            SDL_LOG_PRIORITY_ERROR,
            SDL_LOG_PRIORITY_CRITICAL,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} must sort below {:?}", pair[0], pair[1]);
        }
        assert_eq!(SDL_LOG_PRIORITY_COUNT.0, 8);
    }
}
