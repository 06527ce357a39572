// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `SDL_filesystem.h` types shared with storage.

use core::ffi::{c_char, c_int, c_void};

use crate::stdinc::SDL_Time;

c_enum! {
    pub struct SDL_PathType(c_int) {
        NONE = SDL_PATHTYPE_NONE = 0,
        FILE = SDL_PATHTYPE_FILE = 1,
        DIRECTORY = SDL_PATHTYPE_DIRECTORY = 2,
        OTHER = SDL_PATHTYPE_OTHER = 3,
    }
}

/// Information about a path, as filled in by a path-info query.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SDL_PathInfo {
    pub r#type: SDL_PathType,
    pub size: u64,
    pub create_time: SDL_Time,
    pub modify_time: SDL_Time,
    pub access_time: SDL_Time,
}

/// Flags for glob queries.
pub type SDL_GlobFlags = u32;
pub const SDL_GLOB_CASEINSENSITIVE: SDL_GlobFlags = 1 << 0;

c_enum! {
    pub struct SDL_EnumerationResult(c_int) {
        /// Keep going.
        CONTINUE = SDL_ENUM_CONTINUE = 0,
        /// Stop, reporting success.
        SUCCESS = SDL_ENUM_SUCCESS = 1,
        /// Stop, reporting failure.
        FAILURE = SDL_ENUM_FAILURE = 2,
    }
}

/// Called once per directory entry. `dirname` ends with a path separator.
pub type SDL_EnumerateDirectoryCallback = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        dirname: *const c_char,
        fname: *const c_char,
    ) -> SDL_EnumerationResult,
>;
