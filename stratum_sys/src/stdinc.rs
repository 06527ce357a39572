// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_stdinc.h`: memory, time and environment.

use core::ffi::{c_char, c_void};

/// Nanoseconds since the Unix epoch.
pub type SDL_Time = i64;

/// A generic function pointer, as returned by symbol lookup.
pub type SDL_FunctionPointer = Option<unsafe extern "C" fn()>;

opaque! {
    /// A snapshot of environment variables.
    SDL_Environment;
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_malloc(size: usize) -> *mut c_void;
    pub fn SDL_free(mem: *mut c_void);

    pub fn SDL_GetEnvironment() -> *mut SDL_Environment;
    pub fn SDL_CreateEnvironment(populated: bool) -> *mut SDL_Environment;
    pub fn SDL_GetEnvironmentVariable(env: *mut SDL_Environment, name: *const c_char)
    -> *const c_char;
    /// The returned array must be released with [`SDL_free`].
    pub fn SDL_GetEnvironmentVariables(env: *mut SDL_Environment) -> *mut *mut c_char;
    pub fn SDL_SetEnvironmentVariable(
        env: *mut SDL_Environment,
        name: *const c_char,
        value: *const c_char,
        overwrite: bool,
    ) -> bool;
    pub fn SDL_UnsetEnvironmentVariable(env: *mut SDL_Environment, name: *const c_char) -> bool;
    pub fn SDL_DestroyEnvironment(env: *mut SDL_Environment);
}
